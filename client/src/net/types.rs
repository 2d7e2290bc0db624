//! Wire DTOs for the auth service and the reservations backend.
//!
//! DESIGN
//! ======
//! The reservations backend speaks camelCase with Portuguese field names while
//! the auth service speaks snake_case. Each DTO pins its own casing so the
//! Rust side keeps plain snake_case names throughout.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Reservation identifier as issued by the backend.
///
/// The backend owns the id format; numeric and string ids are both accepted
/// and echoed back unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReservationId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// A meeting-room booking with optional coffee-break details.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: ReservationId,
    /// Site or building.
    #[serde(default, deserialize_with = "null_as_default")]
    pub local: String,
    /// Room name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub sala: String,
    /// Start instant, ISO-8601.
    #[serde(default)]
    pub data_hora_inicio: Option<String>,
    /// End instant, ISO-8601.
    #[serde(default)]
    pub data_hora_fim: Option<String>,
    /// Person in charge of the booking.
    #[serde(default, deserialize_with = "null_as_default")]
    pub responsavel: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tem_cafe: bool,
    /// Participant head count, used to size the coffee order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantidade_cafe: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub descricao_cafe: String,
}

/// Body for `POST /reservas` and `PUT /reservas/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ReservationId>,
    pub local: String,
    pub sala: String,
    pub data_hora_inicio: String,
    pub data_hora_fim: String,
    pub responsavel: String,
    pub tem_cafe: bool,
    pub quantidade_cafe: i32,
    pub descricao_cafe: String,
}

/// Display profile returned by `GET /users/me` and `POST /users/nickname`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone_number: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nickname: String,
}

#[derive(Debug, Serialize)]
pub struct NicknameRequest<'a> {
    pub nickname: &'a str,
}

#[derive(Debug, Serialize)]
pub struct PhoneNumberRequest<'a> {
    pub phone_number: &'a str,
}

#[derive(Debug, Serialize)]
pub struct VerifyCodeRequest<'a> {
    pub phone_number: &'a str,
    pub code: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct VerifyCodeResponse {
    pub access_token: String,
}

#[derive(Debug, Deserialize)]
pub struct WaExistenceResponse {
    #[serde(default)]
    pub exists: bool,
}

/// Pairing state of the WhatsApp connector.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct WhatsappStatus {
    /// QR code image (data URL) to scan when the connector is not paired.
    #[serde(default)]
    pub qr: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ready: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
