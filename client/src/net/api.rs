//! REST endpoints of the auth service, the reservations backend and the
//! WhatsApp connector.
//!
//! Only the reservations backend and the connector see the session token; the
//! auth service is called before a token exists.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::http::{Bearer, Method, endpoint as endpoint_url, fetch_json, fetch_unit};
use super::types::{
    NicknameRequest, PhoneNumberRequest, Reservation, ReservationId, ReservationPayload, UserProfile,
    VerifyCodeRequest, VerifyCodeResponse, WaExistenceResponse, WhatsappStatus,
};
use crate::config;

/// One call of the catalogue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Endpoint<'a> {
    CheckWaExistence,
    RequestCode,
    VerifyCode,
    Me,
    Nickname,
    ListReservations,
    CreateReservation,
    UpdateReservation(&'a ReservationId),
    DeleteReservation(&'a ReservationId),
    WhatsappStatus,
}

/// Resolved request line of an endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Route {
    pub method: Method,
    pub url: String,
    pub bearer: Bearer,
}

/// Method, URL and bearer policy per endpoint. The auth service is called
/// before a token exists and never sees one.
pub(crate) fn route(endpoint: Endpoint<'_>) -> Route {
    let auth = |path: &str| endpoint_url(&config::auth_api_url(), path);
    let reservations = |path: &str| endpoint_url(&config::reservations_api_url(), path);
    let (method, url, bearer) = match endpoint {
        Endpoint::CheckWaExistence => (Method::Post, auth("/check-wa-existence"), Bearer::Omit),
        Endpoint::RequestCode => (Method::Post, auth("/request-code"), Bearer::Omit),
        Endpoint::VerifyCode => (Method::Post, auth("/verify-code"), Bearer::Omit),
        Endpoint::Me => (Method::Get, reservations("/users/me"), Bearer::Attach),
        Endpoint::Nickname => (Method::Post, reservations("/users/nickname"), Bearer::Attach),
        Endpoint::ListReservations => (Method::Get, reservations("/reservas"), Bearer::Attach),
        Endpoint::CreateReservation => (Method::Post, reservations("/reservas"), Bearer::Attach),
        Endpoint::UpdateReservation(id) => (Method::Put, reservations(&reservation_path(id)), Bearer::Attach),
        Endpoint::DeleteReservation(id) => (Method::Delete, reservations(&reservation_path(id)), Bearer::Attach),
        Endpoint::WhatsappStatus => (
            Method::Get,
            endpoint_url(&config::whatsapp_api_url(), "/api/whatsapp/status"),
            Bearer::Attach,
        ),
    };
    Route { method, url, bearer }
}

fn reservation_path(id: &ReservationId) -> String {
    format!("/reservas/{id}")
}

fn to_body<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn call_json<T: serde::de::DeserializeOwned>(
    endpoint: Endpoint<'_>,
    body: Option<serde_json::Value>,
) -> Result<T, ApiError> {
    let Route { method, url, bearer } = route(endpoint);
    fetch_json(method, &url, bearer, body).await
}

async fn call_unit(endpoint: Endpoint<'_>, body: Option<serde_json::Value>) -> Result<(), ApiError> {
    let Route { method, url, bearer } = route(endpoint);
    fetch_unit(method, &url, bearer, body).await
}

/// Ask the auth service whether `phone_number` (E.164) has a WhatsApp account.
///
/// # Errors
///
/// Returns `ApiError` when the check itself fails.
pub async fn check_wa_existence(phone_number: &str) -> Result<bool, ApiError> {
    let body = to_body(&PhoneNumberRequest { phone_number })?;
    let resp: WaExistenceResponse = call_json(Endpoint::CheckWaExistence, Some(body)).await?;
    Ok(resp.exists)
}

/// Have the auth service send a one-time code over WhatsApp.
///
/// # Errors
///
/// Returns `ApiError` when the service refuses or is unreachable.
pub async fn request_verification_code(phone_number: &str) -> Result<(), ApiError> {
    let body = to_body(&PhoneNumberRequest { phone_number })?;
    call_unit(Endpoint::RequestCode, Some(body)).await
}

/// Exchange a one-time code for a session token.
///
/// # Errors
///
/// Returns `ApiError` when the code is rejected or the service is unreachable.
pub async fn verify_code(phone_number: &str, code: &str) -> Result<String, ApiError> {
    let body = to_body(&VerifyCodeRequest { phone_number, code })?;
    let resp: VerifyCodeResponse = call_json(Endpoint::VerifyCode, Some(body)).await?;
    Ok(resp.access_token)
}

/// Fetch the current user's profile. A 404 means no nickname was set yet.
///
/// # Errors
///
/// Returns `ApiError` on any failure, including the 404 case.
pub async fn fetch_me() -> Result<UserProfile, ApiError> {
    call_json(Endpoint::Me, None).await
}

/// Set the current user's nickname, returning the stored profile.
///
/// # Errors
///
/// Returns `ApiError` when the backend rejects the nickname.
pub async fn set_nickname(nickname: &str) -> Result<UserProfile, ApiError> {
    let body = to_body(&NicknameRequest { nickname })?;
    call_json(Endpoint::Nickname, Some(body)).await
}

/// List all reservations.
///
/// # Errors
///
/// Returns `ApiError` on failure; 401 means the token expired.
pub async fn list_reservations() -> Result<Vec<Reservation>, ApiError> {
    call_json(Endpoint::ListReservations, None).await
}

/// Create a reservation. The backend answers 409 for a double booking.
///
/// # Errors
///
/// Returns `ApiError` when the backend rejects the payload.
pub async fn create_reservation(payload: &ReservationPayload) -> Result<(), ApiError> {
    let body = to_body(payload)?;
    call_unit(Endpoint::CreateReservation, Some(body)).await
}

/// Replace an existing reservation.
///
/// # Errors
///
/// Returns `ApiError` when the backend rejects the payload.
pub async fn update_reservation(id: &ReservationId, payload: &ReservationPayload) -> Result<(), ApiError> {
    let body = to_body(payload)?;
    call_unit(Endpoint::UpdateReservation(id), Some(body)).await
}

/// Delete a reservation.
///
/// # Errors
///
/// Returns `ApiError` when the deletion fails.
pub async fn delete_reservation(id: &ReservationId) -> Result<(), ApiError> {
    call_unit(Endpoint::DeleteReservation(id), None).await
}

/// Pairing status of the WhatsApp connector.
///
/// # Errors
///
/// Returns `ApiError` when the connector is unreachable.
pub async fn whatsapp_status() -> Result<WhatsappStatus, ApiError> {
    call_json(Endpoint::WhatsappStatus, None).await
}
