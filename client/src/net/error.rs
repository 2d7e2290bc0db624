//! Error type shared by every HTTP call.
//!
//! ERROR HANDLING
//! ==============
//! Pages never inspect raw responses. They branch on `status()` and show
//! `server_message()` / `detail()` when the backend provided one.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// Failure of a request to one of the external services.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed: {status}")]
    Status { status: u16, body: ErrorBody },
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// HTTP status for non-2xx responses.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// `mensagem` field of a reservations-backend error body.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } => body.mensagem.as_deref(),
            _ => None,
        }
    }

    /// `detail` field of an auth-service error body.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } => body.detail.as_deref(),
            _ => None,
        }
    }
}

/// Lenient view of an error response body.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorBody {
    pub mensagem: Option<String>,
    pub detail: Option<String>,
}

#[derive(Deserialize)]
struct RawErrorBody {
    #[serde(default)]
    mensagem: Option<String>,
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Parse a response body; anything that is not a JSON object yields an
    /// empty body. A non-string `detail` (validation error lists) is kept as
    /// its JSON text.
    pub fn parse(text: &str) -> Self {
        let Ok(raw) = serde_json::from_str::<RawErrorBody>(text) else {
            return Self::default();
        };
        let detail = raw.detail.and_then(|value| match value {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(s),
            other => Some(other.to_string()),
        });
        Self { mensagem: raw.mensagem.filter(|m| !m.is_empty()), detail }
    }
}
