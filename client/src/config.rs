//! Build-time endpoint configuration for the external services.
//!
//! Values come from environment variables captured at compile time so the
//! WASM bundle needs no runtime config fetch. Unset variables fall back to the
//! local development ports.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_AUTH_API_URL: &str = "http://localhost:8081/api/auth";
pub const DEFAULT_RESERVATIONS_API_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_WHATSAPP_API_URL: &str = "http://localhost:3001";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin4mixmeet";

/// Base URL of the phone-code auth service.
pub fn auth_api_url() -> String {
    resolve_base_url(option_env!("MIXMEET_AUTH_API_URL"), DEFAULT_AUTH_API_URL)
}

/// Base URL of the reservations backend (also serves `/users`).
pub fn reservations_api_url() -> String {
    resolve_base_url(option_env!("MIXMEET_RESERVATIONS_API_URL"), DEFAULT_RESERVATIONS_API_URL)
}

/// Base URL of the WhatsApp connector.
pub fn whatsapp_api_url() -> String {
    resolve_base_url(option_env!("MIXMEET_WHATSAPP_API_URL"), DEFAULT_WHATSAPP_API_URL)
}

/// Password guarding the WhatsApp pairing screen on the login page.
pub fn admin_password() -> &'static str {
    match option_env!("MIXMEET_ADMIN_PASSWORD") {
        Some(value) if !value.is_empty() => value,
        _ => DEFAULT_ADMIN_PASSWORD,
    }
}

fn resolve_base_url(raw: Option<&str>, default: &str) -> String {
    raw.map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
        .trim_end_matches('/')
        .to_owned()
}
