//! Persisted session token in `localStorage`.
//!
//! TRADE-OFFS
//! ==========
//! Storage is browser-only; SSR paths report "no token" so the server always
//! renders the loading shell and the browser decides after hydration.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Storage key shared by the session container and the HTTP client.
pub const TOKEN_KEY: &str = "mixmeet_jwt";

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Read the persisted bearer token.
pub fn load_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let raw = local_storage()?.get_item(TOKEN_KEY).ok()?;
        normalize_token(raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the bearer token.
pub fn save_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            if storage.set_item(TOKEN_KEY, token).is_err() {
                log::warn!("could not persist session token");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the persisted bearer token.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

/// Treat blank stored values as absent.
fn normalize_token(raw: Option<String>) -> Option<String> {
    raw.map(|t| t.trim().to_owned()).filter(|t| !t.is_empty())
}
