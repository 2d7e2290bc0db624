//! Thin request layer over `gloo-net`.
//!
//! Client-side (hydrate): real HTTP calls.
//! Server-side (SSR): every call fails with `ApiError::Unavailable`, since
//! the external services are only reached from the browser.
//!
//! The reservations backend expects the session token as a bearer header; the
//! token is read from storage on every request so a login or logout is picked
//! up without re-wiring the client.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::fmt;

use serde::de::DeserializeOwned;

use super::error::ApiError;
#[cfg(feature = "hydrate")]
use super::error::ErrorBody;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        })
    }
}

/// Whether the persisted session token is attached to a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bearer {
    Attach,
    Omit,
}

pub(crate) fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

pub(crate) fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Send a request and decode the JSON response body.
///
/// # Errors
///
/// Returns `ApiError` on transport failure, non-2xx status, or an
/// undecodable body.
pub async fn fetch_json<T: DeserializeOwned>(
    method: Method,
    url: &str,
    bearer: Bearer,
    body: Option<serde_json::Value>,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = dispatch(method, url, bearer, body).await?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, url, bearer, body);
        Err(ApiError::Unavailable)
    }
}

/// Send a request whose response body is irrelevant.
///
/// # Errors
///
/// Returns `ApiError` on transport failure or non-2xx status.
pub async fn fetch_unit(
    method: Method,
    url: &str,
    bearer: Bearer,
    body: Option<serde_json::Value>,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        dispatch(method, url, bearer, body).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, url, bearer, body);
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
async fn dispatch(
    method: Method,
    url: &str,
    bearer: Bearer,
    body: Option<serde_json::Value>,
) -> Result<gloo_net::http::Response, ApiError> {
    use gloo_net::http::Request;

    let mut builder = match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Delete => Request::delete(url),
    };
    if bearer == Bearer::Attach {
        if let Some(token) = crate::util::storage::load_token() {
            builder = builder.header("Authorization", &bearer_header(&token));
        }
    }
    let request = match body {
        Some(body) => builder.json(&body),
        None => builder.build(),
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;

    let resp = request.send().await.map_err(|e| {
        log::error!("{method} {url} failed: {e}");
        ApiError::Network(e.to_string())
    })?;
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let text = resp.text().await.unwrap_or_default();
    log::warn!("{method} {url} -> {status}");
    Err(ApiError::Status { status, body: ErrorBody::parse(&text) })
}
