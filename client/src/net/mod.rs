//! Networking modules for the external REST services.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` wraps `gloo-net` and the bearer header, `api` names the endpoints,
//! `types` defines the wire schema and `error` the failure model.

pub mod api;
pub mod error;
pub mod http;
pub mod types;
