//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host has no API of its own. It server-renders the Leptos shell for the
//! client routes, serves the compiled WASM/CSS under `/pkg`, and answers a
//! health probe. The browser talks to the auth, reservations and WhatsApp
//! services directly.

pub mod health;

use std::path::PathBuf;

use axum::Router;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ConfigError;

/// Full router for the given Leptos options.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(mixmeet_client::app::App);
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || mixmeet_client::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    health::routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// Load `[package.metadata.leptos]` (or the `LEPTOS_*` overrides) and build
/// the router.
///
/// # Errors
///
/// Returns [`ConfigError::Leptos`] when the Leptos configuration is missing
/// or malformed.
pub fn leptos_app() -> Result<Router, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    Ok(app(conf.leptos_options))
}
