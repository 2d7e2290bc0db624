//! # mixmeet-client
//!
//! Leptos + WASM front-end for the MixMeet meeting-room reservations.
//!
//! Users sign in with a WhatsApp one-time code issued by the external auth
//! service, pick a nickname once, and then manage reservations held by the
//! reservations backend. This crate owns only presentation, routing and the
//! client-side session; every business rule lives behind the HTTP APIs in
//! `net::api`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
