//! Session actions and the routing gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages never touch the session signal directly for auth changes; they call
//! the actions here so storage and in-memory state stay in step. Route gates
//! share one decision function so every protected page redirects the same way.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::UserProfile;
use crate::state::session::SessionState;
use crate::util::storage;

/// What a protected route needs before it renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateRequirement {
    /// A session token (nickname setup).
    Session,
    /// A session token and a profile (everything else).
    Profile,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Wait,
    Render,
    Redirect(&'static str),
}

pub const LOGIN_PATH: &str = "/login";
pub const SETUP_PATH: &str = "/setup";
pub const HOME_PATH: &str = "/";
pub const DASHBOARD_PATH: &str = "/dashboard";

pub fn gate_decision(state: &SessionState, requirement: GateRequirement) -> GateDecision {
    if state.loading {
        return GateDecision::Wait;
    }
    if !state.is_authenticated() {
        return GateDecision::Redirect(LOGIN_PATH);
    }
    match requirement {
        GateRequirement::Profile if !state.has_profile() => GateDecision::Redirect(SETUP_PATH),
        _ => GateDecision::Render,
    }
}

/// History-replacing navigation used by every redirect.
pub fn replace_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Redirect whenever the gate for `requirement` decides so.
pub fn install_gate_redirect<F>(session: RwSignal<SessionState>, requirement: GateRequirement, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let GateDecision::Redirect(path) = gate_decision(&session.get(), requirement) {
            navigate(path, replace_options());
        }
    });
}

/// Restore the session from storage and fetch the profile if a token exists.
pub async fn restore_session(session: RwSignal<SessionState>) {
    let token = storage::load_token();
    let has_token = token.is_some();
    session.set(SessionState::restored(token));
    if has_token {
        load_profile(session).await;
    }
}

/// Fetch the profile; any failure (404 = no nickname yet) leaves it empty.
pub async fn load_profile(session: RwSignal<SessionState>) {
    let profile = match api::fetch_me().await {
        Ok(profile) => Some(profile),
        Err(_e) => {
            #[cfg(feature = "hydrate")]
            log::info!("no profile for current session: {_e}");
            None
        }
    };
    session.update(|s| s.profile_loaded(profile));
}

/// Ask the auth service to send a WhatsApp code.
///
/// # Errors
///
/// Returns the service failure unchanged for the caller to report.
pub async fn request_verification_code(phone_number: &str) -> Result<(), ApiError> {
    api::request_verification_code(phone_number).await
}

/// Exchange the code for a token, persist it and load the profile.
///
/// # Errors
///
/// Returns `ApiError` when the code is rejected; the session is untouched.
pub async fn verify_and_login(session: RwSignal<SessionState>, phone_number: &str, code: &str) -> Result<(), ApiError> {
    let token = api::verify_code(phone_number, code).await?;
    storage::save_token(&token);
    session.update(|s| s.logged_in(token));
    load_profile(session).await;
    Ok(())
}

pub fn update_profile(session: RwSignal<SessionState>, profile: UserProfile) {
    session.update(|s| s.update_profile(profile));
}

/// Forget the token everywhere; gates then send the user to `/login`.
pub fn logout(session: RwSignal<SessionState>) {
    storage::clear_token();
    session.update(SessionState::clear);
}
