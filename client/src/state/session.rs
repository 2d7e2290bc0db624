//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the route gates and by user-aware pages. Mutated only by the
//! session actions in `util::auth` (restore, login, profile load, logout).

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::UserProfile;

/// Token, profile and loading status of the current user.
///
/// Authentication is derived from token presence, so the two can never
/// disagree. `loading` covers both the initial restore and the profile fetch
/// that follows a login; gates wait while it is set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub profile: Option<UserProfile>,
    pub loading: bool,
}

impl Default for SessionState {
    /// Before the browser restores the session nothing is known yet, so the
    /// initial (and server-rendered) state is loading.
    fn default() -> Self {
        Self { token: None, profile: None, loading: true }
    }
}

impl SessionState {
    /// State right after reading the persisted token. With a token the profile
    /// still has to be fetched, so loading continues.
    pub fn restored(token: Option<String>) -> Self {
        let loading = token.is_some();
        Self { token, profile: None, loading }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn has_profile(&self) -> bool {
        self.profile.is_some()
    }

    /// Record a freshly issued token; the profile fetch is pending.
    pub fn logged_in(&mut self, token: String) {
        self.token = Some(token);
        self.profile = None;
        self.loading = true;
    }

    /// Finish a profile fetch. `None` means the user has no nickname yet.
    /// A fetch that completes after logout is dropped.
    pub fn profile_loaded(&mut self, profile: Option<UserProfile>) {
        if self.token.is_none() {
            self.loading = false;
            return;
        }
        self.profile = profile;
        self.loading = false;
    }

    /// Replace the profile after nickname setup.
    pub fn update_profile(&mut self, profile: UserProfile) {
        if self.token.is_none() {
            return;
        }
        self.profile = Some(profile);
    }

    pub fn clear(&mut self) {
        self.token = None;
        self.profile = None;
        self.loading = false;
    }

    /// Name shown in greetings.
    pub fn display_name(&self) -> String {
        self.profile
            .as_ref()
            .map(|p| p.nickname.trim())
            .filter(|n| !n.is_empty())
            .unwrap_or("Usuário")
            .to_owned()
    }
}
