use super::*;

fn profile() -> UserProfile {
    UserProfile { phone_number: "+5511987654321".to_owned(), nickname: "Jo".to_owned() }
}

fn settled(token: Option<&str>, profile: Option<UserProfile>) -> SessionState {
    SessionState { token: token.map(str::to_owned), profile, loading: false }
}

#[test]
fn gates_wait_while_loading() {
    let state = SessionState::default();
    assert_eq!(gate_decision(&state, GateRequirement::Session), GateDecision::Wait);
    assert_eq!(gate_decision(&state, GateRequirement::Profile), GateDecision::Wait);

    let state = SessionState::restored(Some("tok".to_owned()));
    assert_eq!(gate_decision(&state, GateRequirement::Profile), GateDecision::Wait);
}

#[test]
fn gates_redirect_to_login_without_token() {
    let state = settled(None, None);
    assert_eq!(gate_decision(&state, GateRequirement::Session), GateDecision::Redirect(LOGIN_PATH));
    assert_eq!(gate_decision(&state, GateRequirement::Profile), GateDecision::Redirect(LOGIN_PATH));
}

#[test]
fn token_without_profile_renders_setup_but_redirects_full_gate() {
    let state = settled(Some("tok"), None);
    assert_eq!(gate_decision(&state, GateRequirement::Session), GateDecision::Render);
    assert_eq!(gate_decision(&state, GateRequirement::Profile), GateDecision::Redirect(SETUP_PATH));
}

#[test]
fn token_with_profile_renders_everything() {
    let state = settled(Some("tok"), Some(profile()));
    assert_eq!(gate_decision(&state, GateRequirement::Session), GateDecision::Render);
    assert_eq!(gate_decision(&state, GateRequirement::Profile), GateDecision::Render);
}

#[test]
fn profile_without_token_still_goes_to_login() {
    let state = settled(None, Some(profile()));
    assert_eq!(gate_decision(&state, GateRequirement::Profile), GateDecision::Redirect(LOGIN_PATH));
}

#[test]
fn redirects_replace_history() {
    assert!(replace_options().replace);
}
