//! Route wrapper that renders its children only when the session allows it.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::util::auth::{GateDecision, GateRequirement, gate_decision, install_gate_redirect};

/// Gate for protected routes. Shows a spinner while the session is loading
/// or a redirect is pending.
#[component]
pub fn SessionGate(requirement: GateRequirement, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_gate_redirect(session, requirement, use_navigate());

    view! {
        <Show
            when=move || gate_decision(&session.get(), requirement) == GateDecision::Render
            fallback=|| view! { <div class="page page--center"><div class="spinner spinner--xl"></div></div> }
        >
            {children()}
        </Show>
    }
}
