//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::session_gate::SessionGate;
use crate::components::toast_host::ToastHost;
use crate::pages::{dashboard::DashboardPage, home::HomePage, login::LoginPage, setup::SetupPage};
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
use crate::util::auth::{self, GateRequirement, HOME_PATH};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and toast contexts, restores the persisted session
/// once in the browser, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(session);
    provide_context(toasts);

    // Effects only run after hydration, so storage is never read on the server.
    Effect::new(move || {
        leptos::task::spawn_local(auth::restore_session(session));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/mixmeet.css"/>
        <Title text="MixMeet"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path=HOME_PATH/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=StaticSegment("setup")
                    view=|| view! { <SessionGate requirement=GateRequirement::Session><SetupPage/></SessionGate> }
                />
                <Route
                    path=StaticSegment("")
                    view=|| view! { <SessionGate requirement=GateRequirement::Profile><HomePage/></SessionGate> }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| {
                        view! { <SessionGate requirement=GateRequirement::Profile><DashboardPage/></SessionGate> }
                    }
                />
            </Routes>
        </Router>
        <ToastHost/>
    }
}
