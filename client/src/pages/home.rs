//! Landing page for signed-in users with a profile.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::util::auth::{self, DASHBOARD_PATH};

/// Up to two initials for the avatar.
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let name = Memo::new(move |_| session.get().display_name());

    view! {
        <div class="page home-page">
            <header class="home-page__header">
                <div class="home-page__user">
                    <span class="avatar">{move || initials(&name.get())}</span>
                    <div>
                        <span class="home-page__greeting">"Bem-vindo,"</span>
                        <strong class="home-page__name">{move || name.get()}</strong>
                    </div>
                </div>
                <button class="btn btn--ghost" on:click=move |_| auth::logout(session)>
                    "Sair"
                </button>
            </header>
            <main class="home-page__body">
                <div class="card home-card">
                    <h1>"Sistema de Reservas MixMeet"</h1>
                    <p>"Gerencie as reservas das salas de reunião e os pedidos de coffee break."</p>
                    <button
                        class="btn btn--primary btn--large"
                        on:click=move |_| navigate(DASHBOARD_PATH, NavigateOptions::default())
                    >
                        "Acessar Reservas"
                    </button>
                </div>
            </main>
        </div>
    }
}
