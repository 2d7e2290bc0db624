//! One-time nickname setup for sessions without a profile.

#[cfg(test)]
#[path = "setup_test.rs"]
mod setup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::types::UserProfile;
use crate::state::session::SessionState;
use crate::state::toast::ToastSpec;
use crate::util::auth::{self, HOME_PATH};
use crate::util::notify::{notify, use_toasts};

const MIN_NICKNAME_CHARS: usize = 3;

fn validate_nickname(raw: &str) -> Result<String, &'static str> {
    let nickname = raw.trim();
    if nickname.is_empty() {
        return Err("Obrigatório");
    }
    if nickname.chars().count() < MIN_NICKNAME_CHARS {
        return Err("Mínimo 3 caracteres");
    }
    Ok(nickname.to_owned())
}

fn welcome_toast(nickname: &str) -> ToastSpec {
    ToastSpec::success(format!("Bem-vindo, {nickname}!")).duration_ms(3000)
}

/// Profile to store and greeting to show after a save. The greeting uses the
/// nickname as typed, whatever the backend echoes back.
fn nickname_saved(typed: &str, profile: UserProfile) -> (UserProfile, ToastSpec) {
    (profile, welcome_toast(typed))
}

#[component]
pub fn SetupPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let nickname = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);
    let saving = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let value = match validate_nickname(&nickname.get_untracked()) {
            Ok(value) => value,
            Err(msg) => {
                error.set(Some(msg));
                return;
            }
        };
        error.set(None);
        saving.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::set_nickname(&value).await {
                Ok(profile) => {
                    let (profile, toast) = nickname_saved(&value, profile);
                    auth::update_profile(session, profile);
                    notify(toasts, toast);
                    navigate(HOME_PATH, NavigateOptions::default());
                }
                Err(_) => notify(toasts, ToastSpec::error("Erro ao salvar").description("Tente novamente.")),
            }
            saving.set(false);
        });
    };

    view! {
        <div class="page page--center setup-page">
            <div class="card setup-card">
                <h1>"Bem-vindo!"</h1>
                <p class="card__subtitle">"Como você gostaria de ser chamado?"</p>
                <form on:submit=on_submit novalidate=true>
                    <label class=move || if error.get().is_some() { "field field--invalid" } else { "field" }>
                        <span class="field__label">"Apelido / Nome de Exibição"</span>
                        <input
                            class="input"
                            placeholder="Ex: João Silva"
                            prop:value=move || nickname.get()
                            on:input=move |ev| {
                                nickname.set(event_target_value(&ev));
                                error.set(None);
                            }
                        />
                        <span class="field__error">{move || error.get().unwrap_or_default()}</span>
                    </label>
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || saving.get()>
                        {move || if saving.get() { "Salvando..." } else { "Começar" }}
                    </button>
                </form>
                <button class="btn btn--ghost btn--small" on:click=move |_| auth::logout(session)>
                    "Sair / Cancelar"
                </button>
            </div>
        </div>
    }
}
