//! Login page: WhatsApp one-time code in two steps, plus the admin pairing
//! shortcut for the WhatsApp connector.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::qr_modal::QrModal;
use crate::config;
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::WhatsappStatus;
use crate::state::session::SessionState;
use crate::state::toast::ToastSpec;
use crate::util::auth::{self, HOME_PATH, replace_options};
use crate::util::notify::{notify, use_toasts};
use crate::util::phone::{self, Country};

const CODE_LEN: usize = 6;
const WHATSAPP_UNAVAILABLE_MARKER: &str = "Whatsapp indisponivel";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Phone,
    Code,
}

/// Result of the WhatsApp existence check for the typed number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum WaStatus {
    Checking,
    Exists,
    NotFound,
}

fn validate_phone_input(country: Country, digits: &str) -> Result<String, &'static str> {
    if digits.trim().is_empty() {
        return Err("Obrigatório");
    }
    phone::to_e164(country, digits).ok_or("Número inválido.")
}

/// Keep at most six digits.
fn normalize_code_input(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).take(CODE_LEN).collect()
}

fn validate_code_input(raw: &str) -> Result<String, &'static str> {
    let code = raw.trim();
    if code.is_empty() {
        return Err("Obrigatório");
    }
    if code.len() != CODE_LEN || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err("6 dígitos necessários");
    }
    Ok(code.to_owned())
}

/// Toast for a failed code request. The auth service answers 503 (or says so
/// in `detail`) when the WhatsApp connector is down.
fn request_code_failure_toast(err: &ApiError) -> ToastSpec {
    let unavailable = err.status() == Some(503)
        || err.detail().is_some_and(|d| d.contains(WHATSAPP_UNAVAILABLE_MARKER))
        || err.to_string().contains(WHATSAPP_UNAVAILABLE_MARKER);
    let spec = if unavailable {
        ToastSpec::warning("Atenção").description("WhatsApp indisponível no momento, contate o administrador do sistema.")
    } else if err.status() == Some(500) {
        ToastSpec::error("Atenção").description("Erro interno no servidor.")
    } else {
        ToastSpec::error("Atenção").description("Falha na solicitação.")
    };
    spec.duration_ms(6000)
}

/// QR image to show, if the connector sent a non-empty one.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn pairing_qr(status: &WhatsappStatus) -> Option<&str> {
    status.qr.as_deref().filter(|qr| !qr.trim().is_empty())
}

/// Toast for a connector status without a QR code to show.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn whatsapp_status_toast(status: &WhatsappStatus) -> Option<ToastSpec> {
    if pairing_qr(status).is_some() {
        return None;
    }
    Some(if status.ready {
        ToastSpec::success("Conectado!").description("WhatsApp online.")
    } else {
        ToastSpec::warning("Aguarde...").description("Serviço iniciando.")
    })
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn admin_password_matches(entered: Option<&str>) -> bool {
    entered == Some(config::admin_password())
}

fn subtitle(step: Step, phone_number: &str) -> String {
    match step {
        Step::Phone => "Validação segura via WhatsApp".to_owned(),
        Step::Code => format!("Digite o código enviado para {phone_number}"),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let step = RwSignal::new(Step::Phone);
    let country = RwSignal::new(Country::default());
    let digits = RwSignal::new(String::new());
    let phone_number = RwSignal::new(String::new());
    let wa_status = RwSignal::new(None::<WaStatus>);
    let phone_error = RwSignal::new(None::<&'static str>);
    let code = RwSignal::new(String::new());
    let code_error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);
    let admin_loading = RwSignal::new(false);
    let qr = RwSignal::new(None::<String>);

    // Signed-in users go home; the gates route on to /setup if needed.
    Effect::new(move || {
        if session.get().is_authenticated() {
            navigate(HOME_PATH, replace_options());
        }
    });

    let on_request_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let e164 = match validate_phone_input(country.get_untracked(), &digits.get_untracked()) {
            Ok(e164) => e164,
            Err(msg) => {
                phone_error.set(Some(msg));
                return;
            }
        };
        phone_error.set(None);
        busy.set(true);
        wa_status.set(Some(WaStatus::Checking));

        leptos::task::spawn_local(async move {
            match api::check_wa_existence(&e164).await {
                Ok(true) => wa_status.set(Some(WaStatus::Exists)),
                Ok(false) => {
                    wa_status.set(Some(WaStatus::NotFound));
                    phone_error.set(Some("Este número não possui WhatsApp."));
                    busy.set(false);
                    return;
                }
                // The check is advisory; carry on when it is unavailable.
                Err(_) => wa_status.set(None),
            }
            match auth::request_verification_code(&e164).await {
                Ok(()) => {
                    phone_number.set(e164);
                    code.set(String::new());
                    code_error.set(None);
                    step.set(Step::Code);
                    notify(toasts, ToastSpec::success("Código Enviado!").description("Verifique seu WhatsApp."));
                }
                Err(e) => notify(toasts, request_code_failure_toast(&e)),
            }
            busy.set(false);
        });
    };

    let on_verify_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let code_value = match validate_code_input(&code.get_untracked()) {
            Ok(code_value) => code_value,
            Err(msg) => {
                code_error.set(Some(msg));
                return;
            }
        };
        code_error.set(None);
        busy.set(true);
        let phone_value = phone_number.get_untracked();

        leptos::task::spawn_local(async move {
            match auth::verify_and_login(session, &phone_value, &code_value).await {
                Ok(()) => notify(toasts, ToastSpec::success("Login bem-sucedido!").duration_ms(2000)),
                Err(_) => notify(toasts, ToastSpec::error("Código Inválido").duration_ms(4000)),
            }
            busy.set(false);
        });
    };

    let on_change_number = move |_| {
        step.set(Step::Phone);
        wa_status.set(None);
    };

    let on_admin = move |_| {
        if admin_loading.get_untracked() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let entered = web_sys::window()
                .and_then(|w| w.prompt_with_message("Senha de Administrador:").ok())
                .flatten();
            if !admin_password_matches(entered.as_deref()) {
                notify(toasts, ToastSpec::error("Acesso Negado"));
                return;
            }
            admin_loading.set(true);
            leptos::task::spawn_local(async move {
                match api::whatsapp_status().await {
                    Ok(status) => match whatsapp_status_toast(&status) {
                        Some(toast) => notify(toasts, toast),
                        None => qr.set(pairing_qr(&status).map(str::to_owned)),
                    },
                    Err(_) => notify(
                        toasts,
                        ToastSpec::error("Erro").description("Falha ao conectar com serviço WhatsApp."),
                    ),
                }
                admin_loading.set(false);
            });
        }
    };

    let status_icon = move || match wa_status.get() {
        Some(WaStatus::Checking) => view! { <span class="spinner spinner--sm"></span> }.into_any(),
        Some(WaStatus::Exists) => view! { <span class="status-icon status-icon--ok">"✔"</span> }.into_any(),
        Some(WaStatus::NotFound) => view! { <span class="status-icon status-icon--fail">"✖"</span> }.into_any(),
        None => ().into_any(),
    };

    let primary_busy = move || busy.get() || wa_status.get() == Some(WaStatus::Checking);

    view! {
        <div class="page page--center login-page">
            <div class="card login-card">
                <h1>"MixMeet Acesso"</h1>
                <p class="card__subtitle">{move || subtitle(step.get(), &phone_number.get())}</p>

                <Show when=move || step.get() == Step::Phone>
                    <form class="login-form" on:submit=on_request_code novalidate=true>
                        <label class="field">
                            <span class="field__label">"País"</span>
                            <select
                                class="input"
                                on:change=move |ev| {
                                    if let Some(selected) = Country::from_iso_code(&event_target_value(&ev)) {
                                        country.set(selected);
                                        digits.update(|d| *d = phone::clamp_input(selected, d));
                                        wa_status.set(None);
                                    }
                                }
                            >
                                {Country::ALL
                                    .into_iter()
                                    .map(|c| {
                                        view! {
                                            <option value=c.iso_code() selected=move || country.get() == c>
                                                {c.label()}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </label>
                        <label class=move || {
                            if phone_error.get().is_some() { "field field--invalid" } else { "field" }
                        }>
                            <span class="field__label">"WhatsApp"</span>
                            <div class="input-group">
                                <span class="input-group__prefix">
                                    {move || format!("+{}", country.get().calling_code())}
                                </span>
                                <input
                                    class="input"
                                    type="tel"
                                    inputmode="numeric"
                                    placeholder="DDD + Número"
                                    prop:value=move || phone::format_as_you_type(country.get(), &digits.get())
                                    on:input=move |ev| {
                                        digits.set(phone::clamp_input(country.get_untracked(), &event_target_value(&ev)));
                                        wa_status.set(None);
                                        phone_error.set(None);
                                    }
                                />
                                <span class="input-group__suffix">{status_icon}</span>
                            </div>
                            <span class="field__error">{move || phone_error.get().unwrap_or_default()}</span>
                        </label>
                        <button class="btn btn--primary btn--block" type="submit" disabled=primary_busy>
                            {move || {
                                if primary_busy() {
                                    view! { <span class="spinner spinner--sm"></span> }.into_any()
                                } else {
                                    "Continuar".into_any()
                                }
                            }}
                        </button>
                    </form>
                </Show>

                <Show when=move || step.get() == Step::Code>
                    <form class="login-form" on:submit=on_verify_code novalidate=true>
                        <label class=move || {
                            if code_error.get().is_some() { "field field--invalid" } else { "field" }
                        }>
                            <span class="field__label field__label--center">"Código de 6 dígitos"</span>
                            <input
                                class="input input--code"
                                inputmode="numeric"
                                maxlength="6"
                                placeholder="000000"
                                prop:value=move || code.get()
                                on:input=move |ev| code.set(normalize_code_input(&event_target_value(&ev)))
                            />
                            <span class="field__error">{move || code_error.get().unwrap_or_default()}</span>
                        </label>
                        <button class="btn btn--success btn--block" type="submit" disabled=move || busy.get()>
                            {move || {
                                if busy.get() {
                                    view! { <span class="spinner spinner--sm"></span> }.into_any()
                                } else {
                                    "Verificar".into_any()
                                }
                            }}
                        </button>
                        <button
                            class="btn btn--ghost btn--small"
                            type="button"
                            on:click=on_change_number
                            disabled=move || busy.get()
                        >
                            "Trocar número"
                        </button>
                    </form>
                </Show>
            </div>

            <button class="btn btn--link login-page__admin" on:click=on_admin disabled=move || admin_loading.get()>
                {move || if admin_loading.get() { "Carregando..." } else { "Configuração do Sistema (Admin)" }}
            </button>

            {move || {
                qr.get()
                    .map(|image| {
                        view! { <QrModal qr=image on_close=Callback::new(move |()| qr.set(None))/> }
                    })
            }}
        </div>
    }
}
