//! Create/edit reservation modal.
//!
//! DESIGN
//! ======
//! Field values live in a plain `ReservationForm` so validation and payload
//! building are testable without a DOM. Time-zone conversion is injected, the
//! component passes the browser-aware converters from `util::datetime`.

#[cfg(test)]
#[path = "reservation_form_test.rs"]
mod reservation_form_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{Reservation, ReservationId, ReservationPayload};
use crate::state::toast::ToastSpec;
use crate::util::datetime;
use crate::util::notify::{notify, use_toasts};

/// Description sent when no coffee break is ordered.
pub const NO_COFFEE: &str = "Sem café";

const REQUIRED: &str = "Obrigatório";
const INVALID_DATE: &str = "Data inválida";

/// Raw input values, as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReservationForm {
    pub local: String,
    pub sala: String,
    pub inicio: String,
    pub fim: String,
    pub responsavel: String,
    pub quantidade: String,
    pub tem_cafe: bool,
    pub descricao_cafe: String,
}

/// Per-field validation messages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub local: Option<&'static str>,
    pub sala: Option<&'static str>,
    pub inicio: Option<&'static str>,
    pub fim: Option<&'static str>,
    pub responsavel: Option<&'static str>,
    pub quantidade: Option<&'static str>,
    pub descricao_cafe: Option<&'static str>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn required(value: &str, message: &'static str) -> Option<&'static str> {
    value.trim().is_empty().then_some(message)
}

impl ReservationForm {
    /// Prefill from an existing reservation; `to_input` renders instants for
    /// `datetime-local` inputs.
    pub fn from_reservation<F>(reservation: &Reservation, to_input: F) -> Self
    where
        F: Fn(Option<&str>) -> String,
    {
        Self {
            local: reservation.local.clone(),
            sala: reservation.sala.clone(),
            inicio: to_input(reservation.data_hora_inicio.as_deref()),
            fim: to_input(reservation.data_hora_fim.as_deref()),
            responsavel: reservation.responsavel.clone(),
            quantidade: reservation.quantidade_cafe.to_string(),
            tem_cafe: reservation.tem_cafe,
            descricao_cafe: if reservation.tem_cafe { reservation.descricao_cafe.clone() } else { String::new() },
        }
    }

    fn quantidade_value(&self) -> Result<i32, &'static str> {
        let raw = self.quantidade.trim();
        if raw.is_empty() {
            return Err("Informe a quantidade");
        }
        match raw.parse::<i32>() {
            Ok(n) if n >= 1 => Ok(n),
            Ok(_) => Err("Mínimo 1"),
            Err(_) => Err("Informe a quantidade"),
        }
    }

    /// Validate and build the request body. `to_utc` converts a
    /// `datetime-local` value to a UTC ISO string.
    ///
    /// # Errors
    ///
    /// Returns every failing field at once.
    pub fn to_payload<F>(&self, id: Option<ReservationId>, to_utc: F) -> Result<ReservationPayload, FormErrors>
    where
        F: Fn(&str) -> Option<String>,
    {
        let instant = |value: &str| -> Result<String, &'static str> {
            if value.trim().is_empty() {
                return Err(REQUIRED);
            }
            to_utc(value).ok_or(INVALID_DATE)
        };
        let inicio = instant(&self.inicio);
        let fim = instant(&self.fim);
        let quantidade = self.quantidade_value();

        let errors = FormErrors {
            local: required(&self.local, "Local é obrigatório"),
            sala: required(&self.sala, "Sala é obrigatória"),
            inicio: inicio.as_ref().err().copied(),
            fim: fim.as_ref().err().copied(),
            responsavel: required(&self.responsavel, REQUIRED),
            quantidade: quantidade.as_ref().err().copied(),
            descricao_cafe: if self.tem_cafe { required(&self.descricao_cafe, "Descreva o pedido do café") } else { None },
        };
        let (Ok(inicio), Ok(fim), Ok(quantidade)) = (inicio, fim, quantidade) else {
            return Err(errors);
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ReservationPayload {
            id,
            local: self.local.trim().to_owned(),
            sala: self.sala.trim().to_owned(),
            data_hora_inicio: inicio,
            data_hora_fim: fim,
            responsavel: self.responsavel.trim().to_owned(),
            tem_cafe: self.tem_cafe,
            quantidade_cafe: quantidade,
            descricao_cafe: if self.tem_cafe { self.descricao_cafe.trim().to_owned() } else { NO_COFFEE.to_owned() },
        })
    }
}

/// Toast for a rejected save. A 409 is a scheduling conflict, shown as a
/// warning rather than an error.
pub fn save_failure_toast(editing: bool, err: &ApiError) -> ToastSpec {
    let title = if editing { "Não foi possível atualizar" } else { "Não foi possível criar" };
    let description = err
        .server_message()
        .unwrap_or("Erro ao salvar reserva. Verifique os dados.")
        .to_owned();
    let spec = if err.status() == Some(409) { ToastSpec::warning(title) } else { ToastSpec::error(title) };
    spec.description(description)
}

pub fn save_success_toast(editing: bool) -> ToastSpec {
    ToastSpec::success(if editing { "Reserva Atualizada!" } else { "Reserva Criada!" }).duration_ms(3000)
}

#[component]
fn Field(
    #[prop(into)] label: String,
    #[prop(into)] error: Signal<Option<&'static str>>,
    children: Children,
) -> impl IntoView {
    view! {
        <label class=move || if error.get().is_some() { "field field--invalid" } else { "field" }>
            <span class="field__label">{label}</span>
            {children()}
            <span class="field__error">{move || error.get().unwrap_or_default()}</span>
        </label>
    }
}

/// Modal form. `editing` selects update mode and prefills the fields.
#[component]
pub fn ReservationFormModal(
    editing: Option<Reservation>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let toasts = use_toasts();
    let id = editing.as_ref().map(|r| r.id.clone());
    let is_editing = id.is_some();
    let form = RwSignal::new(
        editing
            .as_ref()
            .map(|r| ReservationForm::from_reservation(r, datetime::input_value))
            .unwrap_or_default(),
    );
    let errors = RwSignal::new(FormErrors::default());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let payload = match form.get_untracked().to_payload(id.clone(), datetime::input_to_utc_iso) {
            Ok(payload) => payload,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FormErrors::default());
        submitting.set(true);
        let id = id.clone();
        leptos::task::spawn_local(async move {
            let result = match &id {
                Some(id) => api::update_reservation(id, &payload).await,
                None => api::create_reservation(&payload).await,
            };
            submitting.set(false);
            match result {
                Ok(()) => {
                    notify(toasts, save_success_toast(is_editing));
                    on_close.run(());
                    on_saved.run(());
                }
                Err(e) => notify(toasts, save_failure_toast(is_editing, &e)),
            }
        });
    };

    let cancel = move |_| {
        if !submitting.get_untracked() {
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop">
            <div class="dialog dialog--form" role="dialog">
                <header class="dialog__header">
                    <h2>{if is_editing { "Editar Reserva" } else { "Nova Reserva" }}</h2>
                    <button class="dialog__close" title="Fechar" on:click=cancel>"×"</button>
                </header>
                <form class="reservation-form" on:submit=on_submit novalidate=true>
                    <div class="form-row">
                        <Field label="Local" error=Signal::derive(move || errors.get().local)>
                            <input
                                class="input"
                                placeholder="Ex: Matriz"
                                prop:value=move || form.get().local
                                on:input=move |ev| form.update(|f| f.local = event_target_value(&ev))
                            />
                        </Field>
                        <Field label="Sala" error=Signal::derive(move || errors.get().sala)>
                            <input
                                class="input"
                                placeholder="Ex: Sala de Reunião A"
                                prop:value=move || form.get().sala
                                on:input=move |ev| form.update(|f| f.sala = event_target_value(&ev))
                            />
                        </Field>
                    </div>
                    <div class="form-row">
                        <Field label="Início" error=Signal::derive(move || errors.get().inicio)>
                            <input
                                class="input"
                                type="datetime-local"
                                prop:value=move || form.get().inicio
                                on:input=move |ev| form.update(|f| f.inicio = event_target_value(&ev))
                            />
                        </Field>
                        <Field label="Fim" error=Signal::derive(move || errors.get().fim)>
                            <input
                                class="input"
                                type="datetime-local"
                                prop:value=move || form.get().fim
                                on:input=move |ev| form.update(|f| f.fim = event_target_value(&ev))
                            />
                        </Field>
                    </div>
                    <div class="form-row">
                        <Field label="Responsável" error=Signal::derive(move || errors.get().responsavel)>
                            <input
                                class="input"
                                placeholder="Nome do responsável"
                                prop:value=move || form.get().responsavel
                                on:input=move |ev| form.update(|f| f.responsavel = event_target_value(&ev))
                            />
                        </Field>
                        <Field label="Participantes" error=Signal::derive(move || errors.get().quantidade)>
                            <input
                                class="input"
                                type="number"
                                min="1"
                                placeholder="Qtd. Pessoas"
                                prop:value=move || form.get().quantidade
                                on:input=move |ev| form.update(|f| f.quantidade = event_target_value(&ev))
                            />
                        </Field>
                    </div>
                    <div class="coffee-box">
                        <label class="coffee-box__toggle">
                            <span>"Adicionar Coffee Break? ☕"</span>
                            <input
                                type="checkbox"
                                class="switch"
                                prop:checked=move || form.get().tem_cafe
                                on:change=move |ev| form.update(|f| f.tem_cafe = event_target_checked(&ev))
                            />
                        </label>
                        <Show when=move || form.get().tem_cafe>
                            <Field
                                label="Itens / Descrição do Café"
                                error=Signal::derive(move || errors.get().descricao_cafe)
                            >
                                <textarea
                                    class="input input--area"
                                    placeholder="Ex: Água, café, bolachas..."
                                    prop:value=move || form.get().descricao_cafe
                                    on:input=move |ev| form.update(|f| f.descricao_cafe = event_target_value(&ev))
                                ></textarea>
                            </Field>
                        </Show>
                    </div>
                    <footer class="dialog__actions">
                        <button type="button" class="btn btn--ghost" on:click=cancel disabled=move || submitting.get()>
                            "Cancelar"
                        </button>
                        <button type="submit" class="btn btn--primary" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Salvando..." } else { "Salvar" }}
                        </button>
                    </footer>
                </form>
            </div>
        </div>
    }
}
