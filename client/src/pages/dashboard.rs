//! Reservations dashboard: list, create, edit and delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! The list is loaded once on mount and again after every successful save.
//! Deletes trim the local copy without refetching. The page owns its
//! `ReservationsState`; nothing else reads it.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::reservation_form::ReservationFormModal;
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{Reservation, ReservationId};
use crate::state::reservations::ReservationsState;
use crate::state::session::SessionState;
use crate::state::toast::{ToastSpec, ToastState};
use crate::util::auth;
use crate::util::datetime;
use crate::util::notify::{notify, use_toasts};

/// Toast for a failed list load. An expired session (401) stays silent.
fn load_failure_toast(err: &ApiError) -> Option<ToastSpec> {
    if err.status() == Some(401) {
        return None;
    }
    Some(
        ToastSpec::error("Erro ao carregar reservas")
            .description(err.server_message().unwrap_or("Não foi possível conectar ao servidor."))
            .duration_ms(4000),
    )
}

fn delete_failure_toast(err: &ApiError) -> ToastSpec {
    ToastSpec::error("Erro ao excluir").description(err.server_message().unwrap_or("Falha na exclusão."))
}

fn delete_success_toast() -> ToastSpec {
    ToastSpec::success("Reserva Excluída")
        .description("A reserva foi removida com sucesso.")
        .duration_ms(3000)
}

fn room_label(reservation: &Reservation) -> String {
    format!("{} ({})", reservation.sala, reservation.local)
}

fn coffee_label(reservation: &Reservation) -> &'static str {
    if reservation.tem_cafe { "Sim" } else { "Não" }
}

fn load_reservations(list: RwSignal<ReservationsState>, toasts: RwSignal<ToastState>) {
    list.update(ReservationsState::begin_load);
    leptos::task::spawn_local(async move {
        match api::list_reservations().await {
            Ok(items) => list.update(|s| s.finish_load(Some(items))),
            Err(e) => {
                list.update(|s| s.finish_load(None));
                if let Some(toast) = load_failure_toast(&e) {
                    notify(toasts, toast);
                }
            }
        }
    });
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = use_toasts();
    let list = RwSignal::new(ReservationsState::default());

    let form_open = RwSignal::new(false);
    let editing = RwSignal::new(None::<Reservation>);
    let pending_delete = RwSignal::new(None::<ReservationId>);
    let deleting = RwSignal::new(false);

    Effect::new(move || load_reservations(list, toasts));

    let open_create = move |_| {
        editing.set(None);
        form_open.set(true);
    };

    let close_form = Callback::new(move |()| {
        form_open.set(false);
        editing.set(None);
    });
    let on_saved = Callback::new(move |()| load_reservations(list, toasts));

    let cancel_delete = Callback::new(move |()| {
        if !deleting.get_untracked() {
            pending_delete.set(None);
        }
    });
    let confirm_delete = Callback::new(move |()| {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        if deleting.get_untracked() {
            return;
        }
        deleting.set(true);
        leptos::task::spawn_local(async move {
            match api::delete_reservation(&id).await {
                Ok(()) => {
                    list.update(|s| s.remove(&id));
                    notify(toasts, delete_success_toast());
                }
                Err(e) => notify(toasts, delete_failure_toast(&e)),
            }
            deleting.set(false);
            pending_delete.set(None);
        });
    });

    let row = move |reservation: Reservation| {
        let edit_target = reservation.clone();
        let delete_id = reservation.id.clone();
        view! {
            <tr>
                <td class="reservations__room">{room_label(&reservation)}</td>
                <td>{datetime::display(reservation.data_hora_inicio.as_deref())}</td>
                <td>{datetime::display(reservation.data_hora_fim.as_deref())}</td>
                <td>{reservation.responsavel.clone()}</td>
                <td>
                    <span class=if reservation.tem_cafe { "badge badge--yes" } else { "badge badge--no" }>
                        {coffee_label(&reservation)}
                    </span>
                </td>
                <td class="reservations__actions">
                    <button
                        class="btn btn--small btn--outline"
                        on:click=move |_| {
                            editing.set(Some(edit_target.clone()));
                            form_open.set(true);
                        }
                    >
                        "✏️ Editar"
                    </button>
                    <button
                        class="btn btn--small btn--danger"
                        on:click=move |_| pending_delete.set(Some(delete_id.clone()))
                    >
                        "🗑️ Excluir"
                    </button>
                </td>
            </tr>
        }
    };

    let show_spinner = move || list.with(|s| s.loading && s.items.is_empty());

    view! {
        <div class="page dashboard-page">
            <header class="dashboard-page__header">
                <h1>"📅 Reservas MixMeet"</h1>
                <div class="dashboard-page__actions">
                    <button class="btn btn--primary" on:click=open_create>"➕ Nova Reserva"</button>
                    <button class="btn btn--ghost" on:click=move |_| auth::logout(session)>"Sair"</button>
                </div>
            </header>

            <Show
                when=move || !show_spinner()
                fallback=|| {
                    view! {
                        <div class="dashboard-page__loading">
                            <span class="spinner spinner--xl"></span>
                            <p>"Carregando Reservas..."</p>
                        </div>
                    }
                }
            >
                <div class="card reservations">
                    <table class="reservations__table">
                        <thead>
                            <tr>
                                <th>"Sala / Local"</th>
                                <th>"Início"</th>
                                <th>"Fim"</th>
                                <th>"Responsável"</th>
                                <th>"Café?"</th>
                                <th>"Ações"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show
                                when=move || list.with(|s| !s.items.is_empty())
                                fallback=|| {
                                    view! {
                                        <tr>
                                            <td class="reservations__empty" colspan="6">
                                                "Nenhuma reserva encontrada. Crie uma!"
                                            </td>
                                        </tr>
                                    }
                                }
                            >
                                <For
                                    each=move || list.get().items
                                    key=|r: &Reservation| r.id.clone()
                                    children=row
                                />
                            </Show>
                        </tbody>
                    </table>
                </div>
            </Show>

            {move || {
                form_open
                    .get()
                    .then(|| {
                        view! {
                            <ReservationFormModal
                                editing=editing.get_untracked()
                                on_close=close_form
                                on_saved=on_saved
                            />
                        }
                    })
            }}

            {move || {
                pending_delete
                    .get()
                    .is_some()
                    .then(|| {
                        view! {
                            <ConfirmDialog
                                title="Confirmação de Exclusão"
                                message="Você tem certeza? A exclusão da reserva não pode ser desfeita."
                                confirm_label="Excluir"
                                busy=deleting
                                on_confirm=confirm_delete
                                on_cancel=cancel_delete
                            />
                        }
                    })
            }}
        </div>
    }
}
