//! Fixed-position stack rendering the toast queue.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState};

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast: &Toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = format!("toast {}", toast.spec.status.css_modifier());
                    view! {
                        <div class=class>
                            <div class="toast__body">
                                <strong class="toast__title">{toast.spec.title.clone()}</strong>
                                {toast
                                    .spec
                                    .description
                                    .clone()
                                    .map(|d| view! { <p class="toast__description">{d}</p> })}
                            </div>
                            <button
                                class="toast__close"
                                title="Fechar"
                                on:click=move |_| toasts.update(|t| t.dismiss(id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
