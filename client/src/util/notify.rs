//! Toast helper shared by pages and components.

use leptos::prelude::*;

use crate::state::toast::{ToastSpec, ToastState};

/// Toast queue provided by the root component.
pub fn use_toasts() -> RwSignal<ToastState> {
    expect_context::<RwSignal<ToastState>>()
}

/// Show a toast and schedule its dismissal after its duration.
pub fn notify(toasts: RwSignal<ToastState>, spec: ToastSpec) {
    let duration_ms = spec.duration_ms;
    let Some(id) = toasts.try_update(|t| t.push(spec)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(duration_ms).await;
        let _ = toasts.try_update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (id, duration_ms);
}
