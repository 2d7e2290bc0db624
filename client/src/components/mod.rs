//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dialogs, notifications and route gates while reading or
//! writing shared state from Leptos context providers.

pub mod confirm_dialog;
pub mod qr_modal;
pub mod reservation_form;
pub mod session_gate;
pub mod toast_host;
