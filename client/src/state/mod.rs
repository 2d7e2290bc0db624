//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `reservations`, `toast`) so pages
//! depend on small focused models. Each is held in an `RwSignal`; `session`
//! and `toast` are provided as app-wide context.

pub mod reservations;
pub mod session;
pub mod toast;
