//! Route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its local form state and delegates shared pieces (dialogs,
//! the reservation form, route gates) to `components`. Pure helpers used for
//! validation and toast wording live next to the page that uses them.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod setup;
