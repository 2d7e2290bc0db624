//! Reservation list held by the dashboard.
//!
//! DESIGN
//! ======
//! The backend owns reservations; this is a transient copy refreshed on page
//! load and after saves, and trimmed locally after a successful delete.

#[cfg(test)]
#[path = "reservations_test.rs"]
mod reservations_test;

use crate::net::types::{Reservation, ReservationId};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReservationsState {
    pub items: Vec<Reservation>,
    pub loading: bool,
}

impl ReservationsState {
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Finish a load. On failure the previous items stay visible.
    pub fn finish_load(&mut self, items: Option<Vec<Reservation>>) {
        if let Some(items) = items {
            self.items = items;
        }
        self.loading = false;
    }

    /// Drop a reservation the backend confirmed as deleted.
    pub fn remove(&mut self, id: &ReservationId) {
        self.items.retain(|r| &r.id != id);
    }

    pub fn find(&self, id: &ReservationId) -> Option<&Reservation> {
        self.items.iter().find(|r| &r.id == id)
    }
}
