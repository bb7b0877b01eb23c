//! Session context owning both stores
//!
//! The presentation layer constructs one [`Session`] at process entry and
//! threads it by reference to every view, instead of reaching for ambient
//! globals. All state lives here for the lifetime of the process.

use serde::Serialize;

use crate::entities::OrderStatus;
use crate::storage::{CustomerStore, OrderStore};

/// Owner of the in-memory state for one interactive session.
#[derive(Clone, Debug, Default)]
pub struct Session {
    pub customers: CustomerStore,
    pub orders: OrderStore,
}

impl Session {
    /// Create a session with empty stores.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the dashboard counters from the current store contents.
    pub fn stats(&self) -> DashboardStats {
        let pending = self
            .orders
            .iter()
            .filter(|order| order.status == OrderStatus::Pending)
            .count();
        let in_progress = self
            .orders
            .iter()
            .filter(|order| order.status == OrderStatus::InProgress)
            .count();

        DashboardStats {
            customers: self.customers.len(),
            orders: self.orders.len(),
            pending_orders: pending,
            in_progress_orders: in_progress,
        }
    }
}

/// Counters shown on the home dashboard, recomputed on every read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub customers: usize,
    pub orders: usize,
    pub pending_orders: usize,
    pub in_progress_orders: usize,
}
