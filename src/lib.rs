//! # Uniforms
//!
//! Domain core for a small-business customer and uniform order manager.
//! All state lives in process memory for a single interactive session; the
//! presentation layer calls in through plain function and method calls.
//!
//! ## Architecture
//!
//! - **Entities**: [`entities::Customer`] and [`entities::Order`] (with its
//!   [`entities::Item`] line entries), mutated through partial patches
//! - **Stores**: one generic [`storage::InMemoryStore`] instantiated per
//!   entity type, most-recent-first iteration order
//! - **Pricing**: pure derivations in [`core::pricing`], recomputed from
//!   the items on every write
//! - **Matcher**: case-insensitive autocomplete lookup in [`core::matcher`]
//! - **Workflow**: the pending → approved transition in [`workflow`]
//! - **Session**: [`session::Session`] owns both stores and derives the
//!   dashboard counters
//!
//! ## Quick Start
//!
//! ```rust
//! use uniforms::prelude::*;
//!
//! let mut session = Session::new();
//!
//! session.customers.add(Customer::new(
//!     "Ana Silva".to_string(),
//!     "ana@example.com".to_string(),
//!     "+55 11 98888-7777".to_string(),
//!     "Av. Paulista, 1000".to_string(),
//!     String::new(),
//! ));
//!
//! let customer = matching_customers("ana", &session.customers)[0];
//! let order = Order::new(
//!     CustomerRef::Reference {
//!         customer_id: customer.id,
//!         snapshot: Some(CustomerSnapshot::from(customer)),
//!     },
//!     vec![Item {
//!         description: "Polo shirt".to_string(),
//!         quantity: 3,
//!         size: Size::M,
//!         color: "Blue".to_string(),
//!         details: String::new(),
//!         price: 25.0,
//!     }],
//!     50.0,
//!     String::new(),
//! );
//! let order_id = order.id;
//! session.orders.add(order);
//!
//! assert_eq!(session.orders.get(order_id).unwrap().total, 75.0);
//! workflow::approve(&mut session.orders, order_id).unwrap();
//! ```

pub mod core;
pub mod entities;
pub mod session;
pub mod storage;
pub mod workflow;

/// Re-exports of commonly used types and functions
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        Entity, WorkflowError,
        matcher::matching_customers,
        pricing::{line_subtotal, order_total, remaining},
        sanitize,
    };

    // === Entities ===
    pub use crate::entities::{
        Customer, CustomerPatch, CustomerRef, CustomerSnapshot, Item, Order, OrderPatch,
        OrderStatus, Size,
    };

    // === Storage & session ===
    pub use crate::session::{DashboardStats, Session};
    pub use crate::storage::{CustomerStore, InMemoryStore, OrderStore};
    pub use crate::workflow;

    // === External dependencies ===
    pub use chrono::{DateTime, Utc};
    pub use uuid::Uuid;
}
