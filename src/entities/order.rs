//! Order entity: line items, customer linkage, derived amounts, and status

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::entity::Entity;
use crate::core::pricing;
use crate::entities::Customer;

/// Garment size for a line item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Size {
    PP,
    P,
    #[default]
    M,
    G,
    GG,
    XG,
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Size::PP => "PP",
            Size::P => "P",
            Size::M => "M",
            Size::G => "G",
            Size::GG => "GG",
            Size::XG => "XG",
        };
        write!(f, "{}", label)
    }
}

/// A line entry within an order.
///
/// Items are value types: they have no identity of their own and live only
/// inside an order's item list. The subtotal is derived, never stored; see
/// [`crate::core::pricing::line_subtotal`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub description: String,

    /// Always at least 1; the form boundary coerces anything lower
    pub quantity: u32,

    pub size: Size,
    pub color: String,

    /// Optional free text; empty string when unused
    #[serde(default)]
    pub details: String,

    /// Non-negative unit price
    pub price: f64,
}

/// Contact fields copied from a customer at order-creation time.
///
/// A snapshot reflects the customer's details as of order time and is
/// deliberately NOT kept in sync with later edits to the customer record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CustomerSnapshot {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl From<&Customer> for CustomerSnapshot {
    fn from(customer: &Customer) -> Self {
        Self {
            name: customer.name.clone(),
            email: customer.email.clone(),
            phone: customer.phone.clone(),
        }
    }
}

/// How an order is linked to its customer.
///
/// Both forms appear in this domain: an order taken for a walk-in contact
/// carries only the embedded snapshot, while an order placed against a
/// registered customer carries the foreign key (with an optional snapshot
/// for display).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CustomerRef {
    /// Contact fields captured at creation, no store linkage
    Snapshot(CustomerSnapshot),

    /// Foreign key to a stored customer
    Reference {
        customer_id: Uuid,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        snapshot: Option<CustomerSnapshot>,
    },
}

impl CustomerRef {
    /// The stored-customer foreign key, if this linkage carries one.
    pub fn customer_id(&self) -> Option<Uuid> {
        match self {
            CustomerRef::Snapshot(_) => None,
            CustomerRef::Reference { customer_id, .. } => Some(*customer_id),
        }
    }

    /// The contact snapshot attached to this linkage, if any.
    pub fn snapshot(&self) -> Option<&CustomerSnapshot> {
        match self {
            CustomerRef::Snapshot(snapshot) => Some(snapshot),
            CustomerRef::Reference { snapshot, .. } => snapshot.as_ref(),
        }
    }
}

/// Workflow status of an order.
///
/// `pending` is the initial state. The only dedicated transition is
/// approval (see [`crate::workflow::approve`]); the remaining states are
/// reachable through generic patches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::InProgress => "in_progress",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        };
        write!(f, "{}", label)
    }
}

/// A purchase record composed of line items.
///
/// `total` and `remaining_amount` are stored redundantly for display but
/// are owned by the store: they are recomputed from the items and down
/// payment on every create and update, so a stale caller-supplied value is
/// never trusted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier, assigned at construction
    pub id: Uuid,

    pub customer: CustomerRef,

    /// At least one entry; the form layer enforces this before submission
    pub items: Vec<Item>,

    pub status: OrderStatus,

    /// Sum of line subtotals, recomputed on every write
    pub total: f64,

    /// Amount paid up front; non-negative, not clamped to the total
    pub down_payment: f64,

    /// `max(0, total - down_payment)`, recomputed on every write
    pub remaining_amount: f64,

    /// Optional free text; empty string when unused
    #[serde(default)]
    pub notes: String,

    /// When this order was placed
    pub created_at: DateTime<Utc>,

    /// Last mutation time; stamped by the store on every update
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Create a new pending order with a fresh id and timestamps.
    ///
    /// `total` and `remaining_amount` are derived from `items` and
    /// `down_payment` immediately.
    pub fn new(customer: CustomerRef, items: Vec<Item>, down_payment: f64, notes: String) -> Self {
        let now = Utc::now();
        let mut order = Self {
            id: Uuid::new_v4(),
            customer,
            items,
            status: OrderStatus::Pending,
            total: 0.0,
            down_payment,
            remaining_amount: 0.0,
            notes,
            created_at: now,
            updated_at: now,
        };
        order.normalize();
        order
    }
}

/// Partial update for an [`Order`].
///
/// Absent fields keep their current value. `id` and `created_at` cannot be
/// patched, and there is no way to patch `total` or `remaining_amount`
/// directly: both are recomputed after the merge. `status` is accepted
/// as-is without validating the transition graph; only the dedicated
/// approval operation enforces one.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderPatch {
    pub customer: Option<CustomerRef>,
    pub items: Option<Vec<Item>>,
    pub status: Option<OrderStatus>,
    pub down_payment: Option<f64>,
    pub notes: Option<String>,
}

impl Entity for Order {
    type Patch = OrderPatch;

    fn resource_name() -> &'static str {
        "order"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn apply_patch(&mut self, patch: OrderPatch) {
        if let Some(customer) = patch.customer {
            self.customer = customer;
        }
        if let Some(items) = patch.items {
            self.items = items;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(down_payment) = patch.down_payment {
            self.down_payment = down_payment;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
    }

    fn normalize(&mut self) {
        self.total = pricing::order_total(&self.items);
        self.remaining_amount = pricing::remaining(self.total, self.down_payment);
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
