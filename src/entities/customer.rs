//! Customer entity and its partial-update patch

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::Entity;

/// A customer contact record.
///
/// `name`, `email`, `phone`, and `address` are required at creation time;
/// the form layer enforces that before the record reaches the store, and
/// the store does not re-validate. `notes` may be empty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier, assigned at construction
    pub id: Uuid,

    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,

    /// Optional free text; empty string when unused
    #[serde(default)]
    pub notes: String,

    /// When this customer was registered
    pub created_at: DateTime<Utc>,
}

impl Customer {
    /// Create a new customer with a fresh id and creation timestamp.
    pub fn new(
        name: String,
        email: String,
        phone: String,
        address: String,
        notes: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            phone,
            address,
            notes,
            created_at: Utc::now(),
        }
    }
}

/// Partial update for a [`Customer`].
///
/// Absent fields keep their current value. `id` and `created_at` cannot be
/// patched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
}

impl Entity for Customer {
    type Patch = CustomerPatch;

    fn resource_name() -> &'static str {
        "customer"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn apply_patch(&mut self, patch: CustomerPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
    }
}
