//! In-memory store generic over the entity types
//!
//! One store instance owns one collection for the lifetime of the session.
//! Iteration order is most-recent-first: new records are inserted at the
//! front, and lookups scan linearly so the first match wins even when a
//! caller inserts a duplicate id.

use tracing::debug;
use uuid::Uuid;

use crate::core::Entity;
use crate::entities::{Customer, Order};

/// Ordered in-memory collection of entities.
///
/// The store trusts its callers on validation (required fields, item
/// counts, id uniqueness) but owns the derived fields and the revision
/// timestamp: every write runs the entity's `normalize` and every update
/// runs `touch`.
#[derive(Clone, Debug)]
pub struct InMemoryStore<T: Entity> {
    records: Vec<T>,
}

impl<T: Entity> InMemoryStore<T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Insert a record at the front of the collection.
    ///
    /// Derived fields are recomputed before the record lands, so a stale
    /// caller-supplied value never enters the store. No uniqueness check is
    /// performed; a duplicate id coexists with the original and lookups
    /// return the first match in iteration order.
    pub fn add(&mut self, mut record: T) {
        record.normalize();
        debug!(resource = T::resource_name(), id = %record.id(), "record added");
        self.records.insert(0, record);
    }

    /// Merge a partial patch over the first record matching `id`.
    ///
    /// An unknown id is a silent no-op, not an error: callers are expected
    /// to have checked existence via [`get`](Self::get) first. On a
    /// successful patch the record's derived fields are recomputed and its
    /// revision timestamp is stamped, even when the patch changed nothing.
    pub fn update(&mut self, id: Uuid, patch: T::Patch) {
        match self.records.iter_mut().find(|record| record.id() == id) {
            Some(record) => {
                record.apply_patch(patch);
                record.normalize();
                record.touch();
                debug!(resource = T::resource_name(), %id, "record updated");
            }
            None => {
                debug!(resource = T::resource_name(), %id, "update for unknown id ignored");
            }
        }
    }

    /// Linear lookup by id; first match in iteration order.
    pub fn get(&self, id: Uuid) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub(crate) fn get_mut(&mut self, id: Uuid) -> Option<&mut T> {
        self.records.iter_mut().find(|record| record.id() == id)
    }

    /// Iterate over all records, most recent first.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Entity> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: Entity> IntoIterator for &'a InMemoryStore<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Store holding the session's customers
pub type CustomerStore = InMemoryStore<Customer>;

/// Store holding the session's orders
pub type OrderStore = InMemoryStore<Order>;

impl InMemoryStore<Order> {
    /// All orders whose linkage carries `customer_id` as a foreign key, in
    /// store iteration order.
    ///
    /// Orders linked by embedded snapshot alone have no foreign key and are
    /// never returned here. An empty result is routine, not an error.
    pub fn by_customer(&self, customer_id: Uuid) -> Vec<&Order> {
        self.records
            .iter()
            .filter(|order| order.customer.customer_id() == Some(customer_id))
            .collect()
    }
}
