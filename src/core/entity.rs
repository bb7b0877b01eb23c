//! Entity trait defining the contract shared by all stored record types

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Base trait for records held by an in-memory store.
///
/// Every entity carries:
/// - `id`: unique identifier, assigned at construction, never changed
/// - `created_at`: creation timestamp, never changed
///
/// Mutation happens through partial patches: the store finds the record,
/// merges the patch over it field by field, then gives the entity a chance
/// to recompute derived fields (`normalize`) and stamp its revision
/// (`touch`). Entities without derived fields or revision timestamps keep
/// the default no-op implementations.
pub trait Entity: Clone + 'static {
    /// Partial-update type: one optional field per patchable entity field.
    type Patch;

    /// The resource name used in log output (e.g., "customer", "order")
    fn resource_name() -> &'static str;

    /// Get the unique identifier for this record
    fn id(&self) -> Uuid;

    /// Get the creation timestamp
    fn created_at(&self) -> DateTime<Utc>;

    /// Merge a partial patch over this record, field by field.
    ///
    /// Fields absent from the patch keep their current value. `id` and
    /// `created_at` are never part of a patch.
    fn apply_patch(&mut self, patch: Self::Patch);

    /// Recompute derived fields from the record's own data.
    ///
    /// Called by the store before every insert and after every patch, so a
    /// stale caller-supplied derived value never survives a write.
    fn normalize(&mut self) {}

    /// Stamp the revision timestamp, if the entity carries one.
    ///
    /// Called by the store on every successful update, even when the patch
    /// changed nothing.
    fn touch(&mut self) {}
}
