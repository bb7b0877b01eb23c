//! Typed error handling for the order workflow
//!
//! The error surface is deliberately narrow. Absence of a record on lookup
//! is a routine outcome, so `get` returns an `Option` and `update` on an
//! unknown id is a silent no-op. The only operations that can fail are the
//! workflow transitions, which must never be swallowed: a rejected
//! transition indicates a bug or a stale view in the calling layer.

use thiserror::Error;
use uuid::Uuid;

use crate::entities::OrderStatus;

/// Errors raised by workflow transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WorkflowError {
    /// The transition addressed an order id absent from the store
    #[error("order '{id}' not found")]
    NotFound { id: Uuid },

    /// The order is not in a state the transition accepts
    #[error("order '{id}' cannot be approved from status '{status}'")]
    InvalidTransition { id: Uuid, status: OrderStatus },
}
