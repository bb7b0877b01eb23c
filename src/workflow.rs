//! Order approval workflow
//!
//! Orders start out `pending` and leave that state through exactly one
//! dedicated operation: approval, which generates the service order and
//! moves the record to `in_progress`. The remaining statuses are reachable
//! through generic patches; no dedicated transitions exist for them.

use tracing::{info, warn};
use uuid::Uuid;

use crate::core::{Entity, WorkflowError};
use crate::entities::OrderStatus;
use crate::storage::OrderStore;

/// Approve a pending order, moving it to `in_progress`.
///
/// Valid only from `pending`. Approving an order that has already left that
/// state fails with [`WorkflowError::InvalidTransition`] and leaves the
/// record untouched — a silent no-op here would hide a bug in the calling
/// layer. A successful approval stamps the order's revision timestamp.
pub fn approve(orders: &mut OrderStore, id: Uuid) -> Result<(), WorkflowError> {
    let Some(order) = orders.get_mut(id) else {
        warn!(%id, "approve: order not found");
        return Err(WorkflowError::NotFound { id });
    };

    if order.status != OrderStatus::Pending {
        warn!(%id, status = %order.status, "approve rejected: order is not pending");
        return Err(WorkflowError::InvalidTransition {
            id,
            status: order.status,
        });
    }

    order.status = OrderStatus::InProgress;
    order.touch();
    info!(%id, "order approved");
    Ok(())
}
