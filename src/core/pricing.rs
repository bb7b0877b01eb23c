//! Pure derivation functions for order amounts
//!
//! Nothing here is cached or incrementally maintained: collections are
//! small and edits are interactive, so every value is recomputed from the
//! current items on every call.

use crate::entities::Item;

/// Subtotal for a single line item: unit price times quantity.
pub fn line_subtotal(item: &Item) -> f64 {
    item.price * f64::from(item.quantity)
}

/// Total for an order: sum of line subtotals. An empty item list yields 0.
pub fn order_total(items: &[Item]) -> f64 {
    items.iter().map(line_subtotal).sum()
}

/// Balance still owed after the down payment, floored at zero.
///
/// The stored down payment is deliberately NOT clamped to the total: an
/// over-payment stays visible in the raw field, but the derived balance
/// never goes negative.
pub fn remaining(total: f64, down_payment: f64) -> f64 {
    (total - down_payment).max(0.0)
}
