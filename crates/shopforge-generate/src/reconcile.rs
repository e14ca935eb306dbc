//! Aggregate reconciliation: derive every order's total from its line items
//! and write the results back in one batched update.

use rust_decimal::Decimal;

use shopforge_core::{MONEY_SCALE, OrderId};
use shopforge_store::MemoryStore;

use crate::errors::GenerationError;

/// Recompute `total_amount = sum(unit_price * quantity)` over every order's
/// details, rounded to 2 decimals, and persist the totals as a single batch.
///
/// Idempotent: running it again reproduces the same totals. An order with
/// zero line items fails the run; full catalog coverage by line-item
/// assignment should make that impossible, so it is checked defensively.
pub fn reconcile_totals(store: &mut MemoryStore) -> Result<u64, GenerationError> {
    let order_ids: Vec<OrderId> = store.orders().map(|order| order.id).collect();

    let mut totals = Vec::with_capacity(order_ids.len());
    for order_id in order_ids {
        let details = store.order_details_for(order_id);
        if details.is_empty() {
            return Err(GenerationError::OrphanOrder(order_id));
        }
        let total: Decimal = details.iter().map(|detail| detail.line_total()).sum();
        totals.push((order_id, total.round_dp(MONEY_SCALE)));
    }

    let updated = store.update_order_totals(&totals)?;
    Ok(updated)
}
