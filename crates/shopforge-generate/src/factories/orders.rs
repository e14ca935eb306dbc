use chrono::{Duration, NaiveDateTime};
use rand::Rng;
use rust_decimal::Decimal;

use shopforge_core::{NewOrder, OrderId};
use shopforge_store::{MemoryStore, StoreError};

use crate::errors::GenerationError;
use crate::factories::ensure_positive;

/// Generate `n` order headers. Each samples a customer uniformly from the
/// live id snapshot, a timestamp uniformly from the `history_days` window
/// ending at `anchor`, and captures the customer's current full name as the
/// denormalized snapshot. Totals start at the zero placeholder and are set
/// exactly once by reconciliation; a provisional zero total is an expected
/// intermediate state, not a consistency violation.
///
/// Returns the new order ids; line-item assignment needs them.
pub fn generate_orders(
    store: &mut MemoryStore,
    n: u64,
    history_days: i64,
    anchor: NaiveDateTime,
    rng: &mut impl Rng,
) -> Result<Vec<OrderId>, GenerationError> {
    ensure_positive("orders", n)?;
    if history_days <= 0 {
        return Err(GenerationError::InvalidArgument(format!(
            "history_days must be positive, got {history_days}"
        )));
    }

    let customer_ids = store.customer_ids();
    if customer_ids.is_empty() {
        return Err(GenerationError::PrecursorMissing(
            "orders require at least one customer".to_string(),
        ));
    }

    let window_seconds = history_days * 86_400;
    let mut rows = Vec::with_capacity(n as usize);
    for _ in 0..n {
        let customer_id = customer_ids[rng.random_range(0..customer_ids.len())];
        let customer = store
            .customer(customer_id)
            .ok_or(StoreError::UnknownRow {
                table: "customers",
                id: customer_id,
            })?;
        rows.push(NewOrder {
            customer_id,
            ordered_at: anchor - Duration::seconds(rng.random_range(0..window_seconds)),
            customer_name: customer.full_name(),
            total_amount: Decimal::ZERO,
        });
    }

    let ids = store.insert_orders(rows)?;
    Ok(ids)
}
