//! Line-item assignment: one order detail per order via a cyclic walk over
//! a seeded permutation of the product catalog.

use rand::Rng;
use rand::seq::SliceRandom;

use shopforge_core::{NewOrderDetail, OrderId};
use shopforge_store::{MemoryStore, StoreError};

use crate::errors::GenerationError;

const MIN_QUANTITY: u32 = 1;
const MAX_QUANTITY: u32 = 10;

/// Assign exactly one line item to every order in `order_ids`.
///
/// The product catalog is shuffled once, then the order at rank `k` gets the
/// product at position `k mod Q` of the permutation: deterministic,
/// collision-free full coverage of the catalog as order volume grows, with
/// no skew toward a small product subset. `unit_price` is snapshotted from
/// the product's current price and never re-read.
///
/// One line item per order is a documented scope choice of this generator,
/// not a constraint of the schema.
pub fn assign_line_items(
    store: &mut MemoryStore,
    order_ids: &[OrderId],
    rng: &mut impl Rng,
) -> Result<u64, GenerationError> {
    if order_ids.is_empty() {
        return Ok(0);
    }

    let mut catalog = store.product_ids();
    if catalog.is_empty() {
        return Err(GenerationError::PrecursorMissing(
            "line items require at least one product".to_string(),
        ));
    }
    catalog.shuffle(rng);

    let mut rows = Vec::with_capacity(order_ids.len());
    for (rank, order_id) in order_ids.iter().enumerate() {
        let product_id = catalog[rank % catalog.len()];
        let product = store.product(product_id).ok_or(StoreError::UnknownRow {
            table: "products",
            id: product_id,
        })?;
        rows.push(NewOrderDetail {
            order_id: *order_id,
            product_id,
            unit_price: product.price,
            quantity: rng.random_range(MIN_QUANTITY..=MAX_QUANTITY),
        });
    }

    let ids = store.insert_order_details(rows)?;
    Ok(ids.len() as u64)
}
