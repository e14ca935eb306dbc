//! Post-run invariant sweep over the whole store.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use shopforge_core::MONEY_SCALE;
use shopforge_store::MemoryStore;

use crate::errors::GenerationError;

/// Row counts touched by a verification pass.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct VerifySummary {
    pub products_checked: u64,
    pub orders_checked: u64,
    pub details_checked: u64,
}

/// Re-check every dataset invariant: referential resolution, denormalized
/// name snapshots, exact reconciled totals, and line-item bounds. Fails on
/// the first violation found.
pub fn verify_dataset(store: &MemoryStore) -> Result<VerifySummary, GenerationError> {
    let mut products_checked = 0;
    for product in store.products() {
        if store.category(product.category_id).is_none() {
            return Err(GenerationError::Verification(format!(
                "product {} references missing category {}",
                product.id, product.category_id
            )));
        }
        if product.price < Decimal::ZERO {
            return Err(GenerationError::Verification(format!(
                "product {} has negative price {}",
                product.id, product.price
            )));
        }
        products_checked += 1;
    }

    let mut orders_checked = 0;
    for order in store.orders() {
        let Some(customer) = store.customer(order.customer_id) else {
            return Err(GenerationError::Verification(format!(
                "order {} references missing customer {}",
                order.id, order.customer_id
            )));
        };
        // Customers are never mutated by the pipeline, so the creation-time
        // snapshot must still equal the live name.
        if order.customer_name != customer.full_name() {
            return Err(GenerationError::Verification(format!(
                "order {} snapshot '{}' does not match customer name '{}'",
                order.id,
                order.customer_name,
                customer.full_name()
            )));
        }

        let details = store.order_details_for(order.id);
        if details.is_empty() {
            return Err(GenerationError::Verification(format!(
                "order {} has no line items",
                order.id
            )));
        }
        let expected: Decimal = details.iter().map(|detail| detail.line_total()).sum();
        if order.total_amount != expected.round_dp(MONEY_SCALE) {
            return Err(GenerationError::Verification(format!(
                "order {} total {} does not match detail sum {}",
                order.id,
                order.total_amount,
                expected.round_dp(MONEY_SCALE)
            )));
        }
        orders_checked += 1;
    }

    let mut details_checked = 0;
    for detail in store.order_details() {
        if store.order(detail.order_id).is_none() {
            return Err(GenerationError::Verification(format!(
                "order detail {} references missing order {}",
                detail.id, detail.order_id
            )));
        }
        if store.product(detail.product_id).is_none() {
            return Err(GenerationError::Verification(format!(
                "order detail {} references missing product {}",
                detail.id, detail.product_id
            )));
        }
        if detail.quantity < 1 {
            return Err(GenerationError::Verification(format!(
                "order detail {} has zero quantity",
                detail.id
            )));
        }
        if detail.unit_price < Decimal::ZERO {
            return Err(GenerationError::Verification(format!(
                "order detail {} has negative unit price {}",
                detail.id, detail.unit_price
            )));
        }
        details_checked += 1;
    }

    let summary = VerifySummary {
        products_checked,
        orders_checked,
        details_checked,
    };
    info!(
        products = summary.products_checked,
        orders = summary.orders_checked,
        details = summary.details_checked,
        "dataset verified"
    );
    Ok(summary)
}
