use rand::Rng;
use rand::seq::IndexedRandom;
use rust_decimal::Decimal;

use shopforge_core::NewProduct;
use shopforge_store::MemoryStore;

use crate::errors::GenerationError;
use crate::factories::ensure_positive;

const ADJECTIVES: &[&str] = &[
    "Compact", "Wireless", "Portable", "Classic", "Premium", "Foldable", "Ergonomic", "Smart",
    "Rugged", "Slim", "Heavy-Duty", "Ultralight",
];

const NOUNS: &[&str] = &[
    "Camera", "Speaker", "Keyboard", "Monitor", "Backpack", "Lamp", "Kettle", "Blender", "Drill",
    "Tent", "Headphones", "Notebook", "Chair", "Router", "Tripod", "Watch",
];

// Prices are sampled in whole cents so every value is exact at 2dp.
const MIN_PRICE_CENTS: i64 = 100;
const MAX_PRICE_CENTS: i64 = 99_999;
const MAX_STOCK: u32 = 100;

/// Generate `n` products, each referencing a category sampled uniformly
/// from the live category id snapshot.
pub fn generate_products(
    store: &mut MemoryStore,
    n: u64,
    rng: &mut impl Rng,
) -> Result<u64, GenerationError> {
    ensure_positive("products", n)?;

    let category_ids = store.category_ids();
    if category_ids.is_empty() {
        return Err(GenerationError::PrecursorMissing(
            "products require at least one category".to_string(),
        ));
    }

    let start_seq = store.product_count();
    let mut rows = Vec::with_capacity(n as usize);
    for offset in 0..n {
        let seq = start_seq + offset + 1;
        let category_id = category_ids[rng.random_range(0..category_ids.len())];
        let adjective = ADJECTIVES.choose(rng).copied().unwrap_or("Standard");
        let noun = NOUNS.choose(rng).copied().unwrap_or("Item");
        let name = format!("{adjective} {noun} {seq}");
        let description = if rng.random_bool(0.7) {
            Some(format!("{adjective} {noun} for everyday use"))
        } else {
            None
        };
        rows.push(NewProduct {
            category_id,
            name,
            description,
            price: Decimal::new(rng.random_range(MIN_PRICE_CENTS..=MAX_PRICE_CENTS), 2),
            stock_quantity: rng.random_range(1..=MAX_STOCK),
        });
    }

    let ids = store.insert_products(rows)?;
    Ok(ids.len() as u64)
}
