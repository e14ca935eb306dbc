use rand::Rng;
use rand::seq::IndexedRandom;

use shopforge_core::NewCategory;
use shopforge_store::MemoryStore;

use crate::errors::GenerationError;
use crate::factories::ensure_positive;

const DEPARTMENTS: &[&str] = &[
    "Electronics",
    "Photography",
    "Audio",
    "Computing",
    "Gaming",
    "Kitchen",
    "Garden",
    "Furniture",
    "Lighting",
    "Sports",
    "Outdoors",
    "Toys",
    "Books",
    "Stationery",
    "Clothing",
    "Footwear",
    "Beauty",
    "Health",
    "Automotive",
    "Tools",
    "Pet Supplies",
    "Groceries",
    "Jewelry",
    "Music",
];

/// Generate `n` categories with unique names; the sequence number embedded
/// in every name makes collisions impossible across the whole run.
pub fn generate_categories(
    store: &mut MemoryStore,
    n: u64,
    rng: &mut impl Rng,
) -> Result<u64, GenerationError> {
    ensure_positive("categories", n)?;

    let start_seq = store.category_count();
    let mut rows = Vec::with_capacity(n as usize);
    for offset in 0..n {
        let seq = start_seq + offset + 1;
        let department = DEPARTMENTS.choose(rng).copied().unwrap_or("General");
        rows.push(NewCategory {
            name: format!("{department} {seq}"),
        });
    }

    let ids = store.insert_categories(rows)?;
    Ok(ids.len() as u64)
}
