//! Row factories, one per entity. Each validates its preconditions before
//! doing any bulk work and inserts its whole batch in one store call.

pub mod categories;
pub mod customers;
pub mod orders;
pub mod products;

pub use categories::generate_categories;
pub use customers::generate_customers;
pub use orders::generate_orders;
pub use products::generate_products;

use crate::errors::GenerationError;

pub(crate) fn ensure_positive(stage: &str, n: u64) -> Result<(), GenerationError> {
    if n == 0 {
        return Err(GenerationError::InvalidArgument(format!(
            "{stage} row count must be positive"
        )));
    }
    Ok(())
}
