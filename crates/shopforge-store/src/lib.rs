//! In-memory relational store for the Shopforge dataset.
//!
//! Implements the storage collaborator the generation pipeline writes to:
//! bulk inserts with sequential id assignment, unique and referential
//! constraint checks, cascade delete, batched aggregate updates, and the
//! reporting queries run against the generated data.

pub mod error;
pub mod reports;
pub mod store;

pub use error::StoreError;
pub use reports::{CustomerSpend, DailyRevenue, ProductRevenue};
pub use store::MemoryStore;
