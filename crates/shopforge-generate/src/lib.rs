//! Deterministic seeding pipeline for the Shopforge e-commerce dataset.
//!
//! Stages run in dependency order (categories -> products, customers ->
//! orders -> order details -> reconciliation) against an in-memory store,
//! each with its own seeded RNG, so a run is fully reproducible from
//! `SeedOptions`.

pub mod assign;
pub mod engine;
pub mod errors;
pub mod factories;
pub mod model;
pub mod output;
pub mod reconcile;
pub mod verify;

pub use engine::{SeedEngine, SeedResult};
pub use errors::GenerationError;
pub use model::{SeedOptions, SeedReport, StageReport};
pub use verify::VerifySummary;
