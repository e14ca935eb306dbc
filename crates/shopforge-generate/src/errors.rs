use thiserror::Error;

use shopforge_core::OrderId;
use shopforge_store::StoreError;

/// Errors emitted by the seeding pipeline. A failed stage aborts the whole
/// run; downstream stages depend on upstream completeness.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// A non-positive row count was requested.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A dependent factory ran before its referenced population exists.
    #[error("precursor missing: {0}")]
    PrecursorMissing(String),
    /// An order had no line items at reconciliation time.
    #[error("order {0} has no line items at reconciliation time")]
    OrphanOrder(OrderId),
    /// The post-run invariant sweep found an inconsistency.
    #[error("verification failed: {0}")]
    Verification(String),
    /// Constraint violation propagated unmodified from the store.
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
