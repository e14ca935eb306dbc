use thiserror::Error;

/// Constraint violations surfaced by the store. These are the authoritative
/// consistency backstop: generators build rows that should never trip them,
/// and a violation aborts the whole pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A unique-constrained field collided with an existing row.
    #[error("unique constraint violated on {table}.{column}: '{value}'")]
    UniquenessViolation {
        table: &'static str,
        column: &'static str,
        value: String,
    },
    /// A foreign reference does not resolve to a live owner row.
    #[error("foreign key violated: {table}.{column} references missing {referenced} id {id}")]
    ReferentialViolation {
        table: &'static str,
        column: &'static str,
        referenced: &'static str,
        id: u64,
    },
    /// A check constraint (non-negativity, minimum quantity) failed.
    #[error("check constraint violated on {table}.{column}: {message}")]
    CheckViolation {
        table: &'static str,
        column: &'static str,
        message: String,
    },
    /// A point update or lookup targeted a row that does not exist.
    #[error("no row with id {id} in {table}")]
    UnknownRow { table: &'static str, id: u64 },
}
