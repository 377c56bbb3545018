//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. Infrastructure
/// concerns (IO, serialization) belong to the layer that owns them.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LedgerError {
    /// A pre-tax amount was negative (or not a finite number).
    #[error("invalid amount: {0}")]
    InvalidAmount(f64),

    /// A record index was outside the collection's current bounds.
    #[error("record {id} not found ({count} records)")]
    NotFound { id: usize, count: usize },
}

impl LedgerError {
    pub fn invalid_amount(amount: f64) -> Self {
        Self::InvalidAmount(amount)
    }

    pub fn not_found(id: usize, count: usize) -> Self {
        Self::NotFound { id, count }
    }
}
