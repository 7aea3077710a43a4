//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. Storage and
/// locking failures belong to the crates that own those resources.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The product factory was asked for a kind outside the supported set.
    #[error("unknown product kind: {0}")]
    InvalidKind(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_kind(kind: impl Into<String>) -> Self {
        Self::InvalidKind(kind.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
