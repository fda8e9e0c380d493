//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid classification: {0}")]
    InvalidClassification(String),

    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    #[error("Required vote count must be at least 1")]
    InvalidRequired,
}
