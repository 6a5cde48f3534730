//! Error types for the projection engine
//!
//! All calculator errors are synchronous: invalid inputs are rejected
//! before any computation and no partial result is ever returned.

use thiserror::Error;

/// Errors produced by the projection engine
#[derive(Debug, Error)]
pub enum EngineError {
    /// Input outside the calculator's domain (non-positive principal,
    /// zero term, rate outside 0-100, etc.)
    #[error("invalid {field}: {message}")]
    InvalidInput {
        field: &'static str,
        message: String,
    },

    /// I/O failure while reading an input file
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Malformed CSV in a position input file
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl EngineError {
    /// Build an `InvalidInput` error for the given field
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field,
            message: message.into(),
        }
    }
}
