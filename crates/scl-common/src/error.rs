//! Error types for the SCL engine
//!
//! Provides a unified error type and the two input-failure kinds

use thiserror::Error;

/// Result type alias using SclError
pub type Result<T> = std::result::Result<T, SclError>;

/// Unified error type for SCL operations
#[derive(Debug, Error)]
pub enum SclError {
    // Invalid caller input
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    // Aggregation without checkpoints
    #[error("Empty input: {0}")]
    EmptyInput(#[from] EmptyInputError),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    // Filesystem errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Input validation errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Human control weight for '{name}' must lie in [0, 100], got {value}")]
    HumanWeightOutOfRange { name: String, value: f64 },

    #[error("Unknown weighting mode: {0} (expected 'static' or 'dynamic')")]
    UnknownMode(String),

    #[error("Invalid context: {0}")]
    InvalidContext(String),
}

/// Raised when a liability calculation is requested with no checkpoints
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("add checkpoints first")]
pub struct EmptyInputError;

impl From<serde_json::Error> for SclError {
    fn from(err: serde_json::Error) -> Self {
        SclError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for SclError {
    fn from(err: std::io::Error) -> Self {
        SclError::Io(err.to_string())
    }
}
