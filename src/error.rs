//! Error types for the gintervals library
//!
//! Only merging can fail; filling gaps and decorating text are total.

use thiserror::Error;

/// Errors raised by the interval algebra
#[derive(Debug, Clone, PartialEq, Eq, Error, uniffi::Error)]
pub enum IntervalError {
    /// The intervals cannot be merged as given
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A label could not be encoded into its identity key
    #[error("Malformed content: {0}")]
    MalformedContent(String),
}

impl IntervalError {
    /// Create an invalid input error
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }

    /// Create a malformed content error
    pub fn malformed_content(reason: impl Into<String>) -> Self {
        Self::MalformedContent(reason.into())
    }
}

impl From<serde_cbor::Error> for IntervalError {
    fn from(err: serde_cbor::Error) -> Self {
        Self::malformed_content(err.to_string())
    }
}

/// Result type for interval operations
pub type IntervalResult<T> = Result<T, IntervalError>;
