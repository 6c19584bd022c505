//! Validation error types
//!
//! Inputs are only type-coerced: an id must parse as an integer and a body
//! must decode into the request shape. No business rules are checked.

use std::fmt;

/// Validation error for request inputs
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Path or query id is not an integer
    InvalidId { value: String },

    /// Request body could not be decoded
    InvalidBody { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId { .. } => write!(f, "invalid id"),
            Self::InvalidBody { .. } => write!(f, "invalid body"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Parse a resource id from its textual form.
///
/// Surrounding whitespace is rejected, as is anything outside `i64`.
pub fn parse_id(raw: &str) -> Result<i64, ValidationError> {
    raw.parse::<i64>().map_err(|_| ValidationError::InvalidId {
        value: raw.to_owned(),
    })
}
