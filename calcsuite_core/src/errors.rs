//! # Error Types
//!
//! Structured error types for calcsuite_core. Every failure mode in this
//! crate is recoverable: validation errors suppress the result, storage
//! errors degrade to empty or in-memory-only history. Nothing here should
//! ever abort a calling flow.
//!
//! ## Example
//!
//! ```rust
//! use calcsuite_core::errors::{CalcError, CalcResult};
//!
//! fn validate_weight(weight: f64) -> CalcResult<()> {
//!     if weight <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "weight",
//!             weight.to_string(),
//!             "Weight must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calcsuite_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculator operations.
///
/// Each variant carries enough context to explain what went wrong without
/// the caller having to parse the display string.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-numeric, out of domain, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The persistence capability failed (read, write, or remove)
    #[error("Storage error: {operation} on '{key}' - {reason}")]
    StorageError {
        operation: String,
        key: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// A currency code that is not in the static rate table
    #[error("Unknown currency code: {code}")]
    UnknownCurrency { code: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a StorageError
    pub fn storage_error(
        operation: impl Into<String>,
        key: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::StorageError {
            operation: operation.into(),
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownCurrency error
    pub fn unknown_currency(code: impl Into<String>) -> Self {
        CalcError::UnknownCurrency { code: code.into() }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::StorageError { .. } => "STORAGE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::UnknownCurrency { .. } => "UNKNOWN_CURRENCY",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("weight", "-5.0", "Weight must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalcError::unknown_currency("XYZ").error_code(),
            "UNKNOWN_CURRENCY"
        );
        assert_eq!(
            CalcError::storage_error("read", "bmiHistory", "disk full").error_code(),
            "STORAGE_ERROR"
        );
    }
}
