//! Error types for the Rebalance core crate.
//!
//! This module defines the error types used when constructing and
//! validating the domain types.

use rust_decimal::Decimal;
use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The main error type for core domain operations.
#[derive(Error, Debug, Clone)]
pub enum CoreError {
    /// A fund entry failed validation.
    #[error("Invalid entry '{id}': {reason}")]
    InvalidEntry {
        /// The entry id.
        id: String,
        /// Reason for invalidity.
        reason: String,
    },

    /// A monetary value was negative where a non-negative one is required.
    #[error("Negative amount for {field}: {value}")]
    NegativeAmount {
        /// The name of the offending field.
        field: String,
        /// The invalid value.
        value: Decimal,
    },

    /// A target ratio was outside the `[0, 1]` range.
    #[error("Target ratio out of range for '{id}': {value}")]
    RatioOutOfRange {
        /// The entry id.
        id: String,
        /// The invalid ratio value.
        value: Decimal,
    },

    /// Missing required field during construction.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },
}

impl CoreError {
    /// Create an invalid entry error.
    #[must_use]
    pub fn invalid_entry(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidEntry {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Create a negative amount error.
    #[must_use]
    pub fn negative_amount(field: impl Into<String>, value: Decimal) -> Self {
        Self::NegativeAmount {
            field: field.into(),
            value,
        }
    }

    /// Create a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_display() {
        let err = CoreError::invalid_entry("F1", "empty major category");
        assert!(err.to_string().contains("F1"));
        assert!(err.to_string().contains("empty major category"));

        let err = CoreError::negative_amount("amount", dec!(-1.50));
        assert!(err.to_string().contains("amount"));
        assert!(err.to_string().contains("-1.50"));

        let err = CoreError::missing_field("id");
        assert!(err.to_string().contains("id"));
    }

    #[test]
    fn test_error_clone() {
        let err = CoreError::missing_field("major_category");
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
    }
}
