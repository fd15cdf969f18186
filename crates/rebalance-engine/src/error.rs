//! Error types for the rebalancing engine.
//!
//! The engine degrades to documented no-op and fallback behaviors for
//! malformed *economic* input (ratios not summing to 1, empty entry
//! lists, overweight-everywhere portfolios). The conditions below are
//! *programming* errors instead, and fail fast.

use rust_decimal::Decimal;
use thiserror::Error;

use rebalance_core::CoreError;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur during engine operations.
#[derive(Error, Debug, Clone)]
pub enum EngineError {
    /// The same entry id appeared more than once in one calculation call.
    #[error("Duplicate entry id '{id}'")]
    DuplicateEntryId {
        /// The duplicated id.
        id: String,
    },

    /// A cash-flow argument was negative.
    #[error("Negative {kind} amount: {value}")]
    NegativeCashFlow {
        /// Which cash flow was negative ("incremental" or "redemption").
        kind: String,
        /// The invalid value.
        value: Decimal,
    },

    /// A cent total passed to the distributor was negative.
    #[error("Negative cent total: {value}")]
    NegativeCents {
        /// The invalid cent total.
        value: i64,
    },

    /// Invalid input detected by the core type layer.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl EngineError {
    /// Create a duplicate entry id error.
    #[must_use]
    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateEntryId { id: id.into() }
    }

    /// Create a negative cash flow error.
    #[must_use]
    pub fn negative_cash_flow(kind: impl Into<String>, value: Decimal) -> Self {
        Self::NegativeCashFlow {
            kind: kind.into(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_display() {
        let err = EngineError::duplicate_id("F1");
        assert!(err.to_string().contains("F1"));

        let err = EngineError::negative_cash_flow("redemption", dec!(-5));
        assert!(err.to_string().contains("redemption"));
        assert!(err.to_string().contains("-5"));

        let err = EngineError::NegativeCents { value: -1 };
        assert!(err.to_string().contains("-1"));
    }

    #[test]
    fn test_core_error_conversion() {
        let core = CoreError::missing_field("id");
        let err: EngineError = core.into();
        assert!(err.to_string().contains("id"));
    }
}
