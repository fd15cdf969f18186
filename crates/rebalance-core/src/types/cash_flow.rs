//! Cash-flow request: incoming and outgoing amounts for one calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// The cash flows applied in a single calculation call.
///
/// The two amounts are independent: both may be zero, and a caller may
/// request an allocation and a redemption in the same call — each is
/// computed against the current holdings on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowRequest {
    /// New incoming cash to distribute toward target ratios.
    pub incremental_amount: Decimal,

    /// Cash to withdraw from the holdings.
    pub redemption_amount: Decimal,
}

impl CashFlowRequest {
    /// Creates a cash-flow request, validating that both amounts are
    /// non-negative.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NegativeAmount` for a negative amount.
    pub fn new(incremental_amount: Decimal, redemption_amount: Decimal) -> CoreResult<Self> {
        if incremental_amount < Decimal::ZERO {
            return Err(CoreError::negative_amount(
                "incremental_amount",
                incremental_amount,
            ));
        }
        if redemption_amount < Decimal::ZERO {
            return Err(CoreError::negative_amount(
                "redemption_amount",
                redemption_amount,
            ));
        }
        Ok(Self {
            incremental_amount,
            redemption_amount,
        })
    }

    /// The zero cash flow: pure internal rebalancing.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns true if both amounts are zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.incremental_amount.is_zero() && self.redemption_amount.is_zero()
    }

    /// The net cash flow (incremental minus redemption).
    #[must_use]
    pub fn net(&self) -> Decimal {
        self.incremental_amount - self.redemption_amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_valid_request() {
        let flow = CashFlowRequest::new(dec!(100), dec!(50)).unwrap();
        assert_eq!(flow.net(), dec!(50));
        assert!(!flow.is_zero());
    }

    #[test]
    fn test_zero_flow() {
        let flow = CashFlowRequest::none();
        assert!(flow.is_zero());
        assert_eq!(flow.net(), Decimal::ZERO);
    }

    #[test]
    fn test_negative_amounts_rejected() {
        assert!(CashFlowRequest::new(dec!(-1), dec!(0)).is_err());
        assert!(CashFlowRequest::new(dec!(0), dec!(-0.01)).is_err());
    }

    #[test]
    fn test_both_flows_allowed() {
        // Allocation and redemption in the same call is valid.
        let flow = CashFlowRequest::new(dec!(123.45), dec!(234.56)).unwrap();
        assert_eq!(flow.incremental_amount, dec!(123.45));
        assert_eq!(flow.redemption_amount, dec!(234.56));
    }
}
