//! Internal rebalance deltas: buy/sell amounts to hit target, per entry.

use std::collections::HashMap;

use rust_decimal::Decimal;

use rebalance_core::types::money::to_cents;
use rebalance_core::{CashFlowRequest, FundEntry};

/// Computes each entry's rebalance delta in cents.
///
/// The delta is `round(base * target_ratio * 100) - round(amount * 100)`:
/// positive means buy, negative means sell. With no cash flow the base is
/// the current total, so for a portfolio whose ratios sum to 1 the deltas
/// sum to zero — a pure internal redistribution. With a cash flow the
/// base is the post-flow total.
///
/// Category subtotals must be produced by summing constituent entries'
/// cents, never by re-deriving from aggregate ratios, so the levels can
/// never disagree by a rounding cent.
#[must_use]
pub fn calculate_rebalance_cents(
    entries: &[FundEntry],
    cash_flow: &CashFlowRequest,
) -> HashMap<String, i64> {
    let total_amount: Decimal = entries.iter().map(|e| e.amount).sum();
    let base = if cash_flow.is_zero() {
        total_amount
    } else {
        total_amount + cash_flow.net()
    };

    entries
        .iter()
        .map(|e| {
            let target_cents = to_cents(base * e.target_ratio);
            (e.id.clone(), target_cents - to_cents(e.amount))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn entry(id: &str, ratio: Decimal, amount: Decimal) -> FundEntry {
        FundEntry::builder()
            .id(id)
            .major_category("Equity")
            .target_ratio(ratio)
            .amount(amount)
            .build()
            .unwrap()
    }

    #[test]
    fn test_no_flow_deltas_sum_to_zero() {
        let entries = vec![
            entry("1", dec!(0.6), dec!(500)),
            entry("2", dec!(0.4), dec!(500)),
        ];
        let cents = calculate_rebalance_cents(&entries, &CashFlowRequest::none());

        assert_eq!(cents["1"], 10000); // buy 100.00
        assert_eq!(cents["2"], -10000); // sell 100.00
        assert_eq!(cents.values().sum::<i64>(), 0);
    }

    #[test]
    fn test_balanced_portfolio_zero_deltas() {
        let entries = vec![
            entry("1", dec!(0.6), dec!(600)),
            entry("2", dec!(0.4), dec!(400)),
        ];
        let cents = calculate_rebalance_cents(&entries, &CashFlowRequest::none());
        assert!(cents.values().all(|&c| c == 0));
    }

    #[test]
    fn test_flow_shifts_base_to_new_total() {
        let entries = vec![
            entry("1", dec!(0.6), dec!(600)),
            entry("2", dec!(0.4), dec!(400)),
        ];
        let flow = CashFlowRequest::new(dec!(100), dec!(0)).unwrap();
        let cents = calculate_rebalance_cents(&entries, &flow);

        // Base is 1100: targets 660 / 440.
        assert_eq!(cents["1"], 6000);
        assert_eq!(cents["2"], 4000);
    }

    #[test]
    fn test_redemption_flow_lowers_base() {
        let entries = vec![
            entry("1", dec!(0.5), dec!(500)),
            entry("2", dec!(0.5), dec!(500)),
        ];
        let flow = CashFlowRequest::new(dec!(0), dec!(200)).unwrap();
        let cents = calculate_rebalance_cents(&entries, &flow);

        // Base is 800: each target 400, each holds 500.
        assert_eq!(cents["1"], -10000);
        assert_eq!(cents["2"], -10000);
    }

    #[test]
    fn test_empty_entries() {
        let cents = calculate_rebalance_cents(&[], &CashFlowRequest::none());
        assert!(cents.is_empty());
    }
}
