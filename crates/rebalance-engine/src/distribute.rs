//! Cent-exact proportional distribution by weight.
//!
//! Splits an integer cent amount among weighted identifiers so that the
//! shares always sum to exactly the requested total. Independent rounding
//! of each share can leave a small integer residual; that residual is
//! absorbed entirely by the item with the largest weight, which biases
//! the largest holder by at most a few cents in exchange for exactness.

use std::collections::HashMap;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};

/// An identifier with its distribution weight.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedItem {
    /// Result-map key for this item.
    pub id: String,

    /// Distribution weight. Items with non-positive weight receive 0.
    pub weight: Decimal,
}

impl WeightedItem {
    /// Creates a new weighted item.
    #[must_use]
    pub fn new(id: impl Into<String>, weight: Decimal) -> Self {
        Self {
            id: id.into(),
            weight,
        }
    }
}

/// Distributes `total_cents` among `items` proportionally to weight.
///
/// Every input id appears in the result. Each positive-weight item
/// receives `round(total_cents * weight / total_weight)` cents (half away
/// from zero); the rounding residual goes to the item with the largest
/// weight, ties broken by first occurrence in input order.
///
/// Items with non-positive weight always receive exactly 0. When no item
/// has positive weight the call is a no-op returning all zeros, except
/// that a nonzero `total_cents` with a non-empty list is absorbed
/// entirely by the first item so the exact-sum guarantee still holds.
///
/// # Errors
///
/// Returns `EngineError::NegativeCents` when `total_cents` is negative;
/// callers must sanitize their inputs first.
pub fn distribute_cents(
    items: &[WeightedItem],
    total_cents: i64,
) -> EngineResult<HashMap<String, i64>> {
    if total_cents < 0 {
        return Err(EngineError::NegativeCents { value: total_cents });
    }

    let mut result: HashMap<String, i64> = items.iter().map(|it| (it.id.clone(), 0)).collect();

    let total_weight: Decimal = items
        .iter()
        .filter(|it| it.weight > Decimal::ZERO)
        .map(|it| it.weight)
        .sum();

    if total_weight <= Decimal::ZERO {
        // Pathological all-zero-weight call: the first item absorbs a
        // nonzero total so the shares still sum to total_cents.
        if total_cents != 0 {
            if let Some(first) = items.first() {
                result.insert(first.id.clone(), total_cents);
            }
        }
        return Ok(result);
    }

    let mut allocated: i64 = 0;
    let mut largest: Option<&WeightedItem> = None;

    for item in items {
        if item.weight > Decimal::ZERO {
            let share = (Decimal::from(total_cents) * item.weight / total_weight)
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                .to_i64()
                .unwrap_or(0);
            result.insert(item.id.clone(), share);
            allocated += share;
            // Strict comparison: first occurrence wins ties.
            if largest.map_or(true, |l| item.weight > l.weight) {
                largest = Some(item);
            }
        }
    }

    let diff = total_cents - allocated;
    if diff != 0 {
        if let Some(item) = largest {
            if let Some(share) = result.get_mut(&item.id) {
                *share += diff;
            }
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn items(weights: &[(&str, Decimal)]) -> Vec<WeightedItem> {
        weights
            .iter()
            .map(|(id, w)| WeightedItem::new(*id, *w))
            .collect()
    }

    #[test]
    fn test_exact_sum_three_way() {
        let items = items(&[("a", dec!(3)), ("b", dec!(2)), ("c", dec!(1))]);
        let result = distribute_cents(&items, 1001).unwrap();
        let sum: i64 = result.values().sum();
        assert_eq!(sum, 1001);
        // Every id present, nothing negative
        assert_eq!(result.len(), 3);
        assert!(result.values().all(|&v| v >= 0));
    }

    #[test]
    fn test_proportional_shares() {
        let items = items(&[("a", dec!(60)), ("b", dec!(40))]);
        let result = distribute_cents(&items, 1000).unwrap();
        assert_eq!(result["a"], 600);
        assert_eq!(result["b"], 400);
    }

    #[test]
    fn test_residual_goes_to_largest_weight() {
        // 100 cents over weights 1/1/1: each share rounds to 33, residual
        // 1 lands on the first (largest-tied) item.
        let items = items(&[("a", dec!(1)), ("b", dec!(1)), ("c", dec!(1))]);
        let result = distribute_cents(&items, 100).unwrap();
        assert_eq!(result["a"], 34);
        assert_eq!(result["b"], 33);
        assert_eq!(result["c"], 33);
    }

    #[test]
    fn test_tie_break_first_occurrence() {
        let items = items(&[("x", dec!(2)), ("y", dec!(2)), ("z", dec!(1))]);
        let result = distribute_cents(&items, 5).unwrap();
        let sum: i64 = result.values().sum();
        assert_eq!(sum, 5);
        // x and y both round to 2, z to 1; no residual here. Force one:
        let result = distribute_cents(&items, 101).unwrap();
        let sum: i64 = result.values().sum();
        assert_eq!(sum, 101);
        assert!(result["x"] >= result["y"]);
    }

    #[test]
    fn test_zero_and_negative_weights_receive_zero() {
        let items = items(&[("a", dec!(0)), ("b", dec!(5)), ("c", dec!(-1))]);
        let result = distribute_cents(&items, 999).unwrap();
        assert_eq!(result["a"], 0);
        assert_eq!(result["b"], 999);
        assert_eq!(result["c"], 0);
    }

    #[test]
    fn test_all_zero_weights_zero_total() {
        let items = items(&[("a", dec!(0)), ("b", dec!(0))]);
        let result = distribute_cents(&items, 0).unwrap();
        assert_eq!(result["a"], 0);
        assert_eq!(result["b"], 0);
    }

    #[test]
    fn test_all_zero_weights_nonzero_total_first_item_absorbs() {
        let items = items(&[("a", dec!(0)), ("b", dec!(0))]);
        let result = distribute_cents(&items, 500).unwrap();
        assert_eq!(result["a"], 500);
        assert_eq!(result["b"], 0);
    }

    #[test]
    fn test_empty_items() {
        let result = distribute_cents(&[], 1000).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_negative_total_cents_rejected() {
        let items = items(&[("a", dec!(1))]);
        let err = distribute_cents(&items, -1).unwrap_err();
        assert!(matches!(err, EngineError::NegativeCents { value: -1 }));
    }

    #[test]
    fn test_fractional_weights() {
        let items = items(&[("a", dec!(0.6)), ("b", dec!(0.4))]);
        let result = distribute_cents(&items, 12345).unwrap();
        let sum: i64 = result.values().sum();
        assert_eq!(sum, 12345);
        assert_eq!(result["a"], 7407);
        assert_eq!(result["b"], 4938);
    }
}
