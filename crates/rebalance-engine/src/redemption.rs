//! Redemption of outgoing cash from overweight categories.

use std::collections::HashMap;

use log::debug;
use rust_decimal::Decimal;

use rebalance_core::types::money::{from_cents, to_cents};
use rebalance_core::{CategoryOrder, FundEntry};

use crate::error::{EngineError, EngineResult};
use crate::proportional::{distribute_toward_target, ensure_unique_ids, Direction};

/// Computes how much of `redemption_amount` each entry should give up.
///
/// Mirrors the allocation engine in the opposite direction: the
/// withdrawal is drawn from categories sitting above their target at the
/// reduced total, proportionally to how far above target each one is,
/// then within each category from the entries above their in-category
/// target. When no category is overweight, the withdrawal falls back to
/// pro-rata against each entry's share of the current holdings.
///
/// Whenever `redemption_amount > 0` the returned values sum to
/// `redemption_amount` exactly, to the cent — capped at the total
/// holdings under full or over-liquidation. No value is ever negative.
///
/// # Errors
///
/// Fails fast on duplicate entry ids and a negative `redemption_amount`.
pub fn calculate_redemption_by_major_category(
    entries: &[FundEntry],
    total_amount: Decimal,
    redemption_amount: Decimal,
    order: &CategoryOrder,
) -> EngineResult<HashMap<String, Decimal>> {
    let cents =
        redemption_cents_by_major_category(entries, total_amount, redemption_amount, order)?;
    Ok(cents.into_iter().map(|(id, c)| (id, from_cents(c))).collect())
}

/// Cents-level variant of [`calculate_redemption_by_major_category`],
/// used by the summary aggregation.
pub(crate) fn redemption_cents_by_major_category(
    entries: &[FundEntry],
    total_amount: Decimal,
    redemption_amount: Decimal,
    order: &CategoryOrder,
) -> EngineResult<HashMap<String, i64>> {
    ensure_unique_ids(entries)?;
    if redemption_amount < Decimal::ZERO {
        return Err(EngineError::negative_cash_flow(
            "redemption",
            redemption_amount,
        ));
    }

    if redemption_amount.is_zero() {
        return Ok(entries.iter().map(|e| (e.id.clone(), 0)).collect());
    }

    debug!(
        "Redeeming {} across {} entries (total {})",
        redemption_amount,
        entries.len(),
        total_amount
    );

    if total_amount - redemption_amount <= Decimal::ZERO {
        return Ok(liquidate(entries, total_amount));
    }

    distribute_toward_target(
        entries,
        total_amount,
        redemption_amount,
        order,
        Direction::Withdrawal,
    )
}

/// Full or over-liquidation: the redemption meets or exceeds the total
/// holdings, so each entry redeems its own current amount. The rounding
/// residual against `round(total * 100)` goes to the largest holder
/// (strict greater-than, first occurrence wins ties).
fn liquidate(entries: &[FundEntry], total_amount: Decimal) -> HashMap<String, i64> {
    let mut cents: HashMap<String, i64> = entries.iter().map(|e| (e.id.clone(), 0)).collect();

    let mut redeemed: i64 = 0;
    let mut largest: Option<&FundEntry> = None;
    for entry in entries {
        if entry.amount > Decimal::ZERO {
            let share = to_cents(entry.amount);
            cents.insert(entry.id.clone(), share);
            redeemed += share;
            if largest.map_or(true, |l| entry.amount > l.amount) {
                largest = Some(entry);
            }
        }
    }

    let diff = to_cents(total_amount) - redeemed;
    if diff != 0 {
        if let Some(entry) = largest {
            *cents.entry(entry.id.clone()).or_insert(0) += diff;
        }
    }

    cents
}
