//! Allocation of incoming cash toward underweight categories.

use std::collections::HashMap;

use log::debug;
use rust_decimal::Decimal;

use rebalance_core::types::money::from_cents;
use rebalance_core::{CategoryOrder, FundEntry};

use crate::error::{EngineError, EngineResult};
use crate::proportional::{distribute_toward_target, ensure_unique_ids, Direction};

/// Computes how much of `incremental_amount` each entry should receive.
///
/// The incremental cash is split across major categories proportionally
/// to how far below target each category sits at the new total, then
/// within each category toward the entries below their in-category
/// target. Categories at or above target receive nothing; when *no*
/// category is underweight the whole amount stays unallocated and every
/// entry maps to zero — the engine only tops up, it never force-feeds
/// cash into a balanced or overweight portfolio.
///
/// Whenever `incremental_amount > 0`, `total_amount > 0` and some
/// category is underweight, the returned values sum to
/// `incremental_amount` exactly, to the cent. No value is ever negative.
///
/// # Errors
///
/// Fails fast on duplicate entry ids and a negative `incremental_amount`.
pub fn calculate_allocation_by_major_category(
    entries: &[FundEntry],
    total_amount: Decimal,
    incremental_amount: Decimal,
    order: &CategoryOrder,
) -> EngineResult<HashMap<String, Decimal>> {
    let cents =
        allocation_cents_by_major_category(entries, total_amount, incremental_amount, order)?;
    Ok(cents.into_iter().map(|(id, c)| (id, from_cents(c))).collect())
}

/// Cents-level variant of [`calculate_allocation_by_major_category`],
/// used by the summary aggregation.
pub(crate) fn allocation_cents_by_major_category(
    entries: &[FundEntry],
    total_amount: Decimal,
    incremental_amount: Decimal,
    order: &CategoryOrder,
) -> EngineResult<HashMap<String, i64>> {
    ensure_unique_ids(entries)?;
    if incremental_amount < Decimal::ZERO {
        return Err(EngineError::negative_cash_flow(
            "incremental",
            incremental_amount,
        ));
    }

    if incremental_amount <= Decimal::ZERO || total_amount <= Decimal::ZERO {
        return Ok(entries.iter().map(|e| (e.id.clone(), 0)).collect());
    }

    debug!(
        "Allocating {} across {} entries (total {})",
        incremental_amount,
        entries.len(),
        total_amount
    );

    distribute_toward_target(
        entries,
        total_amount,
        incremental_amount,
        order,
        Direction::Deposit,
    )
}
