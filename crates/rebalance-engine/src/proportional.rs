//! Shared two-level proportional distribution toward target ratios.
//!
//! Allocation (deposits) and redemption (withdrawals) follow the same
//! skeleton: group entries by major category, compute each category's
//! need relative to its target, split the cash across needy categories
//! proportionally to need, distribute each category's cents among its
//! entries, and reconcile the global rounding residual in a single final
//! step. Keeping that skeleton in one routine keeps the tie-break and
//! residual rules identical in both directions.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;

use rebalance_core::types::money::to_cents;
use rebalance_core::{CategoryOrder, FundEntry};

use crate::distribute::{distribute_cents, WeightedItem};
use crate::error::{EngineError, EngineResult};
use crate::grouping::group_by_major_category;

/// Direction of the cash flow being distributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    /// Incoming cash, topping up underweight categories.
    Deposit,
    /// Outgoing cash, drawing down overweight categories.
    Withdrawal,
}

/// Fails fast when the same id appears twice in one call.
pub(crate) fn ensure_unique_ids(entries: &[FundEntry]) -> EngineResult<()> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(entries.len());
    for entry in entries {
        if !seen.insert(entry.id.as_str()) {
            return Err(EngineError::duplicate_id(&entry.id));
        }
    }
    Ok(())
}

/// Distributes `flow_amount` across entries toward their target ratios.
///
/// Returns per-entry cents. Callers handle the direction-specific early
/// exits (zero flow, zero total, full liquidation) before calling this.
pub(crate) fn distribute_toward_target(
    entries: &[FundEntry],
    total_amount: Decimal,
    flow_amount: Decimal,
    order: &CategoryOrder,
    direction: Direction,
) -> EngineResult<HashMap<String, i64>> {
    let mut cents: HashMap<String, i64> = entries.iter().map(|e| (e.id.clone(), 0)).collect();

    let new_total = match direction {
        Direction::Deposit => total_amount + flow_amount,
        Direction::Withdrawal => total_amount - flow_amount,
    };

    let groups = group_by_major_category(entries, order);

    // Per-category need relative to target at the new total.
    let mut needs: Vec<Decimal> = Vec::with_capacity(groups.len());
    let mut total_need = Decimal::ZERO;
    for group in &groups {
        let target_amount = new_total * group.target_ratio_sum();
        let need = match direction {
            Direction::Deposit => target_amount - group.current_amount(),
            Direction::Withdrawal => group.current_amount() - target_amount,
        };
        if need > Decimal::ZERO {
            total_need += need;
        }
        needs.push(need);
    }

    if total_need <= Decimal::ZERO {
        match direction {
            // Only underweight categories are topped up; a portfolio that
            // is at or above target everywhere absorbs nothing.
            Direction::Deposit => return Ok(cents),
            // No category is overweight: redeem pro-rata against each
            // category's share of the current total, by amount within.
            Direction::Withdrawal => {
                for group in &groups {
                    let current = group.current_amount();
                    if current <= Decimal::ZERO {
                        continue;
                    }
                    let category_cents = to_cents(flow_amount * (current / total_amount));
                    let items: Vec<WeightedItem> = group
                        .entries
                        .iter()
                        .filter(|e| e.amount > Decimal::ZERO)
                        .map(|e| WeightedItem::new(e.id.clone(), e.amount))
                        .collect();
                    merge(&mut cents, distribute_cents(&items, category_cents)?);
                }
            }
        }
    } else {
        for (group, &need) in groups.iter().zip(&needs) {
            if need <= Decimal::ZERO {
                continue;
            }

            let ratio_sum = group.target_ratio_sum();
            let current = group.current_amount();
            let category_flow = flow_amount * (need / total_need);
            let category_cents = to_cents(category_flow);

            let items: Vec<WeightedItem> = match direction {
                Direction::Deposit => {
                    // Entry-level need against the category's post-deposit
                    // amount, split by relative target ratio.
                    let after = current + category_flow;
                    group
                        .entries
                        .iter()
                        .filter(|e| e.target_ratio > Decimal::ZERO)
                        .filter_map(|e| {
                            let target = after * (e.target_ratio / ratio_sum);
                            let need = target - e.amount;
                            (need > Decimal::ZERO)
                                .then(|| WeightedItem::new(e.id.clone(), need))
                        })
                        .collect()
                }
                Direction::Withdrawal => {
                    let after = current - category_flow;
                    let weighted: Vec<WeightedItem> = group
                        .entries
                        .iter()
                        .filter(|e| e.amount > Decimal::ZERO)
                        .filter_map(|e| {
                            let relative = if ratio_sum > Decimal::ZERO {
                                e.target_ratio / ratio_sum
                            } else {
                                Decimal::ZERO
                            };
                            let need = e.amount - after * relative;
                            (need > Decimal::ZERO)
                                .then(|| WeightedItem::new(e.id.clone(), need))
                        })
                        .collect();
                    if weighted.is_empty() {
                        // No entry is above its in-category target: fall
                        // back to weighting by current amount.
                        group
                            .entries
                            .iter()
                            .filter(|e| e.amount > Decimal::ZERO)
                            .map(|e| WeightedItem::new(e.id.clone(), e.amount))
                            .collect()
                    } else {
                        weighted
                    }
                }
            };

            if items.is_empty() {
                continue;
            }
            merge(&mut cents, distribute_cents(&items, category_cents)?);
        }
    }

    reconcile_residual(entries, &mut cents, to_cents(flow_amount), direction);

    Ok(cents)
}

/// Reconciles the global rounding residual against the requested flow.
///
/// Independent per-category rounding can leave the overall sum a few
/// cents off the requested flow. A shortfall is added to a single
/// absorbing entry: deposits absorb into the entry with the largest
/// allocated cents, withdrawals into the entry with the largest current
/// amount. Strict greater-than scans in input order make the first
/// occurrence win ties; when nothing was distributed the first entry
/// absorbs everything.
///
/// An excess (two or more categories rounding their share up) is drained
/// from the entries holding the most cents, never taking any entry below
/// zero, so entries that received nothing stay at exactly zero.
fn reconcile_residual(
    entries: &[FundEntry],
    cents: &mut HashMap<String, i64>,
    flow_cents: i64,
    direction: Direction,
) {
    let distributed: i64 = cents.values().sum();
    let diff = flow_cents - distributed;
    if diff == 0 {
        return;
    }

    if diff < 0 {
        // Stable sort: first occurrence wins ties.
        let mut holders: Vec<&FundEntry> = entries.iter().collect();
        holders.sort_by_key(|e| std::cmp::Reverse(cents.get(&e.id).copied().unwrap_or(0)));
        let mut remaining = -diff;
        for entry in holders {
            if remaining == 0 {
                break;
            }
            if let Some(share) = cents.get_mut(&entry.id) {
                let take = remaining.min(*share);
                *share -= take;
                remaining -= take;
            }
        }
        return;
    }

    let absorber = match direction {
        Direction::Deposit => entries
            .iter()
            .fold(None::<(&FundEntry, i64)>, |best, entry| {
                let value = cents.get(&entry.id).copied().unwrap_or(0);
                match best {
                    Some((_, max)) if value <= max => best,
                    _ => Some((entry, value)),
                }
            })
            .map(|(entry, _)| entry),
        Direction::Withdrawal => entries
            .iter()
            .fold(None::<&FundEntry>, |best, entry| match best {
                Some(b) if entry.amount <= b.amount => best,
                _ => Some(entry),
            }),
    };

    if let Some(entry) = absorber {
        *cents.entry(entry.id.clone()).or_insert(0) += diff;
    }
}

fn merge(into: &mut HashMap<String, i64>, from: HashMap<String, i64>) {
    for (id, value) in from {
        *into.entry(id).or_insert(0) += value;
    }
}
