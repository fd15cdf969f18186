//! Caller-facing aggregation: per-entry metrics, subtotals, and totals.
//!
//! One call computes everything a presentation layer needs to render a
//! portfolio table: actual ratios, deviations from target, rebalance
//! deltas, and the allocation/redemption for the requested cash flows,
//! at entry, minor-category, major-category, and portfolio level. All
//! subtotals are sums of per-entry cents, so the levels always agree.

use std::collections::HashMap;

use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use rebalance_core::types::money::from_cents;
use rebalance_core::{CashFlowRequest, CategoryOrder, FundEntry};

use crate::allocation::allocation_cents_by_major_category;
use crate::error::EngineResult;
use crate::grouping::{group_by_major_category, group_by_minor_category};
use crate::rebalance::calculate_rebalance_cents;
use crate::redemption::redemption_cents_by_major_category;

/// Calculated metrics for one entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryMetrics {
    /// Share of the current total held by this entry (0 when total <= 0).
    pub actual_ratio: Decimal,

    /// `target_ratio - actual_ratio`.
    pub deviation: Decimal,

    /// Buy (positive) or sell (negative) amount to hit target.
    pub rebalance: Decimal,

    /// Share of the incremental cash allocated to this entry.
    pub allocation: Decimal,

    /// Share of the redemption drawn from this entry.
    pub redemption: Decimal,
}

/// Aggregated metrics for a minor- or major-category bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubtotalMetrics {
    /// Sum of the bucket entries' target ratios.
    pub target_ratio: Decimal,

    /// Sum of the bucket entries' current amounts.
    pub amount: Decimal,

    /// Bucket share of the current total (0 when total <= 0).
    pub actual_ratio: Decimal,

    /// `target_ratio - actual_ratio`.
    pub deviation: Decimal,

    /// Sum of the bucket entries' rebalance deltas.
    pub rebalance: Decimal,

    /// Sum of the bucket entries' allocations.
    pub allocation: Decimal,

    /// Sum of the bucket entries' redemptions.
    pub redemption: Decimal,
}

/// Subtotal for one labeled minor category within a major category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinorSubtotal {
    /// The enclosing major category.
    pub major_category: String,

    /// The minor-category label.
    pub minor_category: String,

    /// Aggregated metrics for this bucket.
    pub metrics: SubtotalMetrics,
}

/// Subtotal for one major category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MajorSubtotal {
    /// The major-category label.
    pub major_category: String,

    /// Aggregated metrics for this bucket.
    pub metrics: SubtotalMetrics,
}

/// Portfolio-level totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TotalMetrics {
    /// Total current holdings.
    pub amount: Decimal,

    /// Sum of all target ratios (expected 1.0, not enforced).
    pub target_ratio: Decimal,

    /// Total allocated incremental cash.
    pub allocation: Decimal,

    /// Total redeemed cash.
    pub redemption: Decimal,

    /// Net rebalance delta across all entries.
    pub rebalance: Decimal,
}

/// The full calculation result for one portfolio snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Per-entry metrics, keyed by entry id.
    pub entries: HashMap<String, EntryMetrics>,

    /// Subtotals for labeled minor categories, in group iteration order.
    /// Display policies (such as hiding single-entry buckets) are left to
    /// callers.
    pub minor_subtotals: Vec<MinorSubtotal>,

    /// Major-category subtotals, in category order.
    pub major_subtotals: Vec<MajorSubtotal>,

    /// Portfolio-level totals.
    pub total: TotalMetrics,
}

/// Computes the full summary for one portfolio snapshot and cash flow.
///
/// Allocation, redemption, and rebalance are each computed independently
/// against the current holdings; see the per-engine functions for their
/// conservation guarantees.
///
/// # Errors
///
/// Fails fast on duplicate entry ids (negative cash flows are already
/// unrepresentable in [`CashFlowRequest`]).
pub fn calculate_portfolio_summary(
    entries: &[FundEntry],
    cash_flow: &CashFlowRequest,
    order: &CategoryOrder,
) -> EngineResult<PortfolioSummary> {
    let total_amount: Decimal = entries.iter().map(|e| e.amount).sum();

    debug!(
        "Summarizing {} entries, total {}, incremental {}, redemption {}",
        entries.len(),
        total_amount,
        cash_flow.incremental_amount,
        cash_flow.redemption_amount
    );

    let allocation_cents = allocation_cents_by_major_category(
        entries,
        total_amount,
        cash_flow.incremental_amount,
        order,
    )?;
    let redemption_cents = redemption_cents_by_major_category(
        entries,
        total_amount,
        cash_flow.redemption_amount,
        order,
    )?;
    let rebalance_cents = calculate_rebalance_cents(entries, cash_flow);

    let cents_for = |map: &HashMap<String, i64>, id: &str| map.get(id).copied().unwrap_or(0);

    let mut entry_metrics: HashMap<String, EntryMetrics> = HashMap::with_capacity(entries.len());
    for entry in entries {
        let actual_ratio = if total_amount > Decimal::ZERO {
            entry.amount / total_amount
        } else {
            Decimal::ZERO
        };
        entry_metrics.insert(
            entry.id.clone(),
            EntryMetrics {
                actual_ratio,
                deviation: entry.target_ratio - actual_ratio,
                rebalance: from_cents(cents_for(&rebalance_cents, &entry.id)),
                allocation: from_cents(cents_for(&allocation_cents, &entry.id)),
                redemption: from_cents(cents_for(&redemption_cents, &entry.id)),
            },
        );
    }

    let subtotal = |bucket: &[&FundEntry]| -> SubtotalMetrics {
        let target_ratio: Decimal = bucket.iter().map(|e| e.target_ratio).sum();
        let amount: Decimal = bucket.iter().map(|e| e.amount).sum();
        let actual_ratio = if total_amount > Decimal::ZERO {
            amount / total_amount
        } else {
            Decimal::ZERO
        };
        let sum_cents = |map: &HashMap<String, i64>| -> i64 {
            bucket.iter().map(|e| cents_for(map, &e.id)).sum()
        };
        SubtotalMetrics {
            target_ratio,
            amount,
            actual_ratio,
            deviation: target_ratio - actual_ratio,
            rebalance: from_cents(sum_cents(&rebalance_cents)),
            allocation: from_cents(sum_cents(&allocation_cents)),
            redemption: from_cents(sum_cents(&redemption_cents)),
        }
    };

    let groups = group_by_major_category(entries, order);
    let mut minor_subtotals = Vec::new();
    let mut major_subtotals = Vec::with_capacity(groups.len());
    for group in &groups {
        for minor in group_by_minor_category(&group.entries) {
            if let Some(label) = &minor.label {
                minor_subtotals.push(MinorSubtotal {
                    major_category: group.label.clone(),
                    minor_category: label.clone(),
                    metrics: subtotal(&minor.entries),
                });
            }
        }
        major_subtotals.push(MajorSubtotal {
            major_category: group.label.clone(),
            metrics: subtotal(&group.entries),
        });
    }

    let total = TotalMetrics {
        amount: total_amount,
        target_ratio: entries.iter().map(|e| e.target_ratio).sum(),
        allocation: from_cents(allocation_cents.values().sum()),
        redemption: from_cents(redemption_cents.values().sum()),
        rebalance: from_cents(rebalance_cents.values().sum()),
    };

    Ok(PortfolioSummary {
        entries: entry_metrics,
        minor_subtotals,
        major_subtotals,
        total,
    })
}
