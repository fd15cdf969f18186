//! # Rebalance Engine
//!
//! Cent-exact allocation and redemption engine for portfolio rebalancing.
//!
//! Given fund holdings grouped into major categories with target
//! allocation ratios, the engine computes how to distribute incoming cash
//! or draw a withdrawal so the holdings move toward their targets, plus
//! the internal rebalance delta assuming no cash flow.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: every calculation is stateless with explicit
//!   inputs; identical inputs always produce identical outputs
//! - **Cent-exact**: all sums are carried in integer cents, and each
//!   operation's results sum to the requested amount exactly
//! - **Degrade, don't panic**: malformed economic input (ratios not
//!   summing to 1, empty lists, overweight-everywhere portfolios) falls
//!   back to documented no-op or pro-rata behavior, because the engine is
//!   called continuously from live-editing UIs where intermediate states
//!   are routinely invalid
//!
//! ## Quick Start
//!
//! ```rust
//! use rebalance_engine::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let entries = vec![
//!     FundEntry::builder()
//!         .id("F1")
//!         .major_category("Equity")
//!         .target_ratio(dec!(0.6))
//!         .amount(dec!(600))
//!         .build()
//!         .unwrap(),
//!     FundEntry::builder()
//!         .id("F2")
//!         .major_category("Bond")
//!         .target_ratio(dec!(0.4))
//!         .amount(dec!(400))
//!         .build()
//!         .unwrap(),
//! ];
//!
//! let allocations = calculate_allocation_by_major_category(
//!     &entries,
//!     dec!(1000),
//!     dec!(123.45),
//!     &CategoryOrder::new(),
//! )
//! .unwrap();
//!
//! let total: rust_decimal::Decimal = allocations.values().sum();
//! assert_eq!(total, dec!(123.45));
//! ```
//!
//! ## Module Overview
//!
//! - [`distribute`] - Cent-exact proportional distribution by weight
//! - [`grouping`] - Ordered major/minor category bucketing
//! - [`allocation`] - Incoming cash toward underweight categories
//! - [`redemption`] - Withdrawals from overweight categories
//! - [`rebalance`] - Internal buy/sell deltas with no cash flow
//! - [`summary`] - Per-entry metrics, subtotals, and totals in one call

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

// Module declarations
pub mod allocation;
pub mod distribute;
pub mod error;
pub mod grouping;
mod proportional;
pub mod rebalance;
pub mod redemption;
pub mod summary;

// Re-export error types at crate root
pub use error::{EngineError, EngineResult};

// Re-export main functions and types
pub use allocation::calculate_allocation_by_major_category;
pub use distribute::{distribute_cents, WeightedItem};
pub use grouping::{group_by_major_category, group_by_minor_category, MajorGroup, MinorGroup};
pub use rebalance::calculate_rebalance_cents;
pub use redemption::calculate_redemption_by_major_category;
pub use summary::{
    calculate_portfolio_summary, EntryMetrics, MajorSubtotal, MinorSubtotal, PortfolioSummary,
    SubtotalMetrics, TotalMetrics,
};

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use rebalance_engine::prelude::*;
/// ```
pub mod prelude {
    // Error types
    pub use crate::error::{EngineError, EngineResult};

    // Distribution
    pub use crate::distribute::{distribute_cents, WeightedItem};

    // Grouping
    pub use crate::grouping::{
        group_by_major_category, group_by_minor_category, MajorGroup, MinorGroup,
    };

    // Engines
    pub use crate::allocation::calculate_allocation_by_major_category;
    pub use crate::rebalance::calculate_rebalance_cents;
    pub use crate::redemption::calculate_redemption_by_major_category;

    // Summary
    pub use crate::summary::{
        calculate_portfolio_summary, EntryMetrics, MajorSubtotal, MinorSubtotal,
        PortfolioSummary, SubtotalMetrics, TotalMetrics,
    };

    // Re-export commonly used types from dependencies
    pub use rebalance_core::types::money::{from_cents, to_cents};
    pub use rebalance_core::{CashFlowRequest, CategoryOrder, FundEntry, FundEntryBuilder};
    pub use rust_decimal::Decimal;
    pub use rust_decimal_macros::dec;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_compiles() {
        // Basic smoke test
        let err = EngineError::duplicate_id("F1");
        assert!(err.to_string().contains("F1"));
    }
}
