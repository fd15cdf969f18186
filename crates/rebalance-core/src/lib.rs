//! # Rebalance Core
//!
//! Core types and money arithmetic for the Rebalance portfolio calculator.
//!
//! This crate provides the foundational building blocks used by the
//! calculation engine:
//!
//! - **Types**: [`FundEntry`], [`CategoryOrder`], [`CashFlowRequest`]
//! - **Money**: cent-exact conversion helpers in [`types::money`]
//! - **Errors**: validation errors raised at the input boundary
//!
//! ## Design Philosophy
//!
//! - **Validated boundary**: entries are built through a validating
//!   builder, so negative amounts and out-of-range ratios never reach the
//!   engine
//! - **Exact arithmetic**: all money is `rust_decimal::Decimal`, with
//!   internal sums carried in whole `i64` cents — no binary float drift
//! - **Read-only inputs**: the engine never mutates entries
//!
//! ## Example
//!
//! ```rust
//! use rebalance_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let entry = FundEntry::builder()
//!     .id("F1")
//!     .major_category("Equity")
//!     .target_ratio(dec!(0.6))
//!     .amount(dec!(600))
//!     .build()
//!     .unwrap();
//! let flow = CashFlowRequest::new(dec!(123.45), dec!(0)).unwrap();
//! assert!(!flow.is_zero());
//! assert_eq!(rebalance_core::types::money::to_cents(entry.amount), 60000);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::money::{from_cents, round_currency, to_cents};
    pub use crate::types::{CashFlowRequest, CategoryOrder, FundEntry, FundEntryBuilder};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{CashFlowRequest, CategoryOrder, FundEntry, FundEntryBuilder};
