//! Domain types for the rebalancing calculator.
//!
//! - [`FundEntry`]: one line of holding with its target ratio
//! - [`CategoryOrder`]: caller-supplied major-category display order
//! - [`CashFlowRequest`]: incremental/redemption amounts for one call
//! - [`money`]: cent-exact conversion helpers

mod cash_flow;
mod category;
mod entry;
pub mod money;

// Re-export all types
pub use cash_flow::CashFlowRequest;
pub use category::CategoryOrder;
pub use entry::{FundEntry, FundEntryBuilder};
