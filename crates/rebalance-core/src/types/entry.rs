//! Fund entry: one line of holding.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// A single fund holding with its target allocation.
///
/// Entries are read-only inputs to the calculation engine: the engine
/// never mutates them and holds no state between calls.
///
/// # Example
///
/// ```rust
/// use rebalance_core::types::FundEntry;
/// use rust_decimal_macros::dec;
///
/// let entry = FundEntry::builder()
///     .id("F1")
///     .major_category("Equity")
///     .minor_category("US")
///     .target_ratio(dec!(0.6))
///     .amount(dec!(600))
///     .build()
///     .unwrap();
/// assert_eq!(entry.amount, dec!(600));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundEntry {
    /// Stable unique identifier; the map key for all results.
    pub id: String,

    /// Top-level category label (e.g. "Equity", "Bond", "Cash").
    pub major_category: String,

    /// Optional sub-category within the major category.
    /// Used only for display subtotaling, never by the cash-flow math.
    pub minor_category: Option<String>,

    /// Fractional target weight in `[0, 1]`.
    ///
    /// The sum over all entries is expected to be 1.0, but the engine
    /// tolerates any sum and degrades to its documented fallbacks.
    pub target_ratio: Decimal,

    /// Current monetary holding, non-negative, two-decimal currency.
    pub amount: Decimal,
}

impl FundEntry {
    /// Creates a builder for a fund entry.
    #[must_use]
    pub fn builder() -> FundEntryBuilder {
        FundEntryBuilder::new()
    }

    /// Returns the minor category label, or `None` when unclassified.
    #[must_use]
    pub fn minor_label(&self) -> Option<&str> {
        self.minor_category.as_deref()
    }
}

/// Builder for [`FundEntry`].
#[derive(Debug, Clone, Default)]
pub struct FundEntryBuilder {
    id: Option<String>,
    major_category: Option<String>,
    minor_category: Option<String>,
    target_ratio: Decimal,
    amount: Decimal,
}

impl FundEntryBuilder {
    /// Creates a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the entry id.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the major category label.
    #[must_use]
    pub fn major_category(mut self, category: impl Into<String>) -> Self {
        self.major_category = Some(category.into());
        self
    }

    /// Sets the minor category label.
    #[must_use]
    pub fn minor_category(mut self, category: impl Into<String>) -> Self {
        self.minor_category = Some(category.into());
        self
    }

    /// Sets the target ratio.
    #[must_use]
    pub fn target_ratio(mut self, ratio: Decimal) -> Self {
        self.target_ratio = ratio;
        self
    }

    /// Sets the current holding amount.
    #[must_use]
    pub fn amount(mut self, amount: Decimal) -> Self {
        self.amount = amount;
        self
    }

    /// Builds the entry, validating all fields.
    ///
    /// # Errors
    ///
    /// Returns an error when the id or major category is missing or empty,
    /// the amount is negative, or the target ratio is outside `[0, 1]`.
    pub fn build(self) -> CoreResult<FundEntry> {
        let id = self.id.ok_or_else(|| CoreError::missing_field("id"))?;
        if id.is_empty() {
            return Err(CoreError::missing_field("id"));
        }

        let major_category = self
            .major_category
            .ok_or_else(|| CoreError::missing_field("major_category"))?;
        if major_category.is_empty() {
            return Err(CoreError::invalid_entry(&id, "empty major category"));
        }

        if self.amount < Decimal::ZERO {
            return Err(CoreError::negative_amount("amount", self.amount));
        }

        if self.target_ratio < Decimal::ZERO || self.target_ratio > Decimal::ONE {
            return Err(CoreError::RatioOutOfRange {
                id,
                value: self.target_ratio,
            });
        }

        Ok(FundEntry {
            id,
            major_category,
            minor_category: self.minor_category,
            target_ratio: self.target_ratio,
            amount: self.amount,
        })
    }
}
