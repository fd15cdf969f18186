//! Cent-exact money helpers.
//!
//! All engine arithmetic that must sum exactly is carried out on whole
//! cents (`i64`); these helpers convert between decimal currency values
//! and cents. Conversion rounds **half away from zero**, so `2.675`
//! becomes `268` cents. `Decimal` values are always finite, which keeps
//! `NaN`/`Infinity` out of the calculation entirely.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Converts a decimal currency amount to whole cents.
///
/// Rounds half away from zero. Values beyond the `i64` cent range
/// saturate to `i64::MIN` / `i64::MAX`.
#[must_use]
pub fn to_cents(amount: Decimal) -> i64 {
    let cents = (amount * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    cents.to_i64().unwrap_or_else(|| {
        if cents.is_sign_negative() {
            i64::MIN
        } else {
            i64::MAX
        }
    })
}

/// Converts whole cents back to a decimal currency amount.
#[must_use]
pub fn from_cents(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

/// Rounds a decimal amount to two decimal places, half away from zero.
#[must_use]
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
