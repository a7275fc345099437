//! Monetary rounding helpers.
//!
//! All amounts are [`Decimal`] with 2-digit currency precision at the
//! boundaries; internal running balances stay at full precision and are
//! rounded only where these helpers are applied. Midpoints round away
//! from zero, matching conventional currency rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Round to the nearest whole currency unit.
///
/// Used only for the totals-reconciliation check, which tolerates the
/// sub-unit loss of splitting a bill into per-head shares.
#[must_use]
pub fn round_unit(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Round to 2 decimal places (cent precision).
#[must_use]
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Round a transfer amount for emission.
///
/// Whole-number transfers come out as integer currency values (no
/// trailing `.00`), anything else at exactly 2 decimal places.
#[must_use]
pub fn emit_amount(amount: Decimal) -> Decimal {
    round_cents(amount).normalize()
}
