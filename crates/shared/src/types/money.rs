//! Monetary rounding and tolerance helpers.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All amounts are `rust_decimal::Decimal`, parsed from their original
//! string-preserving representation so per-item allocations do not
//! accumulate binary rounding error.

use rust_decimal::prelude::*;

/// Allowed imbalance between total paid and total owed, in currency units.
pub const TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2); // 0.01

/// Rounds a monetary amount to 2 decimal places using round-half-up
/// semantics (not banker's rounding).
///
/// This is the rounding convention used anywhere currency is displayed or
/// persisted: `2.005` rounds to `2.01`.
#[must_use]
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats a monetary amount as a canonical 2-decimal-place string for wire
/// payloads, e.g. `30.00`.
#[must_use]
pub fn format_currency(amount: Decimal) -> String {
    format!("{:.2}", round_currency(amount))
}

/// Returns true if two amounts agree within [`TOLERANCE`].
///
/// The boundary is inclusive: a discrepancy of exactly 0.01 is accepted as
/// rounding dust.
#[must_use]
pub fn within_tolerance(a: Decimal, b: Decimal) -> bool {
    (a - b).abs() <= TOLERANCE
}
