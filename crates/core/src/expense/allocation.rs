//! Equal-share allocation using the largest remainder method.
//!
//! Splitting a receipt total (tax folded in) across N participants must not
//! create or destroy cents: the allocations always sum exactly to the
//! rounded total.

use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use tabsplit_shared::types::round_currency;

/// One cent, the allocation unit.
const CENT: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Allocates `total` equally across `count` participants at 2 decimal
/// places.
///
/// The exact per-head share is rounded down, then the leftover cents are
/// handed out one each starting from the first participant, so the sum of
/// the result exactly equals `round_currency(total)`.
#[must_use]
pub fn allocate_equal(total: Decimal, count: usize) -> Vec<Decimal> {
    if count == 0 {
        return vec![];
    }

    let total = round_currency(total);
    if count == 1 {
        return vec![total];
    }

    let count_dec = Decimal::from(count as u64);
    let base = (total / count_dec).round_dp_with_strategy(2, RoundingStrategy::ToZero);
    let remainder = total - base * count_dec;

    let extra_cents = (remainder / CENT)
        .round_dp_with_strategy(0, RoundingStrategy::ToZero)
        .to_u64()
        .unwrap_or(0);
    let extra_cents = usize::try_from(extra_cents).unwrap_or(0);

    (0..count)
        .map(|i| if i < extra_cents { base + CENT } else { base })
        .collect()
}
