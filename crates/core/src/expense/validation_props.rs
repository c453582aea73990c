//! Property-based tests for split validation and payer assignment.

use proptest::prelude::*;
use rust_decimal::Decimal;
use tabsplit_shared::types::{GroupId, ParticipantId, TOLERANCE};

use super::builder::ExpenseBuilder;
use super::error::ExpenseError;
use super::types::ParticipantSplit;
use super::validation::validate_splits;

/// Strategy for a non-negative owed amount in cents (0.00 to 10,000.00).
fn owed_amount() -> impl Strategy<Value = Decimal> {
    (0i64..=1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for a list of owed amounts, one per participant.
fn owed_amounts() -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec(owed_amount(), 1..=8)
}

/// Builds splits where the first participant paid the whole owed sum.
fn balanced_splits(owed: &[Decimal]) -> Vec<ParticipantSplit> {
    let total: Decimal = owed.iter().copied().sum();
    owed.iter()
        .enumerate()
        .map(|(i, &share)| ParticipantSplit {
            id: ParticipantId::new(i64::try_from(i).unwrap() + 1),
            name: format!("user-{i}"),
            paid: if i == 0 { total } else { Decimal::ZERO },
            owed: share,
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// For any exactly-balanced non-empty split set, validation returns the
    /// owed sum.
    #[test]
    fn prop_balanced_splits_validate_to_owed_sum(owed in owed_amounts()) {
        let splits = balanced_splits(&owed);
        let expected: Decimal = owed.iter().copied().sum();

        prop_assert_eq!(validate_splits(&splits), Ok(expected));
    }

    /// Any discrepancy strictly greater than the tolerance is rejected.
    #[test]
    fn prop_discrepancy_beyond_tolerance_rejected(
        owed in owed_amounts(),
        excess_cents in 2i64..=10_000i64,
    ) {
        let mut splits = balanced_splits(&owed);
        splits[0].paid += Decimal::new(excess_cents, 2);

        let result = validate_splits(&splits);
        prop_assert!(
            matches!(result, Err(ExpenseError::Unbalanced { .. })),
            "discrepancy of {} cents should be rejected, got: {:?}",
            excess_cents,
            result
        );
    }

    /// Rounding dust within the tolerance (inclusive) is accepted, and the
    /// owed sum is still the canonical total.
    #[test]
    fn prop_discrepancy_within_tolerance_accepted(
        owed in owed_amounts(),
        dust_cents in 0i64..=1i64,
    ) {
        let mut splits = balanced_splits(&owed);
        splits[0].paid += Decimal::new(dust_cents, 2);
        let expected: Decimal = owed.iter().copied().sum();

        prop_assert_eq!(validate_splits(&splits), Ok(expected));
        prop_assert!(Decimal::new(dust_cents, 2) <= TOLERANCE);
    }

    /// The validated total is invariant under split-order permutation.
    #[test]
    fn prop_validation_order_independent(owed in owed_amounts()) {
        let splits = balanced_splits(&owed);
        let mut reversed = splits.clone();
        reversed.reverse();

        prop_assert_eq!(validate_splits(&splits), validate_splits(&reversed));
    }

    /// The builder assigns the full cost to exactly one participant and
    /// zero to all others, whatever the individual paid fields say.
    #[test]
    fn prop_builder_single_payer(
        owed in owed_amounts(),
        extra_payer in 0usize..8,
    ) {
        let mut splits = balanced_splits(&owed);
        // Mark a second, arbitrary participant as having paid too.
        let idx = extra_payer % splits.len();
        splits[idx].paid += Decimal::ONE;

        let total: Decimal = splits.iter().map(|s| s.paid).sum();
        prop_assume!(total > Decimal::ZERO);

        let payload = ExpenseBuilder::new()
            .build(GroupId::new(1), total, "prop", &splits, None)
            .unwrap();

        let nonzero: Vec<_> = payload
            .shares
            .iter()
            .filter(|s| s.paid_share > Decimal::ZERO)
            .collect();
        prop_assert_eq!(nonzero.len(), 1, "exactly one payer expected");
        prop_assert_eq!(nonzero[0].paid_share, payload.cost);
    }
}
