//! Balance validation for participant splits.

use rust_decimal::Decimal;
use tabsplit_shared::types::within_tolerance;
use tracing::{error, info};

use super::error::ExpenseError;
use super::types::ParticipantSplit;

/// Validates that a set of participant splits balances.
///
/// Sums all `paid` and all `owed` values with exact decimal arithmetic and
/// compares the totals against the 0.01 currency-unit tolerance. Money must
/// not appear or vanish across the split.
///
/// On success, returns the sum of `owed` as the canonical total. This is
/// the authoritative amount submitted to the remote ledger, not the
/// caller-supplied total, which may be stale or unrounded.
///
/// Emits an audit-trail log line for each participant with non-zero paid or
/// owed. Observability only; no state is mutated.
///
/// # Errors
///
/// Returns an error if the splits are empty, carry negative amounts, or do
/// not balance within tolerance.
pub fn validate_splits(splits: &[ParticipantSplit]) -> Result<Decimal, ExpenseError> {
    if splits.is_empty() {
        error!("no splits provided for validation");
        return Err(ExpenseError::NoSplits);
    }

    let mut total_paid = Decimal::ZERO;
    let mut total_owed = Decimal::ZERO;

    for split in splits {
        if split.paid.is_sign_negative() || split.owed.is_sign_negative() {
            error!(participant = %split.id, "negative paid or owed amount");
            return Err(ExpenseError::NegativeShare {
                participant: split.id,
            });
        }
        total_paid += split.paid;
        total_owed += split.owed;
    }

    info!(%total_paid, %total_owed, "validating expense splits");

    if !within_tolerance(total_paid, total_owed) {
        error!(
            %total_paid,
            %total_owed,
            discrepancy = %(total_paid - total_owed).abs(),
            "expense splits don't balance"
        );
        return Err(ExpenseError::Unbalanced {
            paid: total_paid,
            owed: total_owed,
        });
    }

    // Audit trail for every participant that actually moves money.
    for split in splits {
        if split.paid > Decimal::ZERO || split.owed > Decimal::ZERO {
            info!(
                participant = %split.id,
                name = %split.name,
                paid = %split.paid,
                owed = %split.owed,
                "split breakdown"
            );
        }
    }

    Ok(total_owed)
}
