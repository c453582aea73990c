//! Expense payload construction and payer assignment.

use std::path::PathBuf;

use rust_decimal::Decimal;
use tabsplit_shared::types::{GroupId, round_currency};
use tracing::{debug, info, warn};

use super::error::ExpenseError;
use super::types::{ExpensePayload, ParticipantSplit, PayerPolicy, ShareAssignment};

/// Builds remote expense payloads under a payer-assignment policy.
///
/// The remote ledger model used here supports a single payer: the first
/// participant with `paid > 0` (in split order) is assigned the full cost,
/// and every other paid share is forced to exactly zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpenseBuilder {
    policy: PayerPolicy,
}

impl ExpenseBuilder {
    /// Creates a builder with the default `FirstPayerWins` policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder with an explicit payer policy.
    #[must_use]
    pub const fn with_policy(policy: PayerPolicy) -> Self {
        Self { policy }
    }

    /// Assembles the remote expense payload.
    ///
    /// Preconditions, each a distinct invalid-input failure:
    /// - `group_id` must be a positive remote identifier
    /// - `total_amount` must be strictly positive
    /// - `description` must be non-empty
    /// - `splits` must be non-empty
    ///
    /// Receipt handling: a supplied, resolvable receipt is attached; a
    /// supplied but missing receipt is dropped with a warning rather than
    /// failing the operation.
    ///
    /// # Errors
    ///
    /// Returns an error on any precondition violation, when no participant
    /// paid anything, or when a second payer is found under the `Strict`
    /// policy.
    pub fn build(
        &self,
        group_id: GroupId,
        total_amount: Decimal,
        description: &str,
        splits: &[ParticipantSplit],
        receipt: Option<PathBuf>,
    ) -> Result<ExpensePayload, ExpenseError> {
        if group_id.into_inner() <= 0 {
            return Err(ExpenseError::InvalidGroup);
        }
        if total_amount <= Decimal::ZERO {
            return Err(ExpenseError::NonPositiveAmount(total_amount));
        }
        if description.trim().is_empty() {
            return Err(ExpenseError::EmptyDescription);
        }
        if splits.is_empty() {
            return Err(ExpenseError::NoSplits);
        }

        let cost = round_currency(total_amount);
        info!(%group_id, %cost, description, "building expense payload");

        let mut shares = Vec::with_capacity(splits.len());
        let mut payer_found = false;

        for split in splits {
            let paid_share = if split.paid > Decimal::ZERO {
                if payer_found {
                    match self.policy {
                        PayerPolicy::FirstPayerWins => {
                            warn!(
                                participant = %split.id,
                                "multiple payers found, using the first one"
                            );
                            Decimal::ZERO
                        }
                        PayerPolicy::Strict => return Err(ExpenseError::MultiplePayers),
                    }
                } else {
                    payer_found = true;
                    debug!(participant = %split.id, name = %split.name, %cost, "payer assigned");
                    cost
                }
            } else {
                Decimal::ZERO
            };

            shares.push(ShareAssignment {
                participant_id: split.id,
                paid_share,
                owed_share: split.owed,
            });
        }

        if !payer_found {
            return Err(ExpenseError::NoPayer);
        }

        let receipt = match receipt {
            Some(path) if path.exists() => {
                info!(receipt = %path.display(), "attaching receipt");
                Some(path)
            }
            Some(path) => {
                warn!(receipt = %path.display(), "receipt file not found, submitting without it");
                None
            }
            None => None,
        };

        Ok(ExpensePayload {
            group_id,
            cost,
            description: description.to_string(),
            shares,
            receipt,
        })
    }
}
