//! Domain types for expense creation.

use std::path::PathBuf;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tabsplit_shared::types::{ExpenseId, GroupId, ParticipantId};

/// One participant's (paid, owed) pair within a single expense.
///
/// Request-scoped: created from caller input, consumed exactly once by the
/// validator then the builder, discarded after submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantSplit {
    /// Remote-ledger participant identifier.
    pub id: ParticipantId,
    /// Display name, used for audit logging only.
    pub name: String,
    /// Amount this participant actually paid. Non-negative.
    pub paid: Decimal,
    /// Amount this participant is responsible for. Non-negative.
    pub owed: Decimal,
}

/// A caller-assembled request to create a shared expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseRequest {
    /// Human-readable expense description. Must be non-empty.
    pub description: String,
    /// Informational payer hint; the real payer is derived from `paid > 0`.
    pub payer: ParticipantId,
    /// Caller-expected total. May be stale or unrounded; the validated owed
    /// sum is authoritative.
    pub total_amount: Decimal,
    /// Tax portion, already folded into the splits.
    pub tax: Decimal,
    /// Per-participant splits. Order is preserved for audit logging and
    /// payer selection.
    pub user_splits: Vec<ParticipantSplit>,
    /// Remote group to post the expense into.
    pub group_id: GroupId,
    /// Transient receipt image artifact, if one was uploaded.
    pub receipt_path: Option<PathBuf>,
}

/// A participant's post-policy share inside the remote payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareAssignment {
    /// Remote-ledger participant identifier.
    pub participant_id: ParticipantId,
    /// Paid share after payer assignment: the full cost for the payer,
    /// exactly zero for everyone else.
    pub paid_share: Decimal,
    /// Owed share, copied verbatim from the split.
    pub owed_share: Decimal,
}

/// The assembled expense submission for the remote ledger.
#[derive(Debug, Clone, Serialize)]
pub struct ExpensePayload {
    /// Target group.
    pub group_id: GroupId,
    /// Total cost, rounded to 2 decimal places.
    pub cost: Decimal,
    /// Expense description.
    pub description: String,
    /// Per-participant share assignments.
    pub shares: Vec<ShareAssignment>,
    /// Resolvable receipt image to attach, if any.
    pub receipt: Option<PathBuf>,
}

/// The reported result of an expense submission.
///
/// Remote rejection is a completed operation that produced no identifier,
/// not a fault; the caller decides how to surface it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseOutcome {
    /// The remote ledger accepted the expense and assigned an identifier.
    Created(ExpenseId),
    /// The remote ledger rejected the expense, or the submission failed in
    /// transit. Always carries at least one error message.
    Rejected(Vec<String>),
}

impl ExpenseOutcome {
    /// Returns the remote expense identifier, if the expense was created.
    #[must_use]
    pub const fn expense_id(&self) -> Option<ExpenseId> {
        match self {
            Self::Created(id) => Some(*id),
            Self::Rejected(_) => None,
        }
    }

    /// Returns the rejection messages, empty on success.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        match self {
            Self::Created(_) => &[],
            Self::Rejected(errors) => errors,
        }
    }
}

/// Policy governing how multiple non-zero payers are handled.
///
/// The remote ledger model used here supports a single payer per expense,
/// so the first participant with `paid > 0` absorbs the whole amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayerPolicy {
    /// Later non-zero payers are zeroed with a logged warning.
    #[default]
    FirstPayerWins,
    /// A second non-zero payer is rejected as invalid input.
    Strict,
}
