//! Expense error types for validation and precondition failures.
//!
//! Every precondition violation is a distinct variant so callers can tell
//! "your split doesn't balance" (client-side fixable) apart from a missing
//! field. Remote-side failures never appear here; they are reported through
//! [`super::types::ExpenseOutcome::Rejected`].

use rust_decimal::Decimal;
use tabsplit_shared::error::AppError;
use tabsplit_shared::types::ParticipantId;
use thiserror::Error;

/// Errors detected locally, before any remote call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExpenseError {
    /// No participant splits were provided.
    #[error("At least one participant split is required")]
    NoSplits,

    /// The group identifier is missing or not a valid remote id.
    #[error("A valid group id is required")]
    InvalidGroup,

    /// Total amount must be strictly positive.
    #[error("Total amount must be greater than zero, got {0}")]
    NonPositiveAmount(Decimal),

    /// The expense description is empty.
    #[error("Expense description is required")]
    EmptyDescription,

    /// A participant carries a negative paid or owed amount.
    #[error("Participant {participant} has a negative paid or owed amount")]
    NegativeShare {
        /// The offending participant.
        participant: ParticipantId,
    },

    /// The ledger does not balance: sum(paid) and sum(owed) disagree by
    /// more than the tolerance.
    #[error("Expense splits don't balance: paid {paid} != owed {owed}")]
    Unbalanced {
        /// Total amount paid across all participants.
        paid: Decimal,
        /// Total amount owed across all participants.
        owed: Decimal,
    },

    /// More than one participant has `paid > 0` under the strict policy.
    #[error("Multiple payers found; this expense model supports a single payer")]
    MultiplePayers,

    /// No participant has `paid > 0`, so no payer can be assigned.
    #[error("No payer found: at least one participant must have paid > 0")]
    NoPayer,
}

impl ExpenseError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NoSplits => "NO_SPLITS",
            Self::InvalidGroup => "INVALID_GROUP",
            Self::NonPositiveAmount(_) => "NON_POSITIVE_AMOUNT",
            Self::EmptyDescription => "EMPTY_DESCRIPTION",
            Self::NegativeShare { .. } => "NEGATIVE_SHARE",
            Self::Unbalanced { .. } => "UNBALANCED_SPLITS",
            Self::MultiplePayers => "MULTIPLE_PAYERS",
            Self::NoPayer => "NO_PAYER",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            // 422 Unprocessable Entity - the request is well-formed but the
            // arithmetic does not hold
            Self::Unbalanced { .. } => 422,

            // 400 Bad Request - invalid input, rejected before any remote call
            Self::NoSplits
            | Self::InvalidGroup
            | Self::NonPositiveAmount(_)
            | Self::EmptyDescription
            | Self::NegativeShare { .. }
            | Self::MultiplePayers
            | Self::NoPayer => 400,
        }
    }

    /// Returns the paid/owed discrepancy for unbalanced splits, for logging.
    #[must_use]
    pub fn discrepancy(&self) -> Option<Decimal> {
        match self {
            Self::Unbalanced { paid, owed } => Some((*paid - *owed).abs()),
            _ => None,
        }
    }
}

impl From<ExpenseError> for AppError {
    fn from(err: ExpenseError) -> Self {
        match err {
            ExpenseError::Unbalanced { .. } => Self::BusinessRule(err.to_string()),
            _ => Self::Validation(err.to_string()),
        }
    }
}
