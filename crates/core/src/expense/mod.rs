//! Expense-split validation and submission logic.
//!
//! This module implements the arithmetic engine that ensures money balances
//! across participants before an expense reaches the remote ledger:
//! - Split validation (sum paid == sum owed within tolerance)
//! - Equal-share allocation for drafting splits from a receipt
//! - Payer assignment policy and payload construction
//! - Error types for expense operations
//! - The expense service orchestrating validate, build, submit, cleanup

pub mod allocation;
pub mod builder;
pub mod error;
pub mod service;
pub mod types;
pub mod validation;

#[cfg(test)]
mod validation_props;

pub use allocation::allocate_equal;
pub use builder::ExpenseBuilder;
pub use error::ExpenseError;
pub use service::{ExpenseService, draft_even_splits};
pub use types::{
    ExpenseOutcome, ExpensePayload, ExpenseRequest, ParticipantSplit, PayerPolicy, ShareAssignment,
};
pub use validation::validate_splits;
