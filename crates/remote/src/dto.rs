//! Wire DTOs for the remote expense ledger.
//!
//! Monetary amounts travel as canonical 2-decimal-place strings; the remote
//! service rejects float-ish payloads.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tabsplit_core::expense::ExpensePayload;
use tabsplit_core::remote::{Group, GroupSummary, MemberDirectory};
use tabsplit_shared::types::{ExpenseId, GroupId, ParticipantId, format_currency};

/// Envelope for a single-group response.
#[derive(Debug, Deserialize)]
pub struct GroupEnvelopeDto {
    /// The requested group, absent when it does not exist.
    pub group: Option<GroupDto>,
}

/// Envelope for the group-listing response.
#[derive(Debug, Deserialize)]
pub struct GroupsEnvelopeDto {
    /// All groups visible to the authenticated user.
    #[serde(default)]
    pub groups: Vec<GroupDto>,
}

/// A group as the remote ledger describes it.
#[derive(Debug, Deserialize)]
pub struct GroupDto {
    /// Remote group identifier.
    pub id: i64,
    /// Group display name.
    pub name: String,
    /// Group members.
    #[serde(default)]
    pub members: Vec<MemberDto>,
}

/// A group member as the remote ledger describes it.
#[derive(Debug, Deserialize)]
pub struct MemberDto {
    /// Remote participant identifier.
    pub id: i64,
    /// Member first name, used as the display key.
    pub first_name: String,
}

impl GroupDto {
    /// Converts into the domain group with a name-keyed member directory.
    #[must_use]
    pub fn into_group(self) -> Group {
        let members: MemberDirectory = self
            .members
            .into_iter()
            .map(|m| (m.first_name, ParticipantId::new(m.id)))
            .collect();
        Group {
            id: GroupId::new(self.id),
            name: self.name,
            members,
        }
    }

    /// Converts into a listing summary.
    #[must_use]
    pub fn into_summary(self) -> (GroupId, GroupSummary) {
        (
            GroupId::new(self.id),
            GroupSummary {
                name: self.name,
                member_count: self.members.len(),
            },
        )
    }
}

/// Request body for expense creation.
#[derive(Debug, Serialize)]
pub struct CreateExpenseDto {
    /// Target group identifier.
    pub group_id: i64,
    /// Total cost as a 2-decimal-place string.
    pub cost: String,
    /// Expense description.
    pub description: String,
    /// Per-participant shares.
    pub users: Vec<ExpenseUserDto>,
}

/// One participant's share inside an expense-creation request.
#[derive(Debug, Serialize)]
pub struct ExpenseUserDto {
    /// Remote participant identifier.
    pub user_id: i64,
    /// Paid share as a 2-decimal-place string.
    pub paid_share: String,
    /// Owed share as a 2-decimal-place string.
    pub owed_share: String,
}

impl CreateExpenseDto {
    /// Builds the wire request from an assembled payload.
    #[must_use]
    pub fn from_payload(payload: &ExpensePayload) -> Self {
        Self {
            group_id: payload.group_id.into_inner(),
            cost: format_currency(payload.cost),
            description: payload.description.clone(),
            users: payload
                .shares
                .iter()
                .map(|share| ExpenseUserDto {
                    user_id: share.participant_id.into_inner(),
                    paid_share: format_currency(share.paid_share),
                    owed_share: format_currency(share.owed_share),
                })
                .collect(),
        }
    }
}

/// Response body for expense creation.
#[derive(Debug, Deserialize)]
pub struct CreateExpenseResponseDto {
    /// The created expense, when the remote accepted it.
    pub expense: Option<CreatedExpenseDto>,
    /// Business errors, when the remote rejected it.
    pub errors: Option<ExpenseErrorsDto>,
}

/// Identifier envelope for a created expense.
#[derive(Debug, Deserialize)]
pub struct CreatedExpenseDto {
    /// The assigned expense identifier.
    pub id: i64,
}

/// Error collection attached to a rejected expense.
#[derive(Debug, Deserialize)]
pub struct ExpenseErrorsDto {
    /// Error messages, keyed as `base` by the remote service.
    #[serde(default)]
    pub base: Vec<String>,
}

impl CreateExpenseResponseDto {
    /// Returns the expense id when the response reports success.
    #[must_use]
    pub fn expense_id(&self) -> Option<ExpenseId> {
        self.expense.as_ref().map(|e| ExpenseId::new(e.id))
    }

    /// Returns the rejection messages, empty when the response reports
    /// success.
    #[must_use]
    pub fn error_messages(&self) -> Vec<String> {
        self.errors
            .as_ref()
            .map(|e| e.base.clone())
            .unwrap_or_default()
    }
}

/// Converts a listing response into the domain summary map.
#[must_use]
pub fn groups_to_summaries(envelope: GroupsEnvelopeDto) -> BTreeMap<GroupId, GroupSummary> {
    envelope
        .groups
        .into_iter()
        .map(GroupDto::into_summary)
        .collect()
}
