//! The remote expense-ledger capability contract.
//!
//! The core never talks HTTP itself; it consumes the external
//! expense-sharing service of record through this narrow trait. The
//! `tabsplit-remote` crate provides the production implementation.

pub mod error;
pub mod types;

use std::collections::BTreeMap;

use tabsplit_shared::types::GroupId;

use crate::expense::ExpensePayload;
pub use error::RemoteLedgerError;
pub use types::{Group, GroupSummary, MemberDirectory, SubmitOutcome};

/// The remote expense-sharing service of record.
///
/// Implementations own transport concerns entirely: authentication,
/// timeouts, and retry policy. The core treats every method as a single
/// call with an internal policy it does not control.
pub trait RemoteLedger: Send + Sync {
    /// Fetches a group by its remote identifier.
    fn lookup_group(
        &self,
        id: GroupId,
    ) -> impl std::future::Future<Output = Result<Group, RemoteLedgerError>> + Send;

    /// Fetches the member directory (display name to participant id) for a
    /// group.
    fn list_members(
        &self,
        id: GroupId,
    ) -> impl std::future::Future<Output = Result<MemberDirectory, RemoteLedgerError>> + Send;

    /// Submits an assembled expense payload.
    ///
    /// A remote business rejection is a successful call that returns
    /// [`SubmitOutcome::Rejected`]; only transport-level problems surface
    /// as errors.
    fn submit_expense(
        &self,
        payload: &ExpensePayload,
    ) -> impl std::future::Future<Output = Result<SubmitOutcome, RemoteLedgerError>> + Send;

    /// Lists all groups the authenticated user belongs to.
    fn list_groups(
        &self,
    ) -> impl std::future::Future<Output = Result<BTreeMap<GroupId, GroupSummary>, RemoteLedgerError>>
    + Send;
}
