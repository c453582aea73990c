//! Expense service orchestrating validation, payload construction,
//! submission, and receipt cleanup.

use std::collections::BTreeMap;
use std::sync::Arc;

use rust_decimal::Decimal;
use tabsplit_shared::types::{GroupId, ParticipantId, round_currency};
use tracing::{error, info};

use super::allocation::allocate_equal;
use super::builder::ExpenseBuilder;
use super::error::ExpenseError;
use super::types::{ExpenseOutcome, ExpenseRequest, ParticipantSplit, PayerPolicy};
use super::validation::validate_splits;
use crate::receipt::{ReceiptArtifact, ReceiptData};
use crate::remote::{GroupSummary, MemberDirectory, RemoteLedger, RemoteLedgerError, SubmitOutcome};

/// Drives one expense request from caller input to a reported outcome.
///
/// Requests are independent and stateless; the service holds only the
/// ledger capability handle and the payer policy, so a single instance can
/// serve concurrent requests without locking.
pub struct ExpenseService<L: RemoteLedger> {
    ledger: Arc<L>,
    builder: ExpenseBuilder,
}

impl<L: RemoteLedger> ExpenseService<L> {
    /// Creates a service with the default payer policy.
    #[must_use]
    pub fn new(ledger: Arc<L>) -> Self {
        Self {
            ledger,
            builder: ExpenseBuilder::new(),
        }
    }

    /// Creates a service with an explicit payer policy.
    #[must_use]
    pub fn with_policy(ledger: Arc<L>, policy: PayerPolicy) -> Self {
        Self {
            ledger,
            builder: ExpenseBuilder::with_policy(policy),
        }
    }

    /// Validates the request and submits the expense to the remote ledger.
    ///
    /// The validated owed sum is the authoritative total, not the
    /// caller-supplied `total_amount`. Invalid input and unbalanced splits
    /// fail locally and never reach the remote ledger. Remote rejection and
    /// transport faults are normalized into [`ExpenseOutcome::Rejected`]
    /// rather than propagating; the caller always gets a structured
    /// outcome.
    ///
    /// The receipt artifact, if any, is deleted on every exit path.
    ///
    /// # Errors
    ///
    /// Returns an error only for locally-detected failures: invalid input
    /// or unbalanced splits.
    pub async fn create_expense(
        &self,
        request: ExpenseRequest,
    ) -> Result<ExpenseOutcome, ExpenseError> {
        let artifact = request.receipt_path.clone().map(ReceiptArtifact::new);

        let result = self.validate_and_submit(&request, artifact.as_ref()).await;

        // Guaranteed cleanup, regardless of which exit path was taken.
        if let Some(artifact) = artifact {
            artifact.cleanup().await;
        }

        result
    }

    async fn validate_and_submit(
        &self,
        request: &ExpenseRequest,
        artifact: Option<&ReceiptArtifact>,
    ) -> Result<ExpenseOutcome, ExpenseError> {
        let total_owed = validate_splits(&request.user_splits)?;

        let payload = self.builder.build(
            request.group_id,
            total_owed,
            &request.description,
            &request.user_splits,
            artifact.map(|a| a.path().to_path_buf()),
        )?;

        info!(group = %payload.group_id, cost = %payload.cost, "submitting expense to remote ledger");

        match self.ledger.submit_expense(&payload).await {
            Ok(SubmitOutcome::Created(id)) => {
                info!(expense = %id, "expense created");
                Ok(ExpenseOutcome::Created(id))
            }
            Ok(SubmitOutcome::Rejected(errors)) => {
                error!(?errors, "remote ledger rejected expense");
                Ok(ExpenseOutcome::Rejected(errors))
            }
            Err(err) => {
                // Transport and other unexpected remote failures are
                // reported in the same structured shape, never propagated.
                error!(%err, "expense submission failed");
                Ok(ExpenseOutcome::Rejected(vec![err.to_string()]))
            }
        }
    }

    /// Fetches the member directory for a group.
    pub async fn group_members(
        &self,
        id: GroupId,
    ) -> Result<MemberDirectory, RemoteLedgerError> {
        self.ledger.list_members(id).await
    }

    /// Lists all groups visible to the configured account.
    pub async fn groups(&self) -> Result<BTreeMap<GroupId, GroupSummary>, RemoteLedgerError> {
        self.ledger.list_groups().await
    }
}

/// Drafts an even split of a receipt across a group's members.
///
/// Each member owes an equal share of the receipt's grand total (tax folded
/// in), allocated so the shares sum exactly to the rounded total; `payer`
/// carries the full paid amount.
///
/// # Errors
///
/// Returns an error if `payer` is not in the member directory; such a draft
/// would carry no paid amount and could never be submitted.
pub fn draft_even_splits(
    receipt: &ReceiptData,
    members: &MemberDirectory,
    payer: ParticipantId,
) -> Result<Vec<ParticipantSplit>, ExpenseError> {
    if !members.values().any(|id| *id == payer) {
        error!(%payer, "payer is not in the member directory");
        return Err(ExpenseError::NoPayer);
    }

    let total = round_currency(receipt.grand_total());
    let shares = allocate_equal(total, members.len());

    Ok(members
        .iter()
        .zip(shares)
        .map(|((name, id), owed)| ParticipantSplit {
            id: *id,
            name: name.clone(),
            paid: if *id == payer { total } else { Decimal::ZERO },
            owed,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Mutex;

    use rust_decimal_macros::dec;
    use tabsplit_shared::types::ExpenseId;

    use crate::expense::types::ExpensePayload;
    use crate::receipt::ReceiptItem;
    use crate::remote::Group;

    /// Mock ledger for testing.
    struct MockLedger {
        submit_result: Mutex<Option<Result<SubmitOutcome, RemoteLedgerError>>>,
        submitted: Mutex<Vec<ExpensePayload>>,
    }

    impl MockLedger {
        fn new(result: Result<SubmitOutcome, RemoteLedgerError>) -> Self {
            Self {
                submit_result: Mutex::new(Some(result)),
                submitted: Mutex::new(Vec::new()),
            }
        }

        fn submitted(&self) -> Vec<ExpensePayload> {
            self.submitted.lock().unwrap().clone()
        }
    }

    impl RemoteLedger for MockLedger {
        async fn lookup_group(&self, id: GroupId) -> Result<Group, RemoteLedgerError> {
            Ok(Group {
                id,
                name: "Flatmates".to_string(),
                members: MemberDirectory::new(),
            })
        }

        async fn list_members(&self, _id: GroupId) -> Result<MemberDirectory, RemoteLedgerError> {
            Ok(MemberDirectory::new())
        }

        async fn submit_expense(
            &self,
            payload: &ExpensePayload,
        ) -> Result<SubmitOutcome, RemoteLedgerError> {
            self.submitted.lock().unwrap().push(payload.clone());
            self.submit_result.lock().unwrap().take().unwrap()
        }

        async fn list_groups(
            &self,
        ) -> Result<BTreeMap<GroupId, GroupSummary>, RemoteLedgerError> {
            Ok(BTreeMap::new())
        }
    }

    fn split(id: i64, paid: Decimal, owed: Decimal) -> ParticipantSplit {
        ParticipantSplit {
            id: ParticipantId::new(id),
            name: format!("user-{id}"),
            paid,
            owed,
        }
    }

    fn request(receipt_path: Option<PathBuf>) -> ExpenseRequest {
        ExpenseRequest {
            description: "Groceries".to_string(),
            payer: ParticipantId::new(1),
            // Deliberately stale: the validated owed sum (30) is
            // authoritative.
            total_amount: dec!(29.99),
            tax: dec!(2.50),
            user_splits: vec![
                split(1, dec!(30), dec!(10)),
                split(2, dec!(0), dec!(10)),
                split(3, dec!(0), dec!(10)),
            ],
            group_id: GroupId::new(9),
            receipt_path,
        }
    }

    fn temp_receipt(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, b"jpeg").unwrap();
        path
    }

    #[tokio::test]
    async fn test_create_expense_success_uses_validated_total() {
        let ledger = Arc::new(MockLedger::new(Ok(SubmitOutcome::Created(ExpenseId::new(
            555,
        )))));
        let service = ExpenseService::new(Arc::clone(&ledger));

        let outcome = service.create_expense(request(None)).await.unwrap();
        assert_eq!(outcome, ExpenseOutcome::Created(ExpenseId::new(555)));

        let submitted = ledger.submitted();
        assert_eq!(submitted.len(), 1);
        // 30 (owed sum), not the stale 29.99 from the request.
        assert_eq!(submitted[0].cost, dec!(30));
        assert_eq!(submitted[0].shares[0].paid_share, dec!(30));
    }

    #[tokio::test]
    async fn test_unbalanced_request_never_reaches_remote() {
        let ledger = Arc::new(MockLedger::new(Ok(SubmitOutcome::Created(ExpenseId::new(1)))));
        let service = ExpenseService::new(Arc::clone(&ledger));

        let mut req = request(None);
        req.user_splits[0].owed = dec!(5);

        let err = service.create_expense(req).await.unwrap_err();
        assert!(matches!(err, ExpenseError::Unbalanced { .. }));
        assert!(ledger.submitted().is_empty());
    }

    #[tokio::test]
    async fn test_remote_rejection_is_reported_not_raised() {
        let ledger = Arc::new(MockLedger::new(Ok(SubmitOutcome::Rejected(vec![
            "group is malformed".to_string(),
        ]))));
        let service = ExpenseService::new(ledger);

        let outcome = service.create_expense(request(None)).await.unwrap();
        assert_eq!(
            outcome,
            ExpenseOutcome::Rejected(vec!["group is malformed".to_string()])
        );
    }

    #[tokio::test]
    async fn test_transport_fault_normalized_and_receipt_deleted() {
        let path = temp_receipt("tabsplit-service-transport.jpg");
        let ledger = Arc::new(MockLedger::new(Err(RemoteLedgerError::Transport(
            "connection refused".to_string(),
        ))));
        let service = ExpenseService::new(ledger);

        let outcome = service
            .create_expense(request(Some(path.clone())))
            .await
            .unwrap();

        match outcome {
            ExpenseOutcome::Rejected(errors) => {
                assert_eq!(errors.len(), 1);
                assert!(errors[0].contains("connection refused"));
            }
            ExpenseOutcome::Created(_) => panic!("expected rejection"),
        }
        assert!(!path.exists(), "receipt must be cleaned up");
    }

    #[tokio::test]
    async fn test_receipt_deleted_after_success() {
        let path = temp_receipt("tabsplit-service-success.jpg");
        let ledger = Arc::new(MockLedger::new(Ok(SubmitOutcome::Created(ExpenseId::new(7)))));
        let service = ExpenseService::new(Arc::clone(&ledger));

        service
            .create_expense(request(Some(path.clone())))
            .await
            .unwrap();

        assert!(!path.exists(), "receipt must be cleaned up");
        // The payload still carried the receipt at submission time.
        assert_eq!(ledger.submitted()[0].receipt.as_deref(), Some(path.as_path()));
    }

    #[tokio::test]
    async fn test_receipt_deleted_after_validation_failure() {
        let path = temp_receipt("tabsplit-service-invalid.jpg");
        let ledger = Arc::new(MockLedger::new(Ok(SubmitOutcome::Created(ExpenseId::new(7)))));
        let service = ExpenseService::new(ledger);

        let mut req = request(Some(path.clone()));
        req.user_splits.clear();

        assert_eq!(
            service.create_expense(req).await.unwrap_err(),
            ExpenseError::NoSplits
        );
        assert!(!path.exists(), "receipt must be cleaned up");
    }

    fn pizza_receipt() -> ReceiptData {
        ReceiptData {
            items: vec![ReceiptItem {
                name: "Pizza".to_string(),
                cost: dec!(90),
            }],
            tax: dec!(10),
            total: None,
        }
    }

    fn flatmates() -> MemberDirectory {
        let mut members = MemberDirectory::new();
        members.insert("Ana".to_string(), ParticipantId::new(1));
        members.insert("Ben".to_string(), ParticipantId::new(2));
        members.insert("Cho".to_string(), ParticipantId::new(3));
        members
    }

    #[test]
    fn test_draft_even_splits() {
        let receipt = pizza_receipt();
        let members = flatmates();

        let splits = draft_even_splits(&receipt, &members, ParticipantId::new(2)).unwrap();

        assert_eq!(splits.len(), 3);
        let owed_sum: Decimal = splits.iter().map(|s| s.owed).sum();
        assert_eq!(owed_sum, dec!(100));
        let paid_sum: Decimal = splits.iter().map(|s| s.paid).sum();
        assert_eq!(paid_sum, dec!(100));
        assert!(
            splits
                .iter()
                .all(|s| s.paid.is_zero() || s.id == ParticipantId::new(2))
        );

        // Drafted splits always pass validation.
        assert_eq!(validate_splits(&splits).unwrap(), dec!(100));
    }

    #[test]
    fn test_draft_rejects_payer_outside_directory() {
        let result = draft_even_splits(&pizza_receipt(), &flatmates(), ParticipantId::new(99));
        assert_eq!(result.unwrap_err(), ExpenseError::NoPayer);
    }
}
