//! Reqwest-backed remote-ledger adapter.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::{debug, info};
use url::Url;

use tabsplit_core::expense::ExpensePayload;
use tabsplit_core::remote::{
    Group, GroupSummary, MemberDirectory, RemoteLedger, RemoteLedgerError, SubmitOutcome,
};
use tabsplit_shared::config::LedgerConfig;
use tabsplit_shared::types::GroupId;

use crate::dto::{
    CreateExpenseDto, CreateExpenseResponseDto, GroupEnvelopeDto, GroupsEnvelopeDto,
    groups_to_summaries,
};

/// Remote-ledger adapter performing authenticated HTTP requests against the
/// expense-sharing service.
pub struct LedgerHttpClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl LedgerHttpClient {
    /// Builds an adapter from ledger configuration.
    ///
    /// # Errors
    ///
    /// Returns a transport error when the base URL is invalid or the HTTP
    /// client cannot be constructed.
    pub fn from_config(config: &LedgerConfig) -> Result<Self, RemoteLedgerError> {
        // A trailing slash keeps Url::join from eating the last path segment.
        let mut base = config.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)
            .map_err(|err| RemoteLedgerError::Transport(format!("invalid base url: {err}")))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| RemoteLedgerError::Transport(err.to_string()))?;

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, RemoteLedgerError> {
        self.base_url
            .join(path)
            .map_err(|err| RemoteLedgerError::Transport(format!("invalid endpoint: {err}")))
    }

    async fn fetch_group(&self, id: GroupId) -> Result<Group, RemoteLedgerError> {
        let url = self.endpoint(&format!("get_group/{id}"))?;
        debug!(%id, "fetching group");

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(RemoteLedgerError::GroupNotFound(id));
        }
        check_status(status)?;

        let envelope: GroupEnvelopeDto = response
            .json()
            .await
            .map_err(|err| RemoteLedgerError::InvalidResponse(err.to_string()))?;

        envelope
            .group
            .map(crate::dto::GroupDto::into_group)
            .ok_or(RemoteLedgerError::GroupNotFound(id))
    }
}

impl RemoteLedger for LedgerHttpClient {
    async fn lookup_group(&self, id: GroupId) -> Result<Group, RemoteLedgerError> {
        self.fetch_group(id).await
    }

    async fn list_members(&self, id: GroupId) -> Result<MemberDirectory, RemoteLedgerError> {
        let group = self.fetch_group(id).await?;
        info!(%id, members = group.members.len(), "retrieved group members");
        Ok(group.members)
    }

    async fn submit_expense(
        &self,
        payload: &ExpensePayload,
    ) -> Result<SubmitOutcome, RemoteLedgerError> {
        let url = self.endpoint("create_expense")?;
        let dto = CreateExpenseDto::from_payload(payload);
        info!(group = %payload.group_id, cost = %dto.cost, "submitting expense");

        let request = self.client.post(url).bearer_auth(&self.api_key);

        // Attach the receipt image as a multipart upload when present;
        // otherwise a plain JSON body suffices.
        let sent = if let Some(receipt) = &payload.receipt {
            let bytes = tokio::fs::read(receipt)
                .await
                .map_err(|err| RemoteLedgerError::Transport(format!("receipt read: {err}")))?;
            let filename = receipt
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "receipt".to_string());

            let body = serde_json::to_string(&dto)
                .map_err(|err| RemoteLedgerError::Transport(err.to_string()))?;
            let form = reqwest::multipart::Form::new()
                .text("json", body)
                .part("receipt", reqwest::multipart::Part::bytes(bytes).file_name(filename));

            request.multipart(form).send().await
        } else {
            request.json(&dto).send().await
        };
        let response = sent.map_err(map_transport_error)?;

        check_status(response.status())?;

        let decoded: CreateExpenseResponseDto = response
            .json()
            .await
            .map_err(|err| RemoteLedgerError::InvalidResponse(err.to_string()))?;

        let errors = decoded.error_messages();
        if !errors.is_empty() {
            return Ok(SubmitOutcome::Rejected(errors));
        }
        decoded.expense_id().map(SubmitOutcome::Created).ok_or_else(|| {
            RemoteLedgerError::InvalidResponse(
                "response carried neither an expense id nor errors".to_string(),
            )
        })
    }

    async fn list_groups(&self) -> Result<BTreeMap<GroupId, GroupSummary>, RemoteLedgerError> {
        let url = self.endpoint("get_groups")?;
        debug!("fetching groups");

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(map_transport_error)?;

        check_status(response.status())?;

        let envelope: GroupsEnvelopeDto = response
            .json()
            .await
            .map_err(|err| RemoteLedgerError::InvalidResponse(err.to_string()))?;

        let summaries = groups_to_summaries(envelope);
        info!(groups = summaries.len(), "retrieved groups");
        Ok(summaries)
    }
}

fn map_transport_error(err: reqwest::Error) -> RemoteLedgerError {
    RemoteLedgerError::Transport(err.to_string())
}

fn check_status(status: StatusCode) -> Result<(), RemoteLedgerError> {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(RemoteLedgerError::Unauthorized(status.to_string()));
    }
    if !status.is_success() {
        return Err(RemoteLedgerError::Transport(format!(
            "unexpected status: {status}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn config(base_url: &str) -> LedgerConfig {
        LedgerConfig {
            base_url: base_url.to_string(),
            api_key: "secret".to_string(),
            timeout_secs: 5,
        }
    }

    #[test]
    fn test_from_config_rejects_invalid_url() {
        let result = LedgerHttpClient::from_config(&config("not a url"));
        assert!(matches!(result, Err(RemoteLedgerError::Transport(_))));
    }

    #[test]
    fn test_endpoint_joins_under_base_path() {
        let client =
            LedgerHttpClient::from_config(&config("https://ledger.example.com/api/v3")).unwrap();
        let url = client.endpoint("get_group/9").unwrap();
        assert_eq!(url.as_str(), "https://ledger.example.com/api/v3/get_group/9");
    }

    #[rstest]
    #[case(StatusCode::OK)]
    #[case(StatusCode::CREATED)]
    fn test_success_statuses_pass(#[case] status: StatusCode) {
        assert!(check_status(status).is_ok());
    }

    #[rstest]
    #[case(StatusCode::UNAUTHORIZED)]
    #[case(StatusCode::FORBIDDEN)]
    fn test_auth_failures_map_to_unauthorized(#[case] status: StatusCode) {
        assert!(matches!(
            check_status(status),
            Err(RemoteLedgerError::Unauthorized(_))
        ));
    }

    #[rstest]
    #[case(StatusCode::INTERNAL_SERVER_ERROR)]
    #[case(StatusCode::BAD_GATEWAY)]
    #[case(StatusCode::TOO_MANY_REQUESTS)]
    fn test_other_failures_map_to_transport(#[case] status: StatusCode) {
        assert!(matches!(
            check_status(status),
            Err(RemoteLedgerError::Transport(_))
        ));
    }
}
