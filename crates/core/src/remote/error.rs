//! Error types for the remote-ledger capability.

use tabsplit_shared::error::AppError;
use tabsplit_shared::types::GroupId;
use thiserror::Error;

/// Errors surfaced by remote-ledger implementations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RemoteLedgerError {
    /// The requested group does not exist on the remote side.
    #[error("Group not found: {0}")]
    GroupNotFound(GroupId),

    /// The remote service refused the credentials.
    #[error("Remote ledger rejected credentials: {0}")]
    Unauthorized(String),

    /// Connectivity, timeout, or other transport-level failure.
    #[error("Remote ledger transport failure: {0}")]
    Transport(String),

    /// The remote response could not be decoded.
    #[error("Invalid remote ledger response: {0}")]
    InvalidResponse(String),
}

impl RemoteLedgerError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::GroupNotFound(_) => "GROUP_NOT_FOUND",
            Self::Unauthorized(_) => "REMOTE_UNAUTHORIZED",
            Self::Transport(_) => "REMOTE_TRANSPORT_FAILURE",
            Self::InvalidResponse(_) => "REMOTE_INVALID_RESPONSE",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::GroupNotFound(_) => 404,
            Self::Unauthorized(_) | Self::Transport(_) | Self::InvalidResponse(_) => 500,
        }
    }

    /// Returns true if retrying the call might succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

impl From<RemoteLedgerError> for AppError {
    fn from(err: RemoteLedgerError) -> Self {
        match err {
            RemoteLedgerError::GroupNotFound(_) => Self::NotFound(err.to_string()),
            _ => Self::ExternalService(err.to_string()),
        }
    }
}
