//! Error type for the REST client.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// The server answered with a non-success status. `message` carries the
    /// server's `message` field when the body had one.
    #[error("{message} (status {status})")]
    Status { status: StatusCode, message: String },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("failed to decode server response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ApiError {
    #[must_use]
    pub fn status(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Server-provided message, when the failure carried one.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => Some(message),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            ApiError::Status { status, .. } if *status == StatusCode::UNAUTHORIZED
        )
    }
}
