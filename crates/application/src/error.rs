//! Application error types

use pindrop_domain::DomainError;
use thiserror::Error;

use crate::ports::{StorageError, TransportError};

/// Failure of a call made through the authenticated pipeline.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server rejected the session (401 on a non-login call). The
    /// session store has already been cleared.
    #[error("session expired, please log in again")]
    AuthenticationExpired,

    /// Any other non-2xx response.
    #[error(
        "request failed with status {status}: {}",
        .detail.as_deref().unwrap_or("no detail provided")
    )]
    RequestFailed {
        /// HTTP status code.
        status: u16,
        /// Server-supplied human-readable detail.
        detail: Option<String>,
    },

    /// No response was received.
    #[error("network unavailable: {0}")]
    NetworkUnavailable(#[from] TransportError),

    /// A 2xx body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// The request could not be built.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] DomainError),

    /// The session could not be persisted.
    #[error("session error: {0}")]
    Session(#[from] SessionError),
}

impl ApiError {
    /// HTTP status of a failed response, if one was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => Some(*status),
            Self::AuthenticationExpired => Some(pindrop_domain::response::UNAUTHORIZED),
            _ => None,
        }
    }

    /// Returns true if the server answered 404.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::RequestFailed {
                status: pindrop_domain::response::NOT_FOUND,
                ..
            }
        )
    }

    /// Returns true for an expired session.
    #[must_use]
    pub const fn is_authentication_expired(&self) -> bool {
        matches!(self, Self::AuthenticationExpired)
    }

    /// Message to show the user: the server's detail when present,
    /// otherwise `fallback`.
    #[must_use]
    pub fn detail_or(&self, fallback: &str) -> String {
        match self {
            Self::RequestFailed {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Failure to persist or clear the session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Durable storage failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// The user record could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for pipeline calls.
pub type ApiResult<T> = Result<T, ApiError>;
