//! HTTP transport port

use async_trait::async_trait;
use pindrop_domain::{ApiRequest, ApiResponse};
use thiserror::Error;

/// Failures where no HTTP response was received.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The request URL could not be built.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The server could not be reached.
    #[error("server unreachable: {0}")]
    Unreachable(String),

    /// No response arrived within the configured timeout.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout {
        /// The timeout that elapsed.
        timeout_ms: u64,
    },

    /// Any other transport failure.
    #[error("{0}")]
    Other(String),
}

/// Port for sending API requests over the wire.
///
/// Implementations return every received response as `Ok`, whatever its
/// status; interpreting the status is the pipeline's job.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends `request` and returns the response.
    ///
    /// # Errors
    ///
    /// Returns an error only if no response was received.
    async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError>;
}
