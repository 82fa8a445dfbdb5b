//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur while parsing input or building requests.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The role tag is not one of the marketplace roles.
    #[error("unknown role: {0}")]
    UnknownRole(String),

    /// The payment mode is not offered at checkout.
    #[error("unknown payment mode: {0}")]
    UnknownPaymentMode(String),

    /// The request body could not be encoded as JSON.
    #[error("invalid body: {0}")]
    InvalidBody(String),

    /// Query parameters could not be encoded.
    #[error("invalid query parameters: {0}")]
    InvalidQuery(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
