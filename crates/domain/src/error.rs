//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur while building or decoding API values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required header name is invalid.
    #[error("invalid header name: {0}")]
    InvalidHeaderName(String),

    /// A required header value is invalid.
    #[error("invalid header value: {0}")]
    InvalidHeaderValue(String),

    /// The HTTP method is not supported.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// The request body could not be encoded.
    #[error("invalid body: {0}")]
    InvalidBody(String),

    /// A response body did not match the expected shape.
    #[error("invalid response body: {0}")]
    InvalidResponse(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
