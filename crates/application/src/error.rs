//! Application error types

use gradely_domain::{BackendError, DomainError, StatusCode};
use thiserror::Error;

use crate::ports::{StoreError, TransportError};

/// Message shown when an upload exceeds the server's size limit.
pub const PAYLOAD_TOO_LARGE_MESSAGE: &str = "File too large (max ~10 MB).";

/// Message shown when the backend could not be reached.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error: could not reach the server.";

/// Message shown when nothing more specific is known.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// No response was received.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The backend answered with a non-success status.
    #[error("request failed with status {status}")]
    Status {
        /// Response status
        status: StatusCode,
        /// Decoded error body
        body: BackendError,
    },

    /// A success body did not have the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// The credential store failed.
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),

    /// A request could not be built.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),
}

impl ApplicationError {
    /// Returns the HTTP status for backend errors.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the backend answered 401.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status().is_some_and(|status| status.is_unauthorized())
    }

    /// Returns the decoded backend error body, if any.
    #[must_use]
    pub const fn backend_error(&self) -> Option<&BackendError> {
        match self {
            Self::Status { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Human-readable message for display.
    ///
    /// Fallback order: payload-too-large, the `detail` string, flattened
    /// field messages, the transport-level message, then a generic text.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { status, .. } if *status == StatusCode::PAYLOAD_TOO_LARGE => {
                PAYLOAD_TOO_LARGE_MESSAGE.to_string()
            }
            Self::Status { status, body } => body
                .message()
                .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16())),
            Self::Transport(_) => NETWORK_ERROR_MESSAGE.to_string(),
            Self::Decode(_) | Self::Storage(_) | Self::Domain(_) => {
                GENERIC_ERROR_MESSAGE.to_string()
            }
        }
    }
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
