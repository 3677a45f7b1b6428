//! HTTP transport port

use std::future::Future;

use gradely_domain::{ApiRequest, ApiResponse};

/// Errors raised when no HTTP response could be obtained.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request URL could not be built.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request did not complete in time.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout {
        /// Configured timeout in milliseconds
        timeout_ms: u64,
    },

    /// The host name could not be resolved.
    #[error("could not resolve host {host}: {message}")]
    DnsError {
        /// Host that failed to resolve
        host: String,
        /// Resolver message
        message: String,
    },

    /// The server refused the connection.
    #[error("connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Target host
        host: String,
        /// Target port
        port: u16,
    },

    /// The connection failed for another reason.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The redirect limit was exceeded.
    #[error("too many redirects (max {max})")]
    TooManyRedirects {
        /// Redirect limit
        max: usize,
    },

    /// The request body could not be encoded for the wire.
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// Any other transport failure.
    #[error("{0}")]
    Other(String),
}

/// Port for sending prepared requests to the backend.
///
/// Implementations resolve the request path against the API base URL
/// and must return every HTTP response, whatever its status. An error
/// means no response was received at all.
pub trait HttpTransport: Send + Sync {
    /// Sends a request and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be transmitted or the
    /// response could not be read.
    fn execute(
        &self,
        request: &ApiRequest,
    ) -> impl Future<Output = Result<ApiResponse, TransportError>> + Send;
}
