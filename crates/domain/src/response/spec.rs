//! Response type
//!
//! Contains types for representing HTTP responses including
//! status codes, headers, body, and timing information.

use std::collections::HashMap;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// HTTP status code with semantic helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct StatusCode(pub u16);

impl StatusCode {
    /// 401, the backend's signal that the access credential was rejected.
    pub const UNAUTHORIZED: Self = Self(401);

    /// 413, returned when an uploaded file exceeds the server limit.
    pub const PAYLOAD_TOO_LARGE: Self = Self(413);

    /// Creates a new `StatusCode`.
    #[must_use]
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Returns the numeric status code.
    #[must_use]
    pub const fn as_u16(&self) -> u16 {
        self.0
    }

    /// Returns true if this is a 2xx success status.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }

    /// Returns true if this is 401 Unauthorized.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        self.0 == Self::UNAUTHORIZED.0
    }

    /// Returns the canonical reason phrase for common status codes.
    #[must_use]
    pub const fn reason_phrase(&self) -> &'static str {
        match self.0 {
            200 => "OK",
            201 => "Created",
            204 => "No Content",
            400 => "Bad Request",
            401 => "Unauthorized",
            403 => "Forbidden",
            404 => "Not Found",
            405 => "Method Not Allowed",
            409 => "Conflict",
            413 => "Payload Too Large",
            429 => "Too Many Requests",
            500 => "Internal Server Error",
            502 => "Bad Gateway",
            503 => "Service Unavailable",
            504 => "Gateway Timeout",
            _ => "Unknown",
        }
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.0, self.reason_phrase())
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

/// A response received from the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers (lower-cased names)
    pub headers: HashMap<String, String>,
    /// Raw body bytes
    pub body: Vec<u8>,
    /// Round-trip time
    pub duration: Duration,
}

impl ApiResponse {
    /// Creates a new response.
    #[must_use]
    pub fn new(
        status: impl Into<StatusCode>,
        headers: HashMap<String, String>,
        body: Vec<u8>,
        duration: Duration,
    ) -> Self {
        Self {
            status: status.into(),
            headers,
            body,
            duration,
        }
    }

    /// Creates a response with a JSON body and no timing information.
    #[must_use]
    pub fn json(status: impl Into<StatusCode>, value: &serde_json::Value) -> Self {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        Self::new(status, headers, value.to_string().into_bytes(), Duration::ZERO)
    }

    /// Creates a response with an empty body.
    #[must_use]
    pub fn empty(status: impl Into<StatusCode>) -> Self {
        Self::new(status, HashMap::new(), Vec::new(), Duration::ZERO)
    }

    /// Returns the body as UTF-8 text, replacing invalid sequences.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decodes the JSON body into `T`.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not valid JSON for `T`.
    pub fn json_body<T: DeserializeOwned>(&self) -> DomainResult<T> {
        serde_json::from_slice(&self.body).map_err(|e| DomainError::InvalidResponse(e.to_string()))
    }

    /// Returns a header value by name (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_categories() {
        assert!(StatusCode::new(204).is_success());
        assert!(StatusCode::UNAUTHORIZED.is_unauthorized());
        assert!(!StatusCode::new(403).is_unauthorized());
        assert!(!StatusCode::new(502).is_success());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(StatusCode::PAYLOAD_TOO_LARGE.to_string(), "413 Payload Too Large");
        assert_eq!(StatusCode::new(299).to_string(), "299 Unknown");
    }

    #[test]
    fn test_json_body_decoding() {
        #[derive(Deserialize)]
        struct Count {
            count: u32,
        }

        let response = ApiResponse::json(200, &serde_json::json!({"count": 3}));
        let decoded: Count = response.json_body().unwrap();
        assert_eq!(decoded.count, 3);
        assert_eq!(response.header("Content-Type"), Some("application/json"));
    }

    #[test]
    fn test_json_body_error() {
        let response = ApiResponse::empty(204);
        let result = response.json_body::<serde_json::Value>();
        assert!(matches!(result, Err(DomainError::InvalidResponse(_))));
    }
}
