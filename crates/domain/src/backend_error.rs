//! Decoding of error bodies returned by the backend.
//!
//! The backend answers failures in one of a few shapes:
//!
//! - `{"detail": "..."}` for authentication, permission and not-found errors
//! - `{"field": ["message", ...], ...}` for validation errors
//! - a bare string or a non-JSON body (proxies, HTML error pages)
//!
//! [`BackendError::message`] extracts a human-readable message with a fixed
//! precedence: the `detail` string first, then every field message
//! flattened in field order and joined with spaces.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Messages attached to a single field of a validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldMessages {
    /// The usual list of messages
    Many(Vec<String>),
    /// A single message
    One(String),
    /// Anything else (nested serializer errors, numbers)
    Other(serde_json::Value),
}

impl FieldMessages {
    fn collect_into(&self, out: &mut Vec<String>) {
        match self {
            Self::Many(messages) => out.extend(messages.iter().cloned()),
            Self::One(message) => out.push(message.clone()),
            Self::Other(value) => collect_strings(value, out),
        }
    }
}

fn collect_strings(value: &serde_json::Value, out: &mut Vec<String>) {
    match value {
        serde_json::Value::String(s) => out.push(s.clone()),
        serde_json::Value::Array(items) => items.iter().for_each(|v| collect_strings(v, out)),
        serde_json::Value::Object(map) => map.values().for_each(|v| collect_strings(v, out)),
        serde_json::Value::Null => {}
        other => out.push(other.to_string()),
    }
}

/// Error body returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BackendError {
    /// `{"detail": "..."}` (extra keys such as `code` are ignored)
    Detail {
        /// Human-readable explanation
        detail: String,
    },
    /// Field name to message(s)
    Fields(BTreeMap<String, FieldMessages>),
    /// Plain text or a JSON string
    Text(String),
    /// No body at all
    Empty,
}

impl BackendError {
    /// Decodes a raw response body.
    ///
    /// Never fails: bodies that are not one of the known JSON shapes are
    /// kept as text, and empty bodies decode to [`BackendError::Empty`].
    #[must_use]
    pub fn from_body(body: &[u8]) -> Self {
        let text = String::from_utf8_lossy(body);
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        match serde_json::from_str::<Self>(trimmed) {
            Ok(decoded) => decoded,
            Err(_) => Self::Text(trimmed.to_string()),
        }
    }

    /// Returns the `detail` string, if the body carried one.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Detail { detail } => Some(detail),
            _ => None,
        }
    }

    /// Returns all field messages flattened in field order.
    #[must_use]
    pub fn field_messages(&self) -> Vec<String> {
        let mut out = Vec::new();
        if let Self::Fields(fields) = self {
            for messages in fields.values() {
                messages.collect_into(&mut out);
            }
        }
        out
    }

    /// Returns the messages attached to one field.
    #[must_use]
    pub fn field(&self, name: &str) -> Vec<String> {
        let mut out = Vec::new();
        if let Self::Fields(fields) = self
            && let Some(messages) = fields.get(name)
        {
            messages.collect_into(&mut out);
        }
        out
    }

    /// Extracts a human-readable message: `detail` first, then the
    /// flattened field messages joined with spaces.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        if let Some(detail) = self.detail() {
            return Some(detail.to_string());
        }
        let flat = self.field_messages();
        if flat.is_empty() {
            None
        } else {
            Some(flat.join(" "))
        }
    }
}

impl std::fmt::Display for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text}"),
            Self::Empty => write!(f, "<empty body>"),
            _ => write!(f, "{}", self.message().unwrap_or_default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_detail_wins() {
        let error = BackendError::from_body(
            br#"{"detail":"Given token not valid for any token type","code":"token_not_valid"}"#,
        );
        assert_eq!(
            error.message().as_deref(),
            Some("Given token not valid for any token type")
        );
    }

    #[test]
    fn test_field_messages_are_flattened() {
        let error = BackendError::from_body(
            br#"{"title":["This field is required."],"due_date":"Date is after the sprint end."}"#,
        );
        // BTreeMap ordering: due_date before title
        assert_eq!(
            error.message().as_deref(),
            Some("Date is after the sprint end. This field is required.")
        );
        assert_eq!(error.field("title"), vec!["This field is required."]);
    }

    #[test]
    fn test_nested_field_errors() {
        let error =
            BackendError::from_body(br#"{"non_field_errors":[{"inner":["Nested problem."]}]}"#);
        assert_eq!(error.message().as_deref(), Some("Nested problem."));
    }

    #[test]
    fn test_plain_text_and_empty_bodies() {
        let error = BackendError::from_body(b"<html>Bad Gateway</html>");
        assert_eq!(error, BackendError::Text("<html>Bad Gateway</html>".to_string()));
        assert_eq!(error.message(), None);

        assert_eq!(BackendError::from_body(b"  "), BackendError::Empty);
        assert_eq!(BackendError::from_body(b"").message(), None);
    }

    #[test]
    fn test_json_string_body() {
        let error = BackendError::from_body(br#""Server exploded""#);
        assert_eq!(error, BackendError::Text("Server exploded".to_string()));
    }

    #[test]
    fn test_empty_object_has_no_message() {
        let error = BackendError::from_body(b"{}");
        assert_eq!(error.message(), None);
    }
}
