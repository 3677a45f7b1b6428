//! HTTP Request body types

use serde::Serialize;

use super::header::JSON_CONTENT_TYPE;
use crate::error::{DomainError, DomainResult};

/// HTTP request body.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestBody {
    /// No body
    #[default]
    None,
    /// JSON document body
    Json(serde_json::Value),
    /// Multipart form data (file uploads)
    Multipart(MultipartForm),
}

impl RequestBody {
    /// Creates a JSON body from any serializable value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be represented as JSON.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> DomainResult<Self> {
        serde_json::to_value(value)
            .map(Self::Json)
            .map_err(|e| DomainError::InvalidBody(e.to_string()))
    }

    /// Returns whether the body is empty or none.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::None => true,
            Self::Json(_) => false,
            Self::Multipart(form) => form.parts.is_empty(),
        }
    }

    /// Returns true for multipart bodies, whose content type the transport
    /// must generate itself so that it carries the part boundary.
    #[must_use]
    pub const fn is_multipart(&self) -> bool {
        matches!(self, Self::Multipart(_))
    }

    /// Returns the document content type, if the body has a fixed one.
    #[must_use]
    pub const fn content_type(&self) -> Option<&'static str> {
        match self {
            Self::Json(_) => Some(JSON_CONTENT_TYPE),
            Self::None | Self::Multipart(_) => None,
        }
    }
}

/// A single part of a multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPart {
    /// A plain text field.
    Text {
        /// Field name
        name: String,
        /// Field value
        value: String,
    },
    /// A file field.
    File {
        /// Field name
        name: String,
        /// File name reported to the server
        file_name: String,
        /// Explicit MIME type; guessed from the file name when absent
        content_type: Option<String>,
        /// File contents
        bytes: Vec<u8>,
    },
}

impl FormPart {
    /// Returns the field name of this part.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Text { name, .. } | Self::File { name, .. } => name,
        }
    }
}

/// Multipart form body built up part by part.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MultipartForm {
    /// Parts in insertion order
    pub parts: Vec<FormPart>,
}

impl MultipartForm {
    /// Creates an empty form.
    #[must_use]
    pub const fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// Appends a text field.
    #[must_use]
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(FormPart::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Appends a file field.
    #[must_use]
    pub fn file(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        content_type: Option<String>,
        bytes: Vec<u8>,
    ) -> Self {
        self.parts.push(FormPart::File {
            name: name.into(),
            file_name: file_name.into(),
            content_type,
            bytes,
        });
        self
    }

    /// Looks up a part by field name.
    #[must_use]
    pub fn part(&self, name: &str) -> Option<&FormPart> {
        self.parts.iter().find(|p| p.name() == name)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_json_body() {
        let body = RequestBody::json(&serde_json::json!({"title": "Thesis"})).unwrap();
        assert_eq!(body.content_type(), Some("application/json"));
        assert!(!body.is_empty());
        assert!(!body.is_multipart());
    }

    #[test]
    fn test_empty_body() {
        let body = RequestBody::None;
        assert!(body.is_empty());
        assert_eq!(body.content_type(), None);
    }

    #[test]
    fn test_multipart_has_no_fixed_content_type() {
        let form = MultipartForm::new()
            .text("content", "final report")
            .file("document", "report.pdf", None, b"%PDF".to_vec());
        let body = RequestBody::Multipart(form);

        assert!(body.is_multipart());
        assert_eq!(body.content_type(), None);
    }

    #[test]
    fn test_form_part_lookup() {
        let form = MultipartForm::new().text("status", "submitted");
        assert_eq!(
            form.part("status"),
            Some(&FormPart::Text {
                name: "status".to_string(),
                value: "submitted".to_string()
            })
        );
        assert!(form.part("document").is_none());
    }
}
