//! HTTP Header types

use serde::{Deserialize, Serialize};

/// Name of the authorization header.
pub const AUTHORIZATION: &str = "Authorization";

/// Name of the content type header.
pub const CONTENT_TYPE: &str = "Content-Type";

/// Default document content type for API requests.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A single HTTP header with name and value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// The header name (e.g., "Content-Type")
    pub name: String,
    /// The header value (e.g., "application/json")
    pub value: String,
}

impl Header {
    /// Creates a new header.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// An ordered collection of HTTP headers with case-insensitive lookup.
///
/// Setting a header replaces any existing header with the same name,
/// so a collection never carries duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Headers {
    items: Vec<Header>,
}

impl Headers {
    /// Creates an empty header collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Sets a header, replacing any existing value for the same name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let header = Header::new(name, value);
        if let Some(existing) = self.items.iter_mut().find(|h| h.is(&header.name)) {
            existing.value = header.value;
        } else {
            self.items.push(header);
        }
    }

    /// Sets a header only if no header with that name exists yet.
    pub fn set_if_absent(&mut self, name: &str, value: &str) {
        if !self.contains(name) {
            self.items.push(Header::new(name, value));
        }
    }

    /// Removes a header by name, returning its value if it was present.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.items.iter().position(|h| h.is(name))?;
        Some(self.items.remove(index).value)
    }

    /// Returns the value of a header by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|h| h.is(name))
            .map(|h| h.value.as_str())
    }

    /// Returns true if a header with that name is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|h| h.is(name))
    }

    /// Returns an iterator over the headers.
    pub fn iter(&self) -> impl Iterator<Item = &Header> {
        self.items.iter()
    }

    /// Returns the number of headers.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Vec::len is not const in stable
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no headers.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Headers {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut headers = Self::new();
        for (name, value) in iter {
            headers.set(name, value);
        }
        headers
    }
}
