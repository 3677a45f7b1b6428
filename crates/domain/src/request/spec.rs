//! Outgoing request descriptor

use serde::Serialize;
use uuid::Uuid;

use super::{Headers, HttpMethod, MultipartForm, RequestBody};
use crate::error::DomainResult;

/// Descriptor for a single call against the REST backend.
///
/// The path is relative to the configured API base URL. The client
/// pipeline mutates the headers before transmission and sets
/// `retried` once the request has been resent after a credential
/// renewal.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// Identifier shared by the original send and its retry
    pub id: Uuid,
    /// HTTP method
    pub method: HttpMethod,
    /// Path relative to the API base URL, e.g. `/api/projects/`
    pub path: String,
    /// HTTP headers
    pub headers: Headers,
    /// Request body
    pub body: RequestBody,
    /// Whether this request has already been retried after renewal
    pub retried: bool,
}

impl ApiRequest {
    /// Creates a request with no headers and no body.
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            method,
            path: path.into(),
            headers: Headers::new(),
            body: RequestBody::None,
            retried: false,
        }
    }

    /// Creates a GET request.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    /// Creates a DELETE request.
    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Creates a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be encoded as JSON.
    pub fn post_json<T: Serialize + ?Sized>(
        path: impl Into<String>,
        payload: &T,
    ) -> DomainResult<Self> {
        Ok(Self::new(HttpMethod::Post, path).with_body(RequestBody::json(payload)?))
    }

    /// Creates a PATCH request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be encoded as JSON.
    pub fn patch_json<T: Serialize + ?Sized>(
        path: impl Into<String>,
        payload: &T,
    ) -> DomainResult<Self> {
        Ok(Self::new(HttpMethod::Patch, path).with_body(RequestBody::json(payload)?))
    }

    /// Creates a POST request with a multipart body.
    #[must_use]
    pub fn post_multipart(path: impl Into<String>, form: MultipartForm) -> Self {
        Self::new(HttpMethod::Post, path).with_body(RequestBody::Multipart(form))
    }

    /// Replaces the body.
    #[must_use]
    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }

    /// Sets a header on the request.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.set(name, value);
        self
    }
}
