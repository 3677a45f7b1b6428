//! Authenticated API client.
//!
//! Every call runs through the same explicit pipeline:
//!
//! 1. `prepare`: merge default headers, attach the bearer credential,
//!    drop the document content type for multipart bodies
//! 2. `dispatch`: hand the prepared request to the [`HttpTransport`]
//! 3. `handle_expiry`: on a 401, renew the access credential once
//!    (shared by all concurrent callers) and resend the request once
//! 4. classification: non-2xx responses become [`ApplicationError::Status`]

mod pipeline;
mod renewal;
mod session;

use std::sync::Arc;

use futures::future::{BoxFuture, Shared};
use gradely_domain::request::{CONTENT_TYPE, Headers, JSON_CONTENT_TYPE};
use gradely_domain::{ApiRequest, ApiResponse, BackendError};
use parking_lot::Mutex;
use serde::de::DeserializeOwned;

use crate::error::{ApplicationError, ApplicationResult};
use crate::ports::{CredentialStore, HttpTransport, SessionNavigator};

/// In-flight renewal shared by every request that saw the same expiry.
/// Resolves to the new access credential, or `None` on failure.
type PendingRenewal = Shared<BoxFuture<'static, Option<String>>>;

/// Client for the Gradely REST API with automatic session renewal.
///
/// Cheap to clone; clones share the credential store and the renewal
/// state.
pub struct ApiClient<T> {
    inner: Arc<ClientInner<T>>,
}

impl<T> Clone for ApiClient<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

struct ClientInner<T> {
    transport: T,
    store: Arc<dyn CredentialStore>,
    navigator: Arc<dyn SessionNavigator>,
    default_headers: Headers,
    renewal: Mutex<Option<PendingRenewal>>,
}

impl<T: HttpTransport + 'static> ApiClient<T> {
    /// Creates a client sending `Content-Type: application/json` by default.
    pub fn new(
        transport: T,
        store: Arc<dyn CredentialStore>,
        navigator: Arc<dyn SessionNavigator>,
    ) -> Self {
        let mut default_headers = Headers::new();
        default_headers.set(CONTENT_TYPE, JSON_CONTENT_TYPE);
        Self::with_default_headers(transport, store, navigator, default_headers)
    }

    /// Creates a client with custom default headers.
    ///
    /// Default headers are added to every request that does not set
    /// them itself.
    pub fn with_default_headers(
        transport: T,
        store: Arc<dyn CredentialStore>,
        navigator: Arc<dyn SessionNavigator>,
        default_headers: Headers,
    ) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                transport,
                store,
                navigator,
                default_headers,
                renewal: Mutex::new(None),
            }),
        }
    }

    /// Returns the credential store used by this client.
    #[must_use]
    pub fn store(&self) -> &Arc<dyn CredentialStore> {
        &self.inner.store
    }

    /// Returns the underlying transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.inner.transport
    }

    /// Returns true while a credential renewal is in flight.
    #[must_use]
    pub fn renewal_in_flight(&self) -> bool {
        self.inner.renewal.lock().is_some()
    }

    /// Sends a request through the full pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Transport`] if no response was received
    /// and [`ApplicationError::Status`] for any non-2xx final response,
    /// including the original 401 when renewal was impossible.
    pub async fn execute(&self, request: ApiRequest) -> ApplicationResult<ApiResponse> {
        let response = self.inner.dispatch(&request, None).await?;
        let response = self.inner.handle_expiry(request, response).await?;
        classify(response)
    }

    /// Sends a request and decodes its JSON body.
    pub(crate) async fn fetch<R: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> ApplicationResult<R> {
        let response = self.execute(request).await?;
        decode(&response)
    }

    /// Sends a request whose response body is ignored.
    pub(crate) async fn send(&self, request: ApiRequest) -> ApplicationResult<()> {
        self.execute(request).await.map(|_| ())
    }
}

fn classify(response: ApiResponse) -> ApplicationResult<ApiResponse> {
    if response.status.is_success() {
        Ok(response)
    } else {
        Err(ApplicationError::Status {
            status: response.status,
            body: BackendError::from_body(&response.body),
        })
    }
}

fn decode<R: DeserializeOwned>(response: &ApiResponse) -> ApplicationResult<R> {
    serde_json::from_slice(&response.body).map_err(|e| ApplicationError::Decode(e.to_string()))
}
