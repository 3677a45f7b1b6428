//! Request-transform and dispatch stages.

use gradely_domain::auth::{bearer, token_preview};
use gradely_domain::request::{AUTHORIZATION, CONTENT_TYPE};
use gradely_domain::{ApiRequest, ApiResponse};
use tracing::{debug, warn};

use super::ClientInner;
use crate::ports::{HttpTransport, TransportError};

impl<T: HttpTransport + 'static> ClientInner<T> {
    /// Builds the request that goes on the wire.
    ///
    /// `renewed` overrides the stored access credential when resending
    /// after a renewal. Never fails: an unreadable store counts as no
    /// credential.
    pub(super) async fn prepare(&self, request: &ApiRequest, renewed: Option<&str>) -> ApiRequest {
        let mut prepared = request.clone();

        for header in self.default_headers.iter() {
            prepared.headers.set_if_absent(&header.name, &header.value);
        }

        let access = match renewed {
            Some(access) => Some(access.to_string()),
            None => self.stored_access().await,
        };
        if let Some(access) = access {
            prepared.headers.set(AUTHORIZATION, bearer(&access));
        }

        // The transport generates the boundary-bearing type itself.
        if prepared.body.is_multipart() {
            prepared.headers.remove(CONTENT_TYPE);
        }

        prepared
    }

    /// Prepares the request and hands it to the transport.
    pub(super) async fn dispatch(
        &self,
        request: &ApiRequest,
        renewed: Option<&str>,
    ) -> Result<ApiResponse, TransportError> {
        let prepared = self.prepare(request, renewed).await;
        debug!(
            request_id = %prepared.id,
            method = %prepared.method,
            path = %prepared.path,
            retried = prepared.retried,
            "dispatching request"
        );

        let response = self.transport.execute(&prepared).await.inspect_err(|e| {
            warn!(
                request_id = %prepared.id,
                path = %prepared.path,
                error = %e,
                "transport failure"
            );
        })?;

        debug!(
            request_id = %prepared.id,
            status = response.status.as_u16(),
            elapsed_ms = u64::try_from(response.duration.as_millis()).unwrap_or(u64::MAX),
            "response received"
        );
        Ok(response)
    }

    async fn stored_access(&self) -> Option<String> {
        match self.store.access().await {
            Ok(Some(access)) => {
                debug!(token_preview = %token_preview(&access), "attaching stored credential");
                Some(access)
            }
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "could not read access credential, sending without it");
                None
            }
        }
    }
}
