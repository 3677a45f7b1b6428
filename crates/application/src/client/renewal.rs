//! Expiry handling: single-flight renewal and retry-at-most-once.

use std::sync::Arc;

use futures::FutureExt;
use gradely_domain::auth::token_preview;
use gradely_domain::{AccessGrant, ApiRequest, ApiResponse, RefreshRequest, endpoints};
use tracing::{debug, info, warn};

use super::ClientInner;
use crate::ports::{HttpTransport, TransportError};

impl<T: HttpTransport + 'static> ClientInner<T> {
    /// Response-handler stage.
    ///
    /// Returns the response unchanged unless it is a 401 on a request
    /// that has not been retried yet. A 401 from a token endpoint, a
    /// missing refresh credential or a failed renewal end the session and
    /// hand back the original 401.
    pub(super) async fn handle_expiry(
        self: &Arc<Self>,
        mut request: ApiRequest,
        response: ApiResponse,
    ) -> Result<ApiResponse, TransportError> {
        if !response.status.is_unauthorized() || request.retried {
            return Ok(response);
        }

        if endpoints::is_token_endpoint(&request.path) {
            warn!(path = %request.path, "token endpoint rejected the request");
            self.terminate_session().await;
            return Ok(response);
        }

        let refresh = self.store.refresh().await.unwrap_or_else(|e| {
            warn!(error = %e, "could not read refresh credential");
            None
        });
        let Some(refresh) = refresh else {
            debug!(request_id = %request.id, "no refresh credential stored");
            self.terminate_session().await;
            return Ok(response);
        };

        let Some(access) = self.join_renewal(refresh).await else {
            return Ok(response);
        };

        request.retried = true;
        debug!(request_id = %request.id, "resending with renewed credential");
        self.dispatch(&request, Some(&access)).await
    }

    /// Awaits the in-flight renewal, starting one if none is pending.
    async fn join_renewal(self: &Arc<Self>, refresh: String) -> Option<String> {
        let pending = {
            let mut slot = self.renewal.lock();
            slot.get_or_insert_with(|| {
                let inner = Arc::clone(self);
                async move { inner.run_renewal(refresh).await }
                    .boxed()
                    .shared()
            })
            .clone()
        };
        pending.await
    }

    /// Body of the shared renewal future. Clears the in-flight slot once
    /// settled, so the next expiry starts a fresh renewal.
    ///
    /// On failure the slot stays occupied until the store is cleared, so
    /// an expiry arriving meanwhile joins this renewal instead of retrying
    /// the rejected refresh credential.
    async fn run_renewal(self: Arc<Self>, refresh: String) -> Option<String> {
        info!("renewing access credential");
        let outcome = self.request_access(refresh).await;

        match &outcome {
            Some(access) => {
                info!(token_preview = %token_preview(access), "access credential renewed");
            }
            None => {
                warn!("credential renewal failed");
                self.terminate_session().await;
            }
        }
        self.renewal.lock().take();
        outcome
    }

    /// Calls the refresh endpoint and persists the new access credential.
    async fn request_access(&self, refresh: String) -> Option<String> {
        let request =
            match ApiRequest::post_json(endpoints::TOKEN_REFRESH, &RefreshRequest { refresh }) {
                Ok(request) => request,
                Err(e) => {
                    warn!(error = %e, "could not build refresh request");
                    return None;
                }
            };

        let response = match self.dispatch(&request, None).await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "refresh request failed");
                return None;
            }
        };
        if !response.status.is_success() {
            warn!(status = response.status.as_u16(), "refresh credential rejected");
            return None;
        }

        let access = match response.json_body::<AccessGrant>() {
            Ok(AccessGrant {
                access: Some(access),
            }) => access,
            Ok(AccessGrant { access: None }) => {
                warn!("refresh response carried no access credential");
                return None;
            }
            Err(e) => {
                warn!(error = %e, "could not decode refresh response");
                return None;
            }
        };

        if let Err(e) = self.store.set_access(&access).await {
            warn!(error = %e, "could not persist renewed access credential");
        }
        Some(access)
    }
}
