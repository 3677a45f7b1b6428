//! Session renewal behaviour of the client pipeline.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use common::{Outage, RefreshMode, ScriptedBackend, harness};
use futures::future::join_all;
use gradely_application::ApplicationError;
use gradely_application::error::NETWORK_ERROR_MESSAGE;
use gradely_application::ports::{CredentialStore, SessionNavigator, StoreError};
use gradely_application::{ApiClient, MemoryCredentialStore};
use gradely_domain::request::{AUTHORIZATION, CONTENT_TYPE};
use gradely_domain::{
    ApiRequest, CredentialPair, MultipartForm, RequestBody, StatusCode, endpoints,
};
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn test_concurrent_expiries_share_one_renewal() {
    let h = harness(
        ScriptedBackend::accepting("a2").refresh_delay(Duration::from_millis(20)),
        Some(("a1", "r1")),
    );

    let results = join_all((0..5).map(|_| h.client.me())).await;

    assert!(results.iter().all(Result::is_ok));
    assert_eq!(h.backend().refresh_calls(), 1);

    let retries: Vec<_> = h
        .backend()
        .requests_to(endpoints::ME)
        .into_iter()
        .filter(|r| r.retried)
        .collect();
    assert_eq!(retries.len(), 5);
    assert!(
        retries
            .iter()
            .all(|r| r.headers.get(AUTHORIZATION) == Some("Bearer a2"))
    );
    assert!(!h.client.renewal_in_flight());
}

#[tokio::test]
async fn test_retried_request_is_not_renewed_again() {
    // The backend never accepts any credential.
    let h = harness(ScriptedBackend::accepting("never"), Some(("a1", "r1")));

    let err = h.client.me().await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(h.backend().refresh_calls(), 1);
    assert_eq!(h.backend().requests_to(endpoints::ME).len(), 2);
    assert!(h.navigator.redirects().is_empty());
    assert_eq!(h.store.access().await.unwrap().as_deref(), Some("a2"));
}

#[tokio::test]
async fn test_failed_login_never_renews_and_ends_session() {
    let h = harness(ScriptedBackend::accepting("a1"), Some(("stale", "r0")));

    let err = h.client.login(common::EMAIL, "wrong").await.unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
    assert_eq!(
        err.user_message(),
        "No active account found with the given credentials"
    );
    assert_eq!(h.backend().refresh_calls(), 0);
    assert!(h.store.is_empty().await);
    assert_eq!(h.navigator.redirects(), vec!["/login".to_string()]);
}

#[tokio::test]
async fn test_rejected_refresh_call_is_not_renewed() {
    let h = harness(
        ScriptedBackend::accepting("a1").refresh_with(RefreshMode::Reject),
        Some(("a1", "r1")),
    );

    let request =
        ApiRequest::post_json(endpoints::TOKEN_REFRESH, &json!({"refresh": "r1"})).unwrap();
    let err = h.client.execute(request).await.unwrap_err();

    assert!(err.is_unauthorized());
    // Only the call made by the test itself.
    assert_eq!(h.backend().refresh_calls(), 1);
    assert!(h.store.is_empty().await);
    assert_eq!(h.navigator.redirects(), vec!["/login".to_string()]);
}

#[tokio::test]
async fn test_stored_credential_is_attached() {
    let h = harness(ScriptedBackend::accepting("X"), Some(("X", "r1")));

    h.client
        .execute(ApiRequest::get(endpoints::PROJECTS))
        .await
        .unwrap();

    let sent = h.backend().requests();
    assert_eq!(sent[0].headers.get(AUTHORIZATION), Some("Bearer X"));
    assert_eq!(sent[0].headers.get(CONTENT_TYPE), Some("application/json"));
}

#[tokio::test]
async fn test_no_credential_no_header() {
    let h = harness(ScriptedBackend::accepting("X"), None);

    let err = h
        .client
        .execute(ApiRequest::get(endpoints::PROJECTS))
        .await
        .unwrap_err();

    assert!(err.is_unauthorized());
    let sent = h.backend().requests();
    assert!(!sent[0].headers.contains(AUTHORIZATION));
    // Nothing to renew with.
    assert_eq!(h.backend().refresh_calls(), 0);
    assert_eq!(h.navigator.redirects(), vec!["/login".to_string()]);
}

#[tokio::test]
async fn test_multipart_upload_has_no_fixed_content_type() {
    let h = harness(ScriptedBackend::accepting("X"), Some(("X", "r1")));
    let form = MultipartForm::new()
        .text("content", "final report")
        .text("status", "submitted")
        .file("document", "report.pdf", None, b"%PDF-1.7".to_vec());

    h.client
        .execute(ApiRequest::post_multipart(
            endpoints::submissions(1, 2),
            form,
        ))
        .await
        .unwrap();

    let sent = h.backend().requests();
    assert!(sent[0].body.is_multipart());
    assert!(!sent[0].headers.contains(CONTENT_TYPE));
    assert_eq!(sent[0].headers.get(AUTHORIZATION), Some("Bearer X"));
}

#[tokio::test]
async fn test_failed_renewal_terminates_session_once() {
    let h = harness(
        ScriptedBackend::accepting("a2")
            .refresh_with(RefreshMode::Reject)
            .refresh_delay(Duration::from_millis(20)),
        Some(("a1", "r1")),
    );

    let results = join_all((0..3).map(|_| h.client.me())).await;

    for result in &results {
        let err = result.as_ref().unwrap_err();
        assert!(err.is_unauthorized());
    }
    assert_eq!(h.backend().refresh_calls(), 1);
    assert_eq!(h.store.access().await.unwrap(), None);
    assert_eq!(h.store.refresh().await.unwrap(), None);
    assert_eq!(h.navigator.redirects(), vec!["/login".to_string()]);
    // No request was resent.
    assert!(h.backend().requests().iter().all(|r| !r.retried));
}

#[tokio::test]
async fn test_refresh_without_access_terminates_session() {
    let h = harness(
        ScriptedBackend::accepting("a2").refresh_with(RefreshMode::MissingAccess),
        Some(("a1", "r1")),
    );

    let err = h.client.me().await.unwrap_err();

    assert!(err.is_unauthorized());
    assert!(h.store.is_empty().await);
    assert_eq!(h.navigator.redirects(), vec!["/login".to_string()]);
}

#[tokio::test]
async fn test_unreachable_refresh_endpoint_terminates_session() {
    let h = harness(
        ScriptedBackend::accepting("a2").refresh_with(RefreshMode::Unreachable),
        Some(("a1", "r1")),
    );

    let err = h.client.me().await.unwrap_err();

    assert!(matches!(err, ApplicationError::Status { .. }));
    assert!(h.store.is_empty().await);
    assert_eq!(h.navigator.redirects(), vec!["/login".to_string()]);
}

#[tokio::test]
async fn test_next_expiry_starts_a_fresh_renewal() {
    let h = harness(ScriptedBackend::accepting("never"), Some(("a1", "r1")));

    let _ = h.client.me().await;
    let _ = h.client.me().await;

    assert_eq!(h.backend().refresh_calls(), 2);
    assert!(!h.client.renewal_in_flight());
}

#[tokio::test]
async fn test_login_renew_and_retry_end_to_end() {
    let h = harness(ScriptedBackend::accepting("a2"), None);

    let pair = h.client.login(common::EMAIL, common::PASSWORD).await.unwrap();
    assert_eq!(pair.access, "a1");
    assert_eq!(pair.refresh, "r1");
    assert_eq!(h.store.access().await.unwrap().as_deref(), Some("a1"));
    assert_eq!(h.store.refresh().await.unwrap().as_deref(), Some("r1"));

    let user = h.client.me().await.unwrap();
    assert_eq!(user.email, common::EMAIL);

    let refreshes = h.backend().requests_to(endpoints::TOKEN_REFRESH);
    assert_eq!(refreshes.len(), 1);
    assert_eq!(refreshes[0].body, RequestBody::Json(json!({"refresh": "r1"})));

    let attempts = h.backend().requests_to(endpoints::ME);
    assert_eq!(attempts.len(), 2);
    assert_eq!(attempts[0].headers.get(AUTHORIZATION), Some("Bearer a1"));
    assert_eq!(attempts[1].headers.get(AUTHORIZATION), Some("Bearer a2"));
    assert!(attempts[1].retried);

    assert_eq!(h.store.access().await.unwrap().as_deref(), Some("a2"));
    assert_eq!(h.store.refresh().await.unwrap().as_deref(), Some("r1"));
    assert!(h.navigator.redirects().is_empty());
}

#[tokio::test]
async fn test_unreachable_backend_is_reported_without_renewal() {
    let h = harness(
        ScriptedBackend::accepting("a1").outage(Outage::Always),
        Some(("a1", "r1")),
    );

    let err = h.client.me().await.unwrap_err();

    assert!(matches!(err, ApplicationError::Transport(_)));
    assert_eq!(err.user_message(), NETWORK_ERROR_MESSAGE);
    assert_eq!(h.backend().refresh_calls(), 0);
    assert_eq!(h.store.access().await.unwrap().as_deref(), Some("a1"));
    assert_eq!(h.store.refresh().await.unwrap().as_deref(), Some("r1"));
    assert!(h.navigator.redirects().is_empty());
}

#[tokio::test]
async fn test_unreachable_backend_on_resend_is_reported() {
    let h = harness(
        ScriptedBackend::accepting("a2").outage(Outage::OnRetry),
        Some(("a1", "r1")),
    );

    let err = h.client.me().await.unwrap_err();

    assert!(matches!(err, ApplicationError::Transport(_)));
    assert_eq!(err.user_message(), NETWORK_ERROR_MESSAGE);
    assert_eq!(h.backend().refresh_calls(), 1);
    let attempts = h.backend().requests_to(endpoints::ME);
    assert_eq!(attempts.len(), 2);
    assert!(attempts[1].retried);
    // The renewal itself succeeded, so the session stays.
    assert_eq!(h.store.access().await.unwrap().as_deref(), Some("a2"));
    assert!(h.navigator.redirects().is_empty());
}

/// Memory store whose `clear` takes a while, like a file removal.
struct SlowClearStore {
    inner: MemoryCredentialStore,
    delay: Duration,
}

#[async_trait]
impl CredentialStore for SlowClearStore {
    async fn save(&self, pair: &CredentialPair) -> Result<(), StoreError> {
        self.inner.save(pair).await
    }

    async fn access(&self) -> Result<Option<String>, StoreError> {
        self.inner.access().await
    }

    async fn refresh(&self) -> Result<Option<String>, StoreError> {
        self.inner.refresh().await
    }

    async fn set_access(&self, access: &str) -> Result<(), StoreError> {
        self.inner.set_access(access).await
    }

    async fn clear(&self) -> Result<(), StoreError> {
        tokio::time::sleep(self.delay).await;
        self.inner.clear().await
    }
}

#[tokio::test]
async fn test_expiry_during_termination_joins_failed_renewal() {
    let store = MemoryCredentialStore::with_pair(&CredentialPair::new("a1", "r1"));
    let navigator = Arc::new(common::RecordingNavigator::default());
    let client = ApiClient::new(
        ScriptedBackend::accepting("a2").refresh_with(RefreshMode::Reject),
        Arc::new(SlowClearStore {
            inner: store.clone(),
            delay: Duration::from_millis(50),
        }),
        Arc::clone(&navigator) as Arc<dyn SessionNavigator>,
    );

    // The second call expires while the first is still clearing the store.
    let (first, second) = tokio::join!(client.me(), async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        client.me().await
    });

    assert!(first.unwrap_err().is_unauthorized());
    assert!(second.unwrap_err().is_unauthorized());
    assert_eq!(client.transport().refresh_calls(), 1);
    assert_eq!(navigator.redirects(), vec!["/login".to_string()]);
    assert!(store.is_empty().await);
    assert!(!client.renewal_in_flight());
}
