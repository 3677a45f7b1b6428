//! Scripted in-process backend for protocol tests.

#![allow(dead_code, clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use gradely_application::ports::{HttpTransport, SessionNavigator, TransportError};
use gradely_application::{ApiClient, MemoryCredentialStore};
use gradely_domain::request::AUTHORIZATION;
use gradely_domain::{ApiRequest, ApiResponse, CredentialPair, HttpMethod, RequestBody, endpoints};
use parking_lot::Mutex;
use serde_json::json;

pub const EMAIL: &str = "student@uni.fr";
pub const PASSWORD: &str = "secret";

/// How the refresh endpoint answers.
#[derive(Debug, Clone, Copy)]
pub enum RefreshMode {
    /// 200 with the given access credential
    Grant(&'static str),
    /// 401 `token_not_valid`
    Reject,
    /// 200 without an `access` field
    MissingAccess,
    /// No response at all
    Unreachable,
}

/// When business requests get no response at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outage {
    /// Business requests are answered
    None,
    /// Every business request fails
    Always,
    /// Only resent requests fail
    OnRetry,
}

/// Backend double: accepts exactly one access credential on business
/// endpoints and answers the token endpoints from a script.
pub struct ScriptedBackend {
    valid_access: String,
    refresh_mode: RefreshMode,
    refresh_delay: Duration,
    outage: Outage,
    refresh_calls: AtomicUsize,
    requests: Mutex<Vec<ApiRequest>>,
    canned: Mutex<HashMap<(HttpMethod, String), ApiResponse>>,
}

impl ScriptedBackend {
    pub fn accepting(valid_access: &str) -> Self {
        Self {
            valid_access: valid_access.to_string(),
            refresh_mode: RefreshMode::Grant("a2"),
            refresh_delay: Duration::ZERO,
            outage: Outage::None,
            refresh_calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
            canned: Mutex::new(HashMap::new()),
        }
    }

    /// Answers authorized `method path` requests with `response`.
    pub fn respond(
        self,
        method: HttpMethod,
        path: impl Into<String>,
        response: ApiResponse,
    ) -> Self {
        self.canned.lock().insert((method, path.into()), response);
        self
    }

    pub fn refresh_with(mut self, mode: RefreshMode) -> Self {
        self.refresh_mode = mode;
        self
    }

    pub fn refresh_delay(mut self, delay: Duration) -> Self {
        self.refresh_delay = delay;
        self
    }

    pub fn outage(mut self, outage: Outage) -> Self {
        self.outage = outage;
        self
    }

    pub fn refresh_calls(&self) -> usize {
        self.refresh_calls.load(Ordering::SeqCst)
    }

    /// Every request received, in arrival order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().clone()
    }

    /// Requests received for one path.
    pub fn requests_to(&self, path: &str) -> Vec<ApiRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }

    fn issue(request: &ApiRequest) -> ApiResponse {
        let RequestBody::Json(body) = &request.body else {
            return ApiResponse::json(400, &json!({"detail": "JSON body expected"}));
        };
        if body["email"] == EMAIL && body["password"] == PASSWORD {
            ApiResponse::json(200, &json!({"access": "a1", "refresh": "r1"}))
        } else {
            ApiResponse::json(
                401,
                &json!({"detail": "No active account found with the given credentials"}),
            )
        }
    }

    async fn renew(&self) -> Result<ApiResponse, TransportError> {
        self.refresh_calls.fetch_add(1, Ordering::SeqCst);
        if !self.refresh_delay.is_zero() {
            tokio::time::sleep(self.refresh_delay).await;
        }
        match self.refresh_mode {
            RefreshMode::Grant(access) => Ok(ApiResponse::json(200, &json!({"access": access}))),
            RefreshMode::Reject => Ok(ApiResponse::json(
                401,
                &json!({"detail": "Token is invalid or expired", "code": "token_not_valid"}),
            )),
            RefreshMode::MissingAccess => Ok(ApiResponse::json(200, &json!({}))),
            RefreshMode::Unreachable => Err(Self::refused()),
        }
    }

    fn business(&self, request: &ApiRequest) -> ApiResponse {
        let expected = format!("Bearer {}", self.valid_access);
        if request.headers.get(AUTHORIZATION) != Some(expected.as_str()) {
            return ApiResponse::json(
                401,
                &json!({
                    "detail": "Given token not valid for any token type",
                    "code": "token_not_valid"
                }),
            );
        }
        if let Some(response) = self
            .canned
            .lock()
            .get(&(request.method, request.path.clone()))
        {
            return response.clone();
        }
        match (request.method, request.path.as_str()) {
            (HttpMethod::Get, endpoints::ME) => {
                ApiResponse::json(200, &json!({"id": 2, "email": EMAIL, "is_staff": false}))
            }
            (HttpMethod::Delete, _) => ApiResponse::empty(204),
            _ => ApiResponse::json(200, &json!({"path": request.path})),
        }
    }
}

impl ScriptedBackend {
    fn refused() -> TransportError {
        TransportError::ConnectionRefused {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

impl HttpTransport for ScriptedBackend {
    async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.lock().push(request.clone());
        match request.path.as_str() {
            endpoints::TOKEN => Ok(Self::issue(request)),
            endpoints::TOKEN_REFRESH => self.renew().await,
            _ => match self.outage {
                Outage::Always => Err(Self::refused()),
                Outage::OnRetry if request.retried => Err(Self::refused()),
                _ => Ok(self.business(request)),
            },
        }
    }
}

/// Navigator that records every redirect.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    redirects: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn redirects(&self) -> Vec<String> {
        self.redirects.lock().clone()
    }
}

impl SessionNavigator for RecordingNavigator {
    fn redirect_to(&self, entry_point: &str) {
        self.redirects.lock().push(entry_point.to_string());
    }
}

pub struct Harness {
    pub client: ApiClient<ScriptedBackend>,
    pub store: MemoryCredentialStore,
    pub navigator: Arc<RecordingNavigator>,
}

impl Harness {
    pub fn backend(&self) -> &ScriptedBackend {
        self.client.transport()
    }
}

/// Client over `backend` whose store already holds `stored`.
pub fn harness(backend: ScriptedBackend, stored: Option<(&str, &str)>) -> Harness {
    let store = stored.map_or_else(MemoryCredentialStore::new, |(access, refresh)| {
        MemoryCredentialStore::with_pair(&CredentialPair::new(access, refresh))
    });
    let navigator = Arc::new(RecordingNavigator::default());
    let client = ApiClient::new(
        backend,
        Arc::new(store.clone()),
        Arc::clone(&navigator) as Arc<dyn SessionNavigator>,
    );
    Harness {
        client,
        store,
        navigator,
    }
}
