//! Credential types exchanged with the token endpoints

use serde::{Deserialize, Serialize};

/// Storage key of the access credential.
pub const ACCESS_KEY: &str = "access";

/// Storage key of the refresh credential.
pub const REFRESH_KEY: &str = "refresh";

/// Access and refresh credentials issued on login.
///
/// The access credential is short-lived and authorizes individual
/// requests; the refresh credential is only used to mint a new access
/// credential.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialPair {
    /// Short-lived bearer credential
    pub access: String,
    /// Longer-lived credential used for renewal
    pub refresh: String,
}

impl CredentialPair {
    /// Creates a new credential pair.
    #[must_use]
    pub fn new(access: impl Into<String>, refresh: impl Into<String>) -> Self {
        Self {
            access: access.into(),
            refresh: refresh.into(),
        }
    }
}

// Tokens must never end up in logs verbatim.
impl std::fmt::Debug for CredentialPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialPair")
            .field("access", &token_preview(&self.access))
            .field("refresh", &token_preview(&self.refresh))
            .finish()
    }
}

/// Body of the token-issuance request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account email (the backend's username field)
    pub email: String,
    /// Account password
    pub password: String,
}

/// Body of the token-refresh request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshRequest {
    /// Stored refresh credential
    pub refresh: String,
}

/// Success body of the token-refresh endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessGrant {
    /// Newly minted access credential
    #[serde(default)]
    pub access: Option<String>,
}

/// Formats a bearer authorization header value.
#[must_use]
pub fn bearer(access: &str) -> String {
    format!("Bearer {access}")
}

/// Get a preview of a token (first 8 chars + ...).
#[must_use]
pub fn token_preview(token: &str) -> String {
    match token.get(..8) {
        Some(head) if token.len() > 12 => format!("{head}..."),
        _ => token.to_string(),
    }
}
