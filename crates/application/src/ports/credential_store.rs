//! Credential store port

use async_trait::async_trait;
use gradely_domain::CredentialPair;

/// Errors that can occur while reading or writing credentials.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Durable storage of the access and refresh credentials.
///
/// The store does no validation and no freshness checks; it returns
/// whatever was last written.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Persists both credentials, overwriting any previous pair.
    async fn save(&self, pair: &CredentialPair) -> Result<(), StoreError>;

    /// Returns the stored access credential, if any.
    async fn access(&self) -> Result<Option<String>, StoreError>;

    /// Returns the stored refresh credential, if any.
    async fn refresh(&self) -> Result<Option<String>, StoreError>;

    /// Replaces the access credential, keeping the refresh credential.
    async fn set_access(&self, access: &str) -> Result<(), StoreError>;

    /// Removes both credentials. Clearing an empty store is not an error.
    async fn clear(&self) -> Result<(), StoreError>;
}
