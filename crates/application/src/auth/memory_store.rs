//! In-memory credential storage.
//!
//! Process-local store keyed by the two fixed credential names. Useful
//! for tests and for consumers that do not need credentials to outlive
//! the process.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use gradely_domain::CredentialPair;
use gradely_domain::auth::{ACCESS_KEY, REFRESH_KEY};
use tokio::sync::RwLock;

use crate::ports::{CredentialStore, StoreError};

/// Thread-safe in-memory credential store.
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    entries: Arc<RwLock<HashMap<&'static str, String>>>,
}

impl MemoryCredentialStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding a credential pair.
    #[must_use]
    pub fn with_pair(pair: &CredentialPair) -> Self {
        let mut entries = HashMap::new();
        entries.insert(ACCESS_KEY, pair.access.clone());
        entries.insert(REFRESH_KEY, pair.refresh.clone());
        Self {
            entries: Arc::new(RwLock::new(entries)),
        }
    }

    /// Returns true if no credential is stored.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    async fn get(&self, key: &str) -> Option<String> {
        self.entries.read().await.get(key).cloned()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn save(&self, pair: &CredentialPair) -> Result<(), StoreError> {
        let mut entries = self.entries.write().await;
        entries.insert(ACCESS_KEY, pair.access.clone());
        entries.insert(REFRESH_KEY, pair.refresh.clone());
        Ok(())
    }

    async fn access(&self) -> Result<Option<String>, StoreError> {
        Ok(self.get(ACCESS_KEY).await)
    }

    async fn refresh(&self) -> Result<Option<String>, StoreError> {
        Ok(self.get(REFRESH_KEY).await)
    }

    async fn set_access(&self, access: &str) -> Result<(), StoreError> {
        self.entries
            .write()
            .await
            .insert(ACCESS_KEY, access.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        self.entries.write().await.clear();
        Ok(())
    }
}
