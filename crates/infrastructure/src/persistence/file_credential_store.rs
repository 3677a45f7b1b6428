//! File-backed credential store.
//!
//! Credentials live in a small JSON document holding the two named
//! entries, by default in the platform data directory:
//! - Linux: ~/.local/share/gradely/credentials.json
//! - macOS: ~/Library/Application Support/gradely/credentials.json
//! - Windows: %APPDATA%/gradely/credentials.json
//!
//! ```json
//! {
//!   "access": "eyJhbGciOi...",
//!   "refresh": "eyJhbGciOi..."
//! }
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use gradely_application::ports::{CredentialStore, StoreError};
use gradely_domain::CredentialPair;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

use crate::serialization::{from_json_bytes, to_json_stable_bytes};

/// On-disk shape; either entry may be missing.
#[derive(Debug, Default, Serialize, Deserialize)]
struct CredentialFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    access: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    refresh: Option<String>,
}

/// Credential store persisted to a JSON file.
///
/// Read-modify-write cycles are serialized; a missing file is an empty
/// store.
#[derive(Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileCredentialStore {
    /// Creates a store backed by `path`. Nothing is read until first use.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Default credential file location in the platform data directory.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|p| p.join("gradely").join("credentials.json"))
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<CredentialFile, StoreError> {
        match fs::read(&self.path).await {
            Ok(bytes) => {
                from_json_bytes(&bytes).map_err(|e| StoreError::Serialization(e.to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(CredentialFile::default()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write(&self, file: &CredentialFile) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let content =
            to_json_stable_bytes(file).map_err(|e| StoreError::Serialization(e.to_string()))?;

        // Write then rename so a crash never leaves a truncated file.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &content).await?;
        restrict_permissions(&tmp).await?;
        fs::rename(&tmp, &self.path).await?;
        debug!(path = %self.path.display(), "credentials written");
        Ok(())
    }
}

#[cfg(unix)]
async fn restrict_permissions(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, std::fs::Permissions::from_mode(0o600)).await
}

#[cfg(not(unix))]
async fn restrict_permissions(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn save(&self, pair: &CredentialPair) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        self.write(&CredentialFile {
            access: Some(pair.access.clone()),
            refresh: Some(pair.refresh.clone()),
        })
        .await
    }

    async fn access(&self) -> Result<Option<String>, StoreError> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.access)
    }

    async fn refresh(&self) -> Result<Option<String>, StoreError> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.refresh)
    }

    async fn set_access(&self, access: &str) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        let mut file = self.load().await?;
        file.access = Some(access.to_string());
        self.write(&file).await
    }

    async fn clear(&self) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        match fs::remove_file(&self.path).await {
            Ok(()) => {
                debug!(path = %self.path.display(), "credentials removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_path_is_under_gradely() {
        if let Some(path) = FileCredentialStore::default_path() {
            assert!(path.ends_with("gradely/credentials.json"));
        }
    }

    #[tokio::test]
    async fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::new(dir.path().join("credentials.json"));

        assert_eq!(store.access().await.unwrap(), None);
        assert_eq!(store.refresh().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");
        std::fs::write(&path, b"{not json").unwrap();
        let store = FileCredentialStore::new(path);

        assert!(matches!(
            store.access().await,
            Err(StoreError::Serialization(_))
        ));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::new(dir.path().join("credentials.json"));
        store.save(&CredentialPair::new("a1", "r1")).await.unwrap();

        let mode = std::fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
