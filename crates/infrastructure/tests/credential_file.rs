//! File credential store behaviour through the store port.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use gradely_application::ports::CredentialStore;
use gradely_domain::CredentialPair;
use gradely_infrastructure::FileCredentialStore;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_save_then_read_back_from_a_new_instance() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("credentials.json");

    FileCredentialStore::new(&path)
        .save(&CredentialPair::new("a1", "r1"))
        .await
        .unwrap();

    let store = FileCredentialStore::new(&path);
    assert_eq!(store.access().await.unwrap().as_deref(), Some("a1"));
    assert_eq!(store.refresh().await.unwrap().as_deref(), Some("r1"));

    let raw: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(raw, serde_json::json!({"access": "a1", "refresh": "r1"}));
}

#[tokio::test]
async fn test_set_access_keeps_refresh() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileCredentialStore::new(dir.path().join("credentials.json"));
    store.save(&CredentialPair::new("a1", "r1")).await.unwrap();

    store.set_access("a2").await.unwrap();

    assert_eq!(store.access().await.unwrap().as_deref(), Some("a2"));
    assert_eq!(store.refresh().await.unwrap().as_deref(), Some("r1"));
}

#[tokio::test]
async fn test_clear_removes_file_and_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileCredentialStore::new(dir.path().join("credentials.json"));
    store.save(&CredentialPair::new("a1", "r1")).await.unwrap();

    store.clear().await.unwrap();
    store.clear().await.unwrap();

    assert!(!store.path().exists());
    assert_eq!(store.access().await.unwrap(), None);
    assert_eq!(store.refresh().await.unwrap(), None);
}

#[tokio::test]
async fn test_concurrent_updates_leave_a_valid_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = std::sync::Arc::new(FileCredentialStore::new(dir.path().join("credentials.json")));
    store.save(&CredentialPair::new("a0", "r1")).await.unwrap();

    let writers = (1..=8).map(|i| {
        let store = store.clone();
        tokio::spawn(async move { store.set_access(&format!("a{i}")).await })
    });
    for writer in writers {
        writer.await.unwrap().unwrap();
    }

    let access = store.access().await.unwrap().unwrap();
    assert!(access.starts_with('a'));
    assert_eq!(store.refresh().await.unwrap().as_deref(), Some("r1"));
}
