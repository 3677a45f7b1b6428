//! Persistence adapters.

mod file_credential_store;

pub use file_credential_store::FileCredentialStore;
