//! Credential storage shipped with the application layer.

mod memory_store;

pub use memory_store::MemoryCredentialStore;
