//! Gradely Infrastructure - Adapters and implementations
//!
//! Concrete implementations of the ports defined in the application
//! crate: a reqwest HTTP transport, a file-backed credential store and
//! the layered client configuration.

pub mod adapters;
pub mod config;
pub mod persistence;
pub mod serialization;

pub use adapters::ReqwestTransport;
pub use config::{ClientConfig, ConfigLoadError};
pub use persistence::FileCredentialStore;
pub use serialization::{SerializationError, from_json_bytes, to_json_stable, to_json_stable_bytes};
