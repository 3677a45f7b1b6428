//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the client core and the outside
//! world. Adapters live in the infrastructure crate or in the consumer.

mod credential_store;
mod http_transport;
mod navigator;

pub use credential_store::{CredentialStore, StoreError};
pub use http_transport::{HttpTransport, TransportError};
pub use navigator::{NoopNavigator, SessionNavigator};
