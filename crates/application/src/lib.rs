//! Gradely Application - Authenticated API client
//!
//! This crate contains the client pipeline with single-flight credential
//! renewal, the ports it talks through, and the typed endpoint services.
//! It depends only on the domain crate and defines traits (ports) that
//! the infrastructure crate implements.

pub mod auth;
pub mod client;
pub mod error;
pub mod ports;
mod services;

pub use auth::MemoryCredentialStore;
pub use client::ApiClient;
pub use error::{ApplicationError, ApplicationResult};
