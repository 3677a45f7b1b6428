//! Gradely Domain - Core types of the Gradely API client
//!
//! Requests, responses, credentials, backend error bodies and the
//! resources of the project-tracking API. Pure Rust, no I/O.

pub mod auth;
pub mod backend_error;
pub mod endpoints;
pub mod error;
pub mod model;
pub mod request;
pub mod response;

pub use auth::{AccessGrant, CredentialPair, LoginRequest, RefreshRequest};
pub use backend_error::{BackendError, FieldMessages};
pub use error::{DomainError, DomainResult};
pub use request::{ApiRequest, HttpMethod, MultipartForm, RequestBody};
pub use response::{ApiResponse, StatusCode};
