//! Authentication domain types

mod types;

pub use types::{
    ACCESS_KEY, AccessGrant, CredentialPair, LoginRequest, REFRESH_KEY, RefreshRequest, bearer,
    token_preview,
};
