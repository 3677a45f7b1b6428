//! Deterministic JSON serialization for files written by the client.
//!
//! - 2-space indentation
//! - Trailing newline
//! - UTF-8 without BOM

mod json;

pub use json::*;
