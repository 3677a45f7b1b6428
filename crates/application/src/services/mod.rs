//! Typed endpoint services.
//!
//! Each module adds the calls for one group of backend resources to
//! [`ApiClient`](crate::ApiClient). All of them run through the
//! authenticated pipeline.

mod account;
mod deliverables;
mod discussion;
mod planning;
mod projects;
mod supervision;
mod tasks;
