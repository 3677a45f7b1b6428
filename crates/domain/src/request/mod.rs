//! HTTP Request domain types

mod body;
mod header;
mod method;
mod spec;

pub use body::{FormPart, MultipartForm, RequestBody};
pub use header::{AUTHORIZATION, CONTENT_TYPE, Header, Headers, JSON_CONTENT_TYPE};
pub use method::HttpMethod;
pub use spec::ApiRequest;
