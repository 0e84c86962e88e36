//! HTTP middleware implementations
//!
//! - Request ID tracking
//! - Client identification for rate limiting

mod helpers;
mod request_id;


pub use helpers::{UNKNOWN_CLIENT, client_identifier};
pub use request_id::{REQUEST_ID_HEADER, RequestIdMiddleware, RequestIdService};
