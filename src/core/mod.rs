//! Core functionality for the relay
//!
//! Provider adapters, the admission controller and the shared request types.

pub mod providers;
pub mod rate_limiter;
pub mod traits;
pub mod types;
