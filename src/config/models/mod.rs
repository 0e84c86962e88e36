//! Configuration data models
//!
//! This module defines all configuration structures used throughout the relay.

#![allow(missing_docs)]

pub mod gateway;
pub mod provider;
pub mod rate_limit;
pub mod server;

// Re-export all configuration types
pub use gateway::*;
pub use provider::*;
pub use rate_limit::*;
pub use server::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    3000
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    1024 * 1024 // 1MB
}

pub fn default_true() -> bool {
    true
}
