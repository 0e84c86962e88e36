//! Error Handling utilities
//!
//! This module provides the relay's error type and its HTTP mapping.

pub mod error;

// Re-export commonly used types
pub use error::*;
