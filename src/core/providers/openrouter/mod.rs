//! OpenRouter Provider
//!
//! Access to the models behind OpenRouter's unified chat completions API.

pub mod config;
pub mod provider;

pub use config::OpenRouterConfig;
pub use provider::OpenRouterProvider;
