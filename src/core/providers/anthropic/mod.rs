//! Anthropic Claude Provider
//!
//! Relays OpenAI-style chat requests to the Anthropic Messages API.

pub mod config;
pub mod provider;

pub use config::AnthropicConfig;
pub use provider::AnthropicProvider;
