//! Upstream provider adapters
//!
//! One module per upstream API, plus the shared HTTP transport in [`base`].

// Base infrastructure
pub mod base;

// Provider modules
pub mod anthropic;
pub mod gemini;
pub mod openrouter;

pub mod unified_provider;

pub use anthropic::{AnthropicConfig, AnthropicProvider};
pub use gemini::{GeminiConfig, GeminiProvider};
pub use openrouter::{OpenRouterConfig, OpenRouterProvider};
pub use unified_provider::ProviderError;
