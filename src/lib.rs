//! # chat-relay
//!
//! A small HTTP relay that forwards chat requests to Gemini, Anthropic and
//! OpenRouter, translating between an OpenAI-style request shape and each
//! provider's wire format, behind a per-client fixed-window rate limit.
//!
//! ## Routes
//!
//! - `POST /api/gemini`: `{contents, systemInstruction?}`, forwarded as-is
//! - `POST /api/anthropic`: `{messages, model?, stop?}`, answered as
//!   `{choices: [{message: {role, content}}]}`
//! - `POST /api/openrouter`: `{messages, model?, stop?}`, answered as-is
//! - `GET /health`
//!
//! ## Embedding
//!
//! ```rust,no_run
//! use chat_relay::{Config, Gateway};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load().await?;
//!     let gateway = Gateway::new(config).await?;
//!     gateway.run().await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{GatewayError, Result};

pub use core::providers::{
    AnthropicConfig, AnthropicProvider, GeminiConfig, GeminiProvider, OpenRouterConfig,
    OpenRouterProvider, ProviderError,
};
pub use core::rate_limiter::{RateLimitDecision, RateLimiter};
pub use core::traits::ProviderAdapter;
pub use core::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, MessageRole};

use tracing::info;

/// The relay: configuration plus a ready-to-start HTTP server
pub struct Gateway {
    config: Config,
    server: server::HttpServer,
}

impl Gateway {
    /// Create a new gateway instance
    pub async fn new(config: Config) -> Result<Self> {
        info!("Creating new gateway instance");

        let server = server::ServerBuilder::new()
            .with_config(config.clone())
            .build()
            .await?;

        Ok(Self { config, server })
    }

    /// Get the configuration the gateway was built from
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the gateway server
    pub async fn run(self) -> Result<()> {
        info!("Starting {} on {}", NAME, self.config.server().address());
        self.server.start().await
    }
}

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
