//! Anthropic Configuration

use serde::{Deserialize, Serialize};

use crate::config::models::default_true;
use crate::core::traits::{ProviderConfig, validate_base_url};

/// Anthropic provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnthropicConfig {
    /// API key, sent as `x-api-key`
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    /// Base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Value of the `anthropic-version` header
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Model used when the client does not name one
    #[serde(default = "default_model")]
    pub default_model: String,
    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Whether the route consults the rate limiter
    #[serde(default = "default_true")]
    pub rate_limited: bool,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            api_version: default_api_version(),
            default_model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            rate_limited: true,
        }
    }
}

impl AnthropicConfig {
    /// Create
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Default::default()
        }
    }

    /// Settings
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Messages endpoint URL
    pub fn endpoint(&self) -> String {
        format!("{}/v1/messages", self.base_url.trim_end_matches('/'))
    }
}

impl ProviderConfig for AnthropicConfig {
    fn validate(&self) -> Result<(), String> {
        validate_base_url("Anthropic", &self.base_url)?;
        if self.api_version.is_empty() {
            return Err("Anthropic API version is required".to_string());
        }
        if self.max_tokens == 0 {
            return Err("Anthropic max_tokens must be greater than 0".to_string());
        }
        Ok(())
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn api_base(&self) -> &str {
        &self.base_url
    }

    fn rate_limited(&self) -> bool {
        self.rate_limited
    }
}

fn default_base_url() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_api_version() -> String {
    "2023-06-01".to_string()
}

fn default_model() -> String {
    "claude-3-haiku-20240307".to_string()
}

fn default_max_tokens() -> u32 {
    1000
}

fn default_temperature() -> f64 {
    0.7
}
