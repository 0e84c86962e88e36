//! OpenRouter Provider Configuration
//!
//! Configuration management for OpenRouter API integration

use serde::{Deserialize, Serialize};

use crate::config::models::default_true;
use crate::core::traits::{ProviderConfig, validate_base_url};

/// OpenRouter provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenRouterConfig {
    /// API key for OpenRouter, sent as a bearer token
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    /// Base URL for OpenRouter API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Site URL for OpenRouter rankings, sent as `HTTP-Referer`
    #[serde(default)]
    pub site_url: Option<String>,
    /// Site name for OpenRouter rankings, sent as `X-Title`
    #[serde(default)]
    pub site_name: Option<String>,
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

impl Default for OpenRouterConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            site_url: None,
            site_name: None,
            default_model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            rate_limited: true,
        }
    }
}

impl OpenRouterConfig {
    /// Create new OpenRouter configuration
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Default::default()
        }
    }

    /// Set base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set site URL for OpenRouter request headers
    pub fn with_site_url(mut self, site_url: impl Into<String>) -> Self {
        self.site_url = Some(site_url.into());
        self
    }

    /// Set site name for OpenRouter request headers
    pub fn with_site_name(mut self, site_name: impl Into<String>) -> Self {
        self.site_name = Some(site_name.into());
        self
    }

    /// Chat completions endpoint URL
    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

impl ProviderConfig for OpenRouterConfig {
    fn validate(&self) -> Result<(), String> {
        validate_base_url("OpenRouter", &self.base_url)?;
        if self.max_tokens == 0 {
            return Err("OpenRouter max_tokens must be greater than 0".to_string());
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
    "https://openrouter.ai/api/v1".to_string()
}

fn default_model() -> String {
    "mistralai/mistral-7b-instruct:free".to_string()
}

fn default_max_tokens() -> u32 {
    1000
}

fn default_temperature() -> f64 {
    0.7
}
