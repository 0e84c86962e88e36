//! Gemini Configuration

use serde::{Deserialize, Serialize};

use crate::config::models::default_true;
use crate::core::traits::{ProviderConfig, validate_base_url};

/// Gemini provider configuration
///
/// Generation parameters are fixed by the operator; clients cannot override
/// the model or any of the sampling settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key, sent as `x-goog-api-key`
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    /// Base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Maximum output tokens
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
    /// Stop sequences
    #[serde(default = "default_stop_sequences")]
    pub stop_sequences: Vec<String>,
    /// Thinking budget, 0 disables thinking
    #[serde(default)]
    pub thinking_budget: u32,
    /// Whether the route consults the rate limiter
    #[serde(default = "default_true")]
    pub rate_limited: bool,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
            stop_sequences: default_stop_sequences(),
            thinking_budget: 0,
            rate_limited: true,
        }
    }
}

impl GeminiConfig {
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

    /// `generateContent` URL for the configured model
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

impl ProviderConfig for GeminiConfig {
    fn validate(&self) -> Result<(), String> {
        validate_base_url("Gemini", &self.base_url)?;
        if self.model.is_empty() {
            return Err("Gemini model is required".to_string());
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
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_max_output_tokens() -> u32 {
    100
}

fn default_stop_sequences() -> Vec<String> {
    vec![".".to_string()]
}
