//! Provider configuration

use serde::{Deserialize, Serialize};

use crate::core::providers::{AnthropicConfig, GeminiConfig, OpenRouterConfig};
use crate::core::traits::ProviderConfig;

/// Settings for the three upstream providers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProvidersConfig {
    /// Gemini settings
    #[serde(default)]
    pub gemini: GeminiConfig,
    /// Anthropic settings
    #[serde(default)]
    pub anthropic: AnthropicConfig,
    /// OpenRouter settings
    #[serde(default)]
    pub openrouter: OpenRouterConfig,
}

impl ProvidersConfig {
    /// Validate every provider section
    pub fn validate(&self) -> Result<(), String> {
        self.gemini.validate()?;
        self.anthropic.validate()?;
        self.openrouter.validate()?;
        Ok(())
    }

    /// Names of providers that have no API key configured
    pub fn missing_api_keys(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.gemini.api_key().is_none() {
            missing.push("gemini");
        }
        if self.anthropic.api_key().is_none() {
            missing.push("anthropic");
        }
        if self.openrouter.api_key().is_none() {
            missing.push("openrouter");
        }
        missing
    }
}
