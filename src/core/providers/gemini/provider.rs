//! Gemini Provider Implementation
//!
//! Pass-through adapter: clients already send `contents` and
//! `systemInstruction` in Gemini's native shape, so only the fixed generation
//! settings are added. The response is returned untouched.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::{Value, json};

use crate::core::providers::base::{ConnectionPool, UpstreamRequest};
use crate::core::providers::unified_provider::ProviderError;
use crate::core::traits::ProviderAdapter;
use crate::core::types::require_array;

use super::config::GeminiConfig;

const PROVIDER: &str = "gemini";

/// Gemini provider implementation
#[derive(Debug, Clone)]
pub struct GeminiProvider {
    config: GeminiConfig,
    pool: ConnectionPool,
}

impl GeminiProvider {
    /// Create new Gemini provider
    pub fn new(config: GeminiConfig, pool: ConnectionPool) -> Self {
        Self { config, pool }
    }

    /// Get the provider configuration
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn build_headers(&self) -> Result<HeaderMap, ProviderError> {
        let mut headers = HeaderMap::new();
        if let Some(api_key) = &self.config.api_key {
            let value = HeaderValue::from_str(api_key)
                .map_err(|_| ProviderError::configuration(PROVIDER, "API key is not a valid header value"))?;
            headers.insert("x-goog-api-key", value);
        }
        Ok(headers)
    }

    fn generation_config(&self) -> Value {
        json!({
            "temperature": self.config.temperature,
            "maxOutputTokens": self.config.max_output_tokens,
            "stopSequences": self.config.stop_sequences,
            "thinkingConfig": {
                "thinkingBudget": self.config.thinking_budget
            }
        })
    }
}

#[async_trait]
impl ProviderAdapter for GeminiProvider {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    fn translate_request(&self, payload: Value) -> Result<UpstreamRequest, ProviderError> {
        let contents = require_array(&payload, "contents")
            .ok_or_else(|| ProviderError::invalid_request(PROVIDER, "Contents array is required"))?
            .clone();

        let mut body = json!({
            "contents": contents,
            "generationConfig": self.generation_config(),
        });
        if let Some(system_instruction) = payload.get("systemInstruction").filter(|v| !v.is_null()) {
            body["systemInstruction"] = system_instruction.clone();
        }

        Ok(UpstreamRequest {
            url: self.config.endpoint(),
            headers: self.build_headers()?,
            body,
        })
    }

    async fn call_upstream(&self, request: UpstreamRequest) -> Result<Value, ProviderError> {
        self.pool.post_json(PROVIDER, request).await
    }
}
