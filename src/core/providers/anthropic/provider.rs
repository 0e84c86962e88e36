//! Anthropic Provider Implementation
//!
//! Converts OpenAI-style chat requests into the Messages API format and lifts
//! the first content block of the answer back into a `choices` wrapper.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::{Value, json};
use tracing::debug;

use crate::core::providers::base::{ConnectionPool, UpstreamRequest};
use crate::core::providers::unified_provider::ProviderError;
use crate::core::traits::ProviderAdapter;
use crate::core::types::{ChatCompletionRequest, ChatCompletionResponse, require_array};

use super::config::AnthropicConfig;

const PROVIDER: &str = "anthropic";

/// Anthropic provider implementation
#[derive(Debug, Clone)]
pub struct AnthropicProvider {
    config: AnthropicConfig,
    pool: ConnectionPool,
}

impl AnthropicProvider {
    pub fn new(config: AnthropicConfig, pool: ConnectionPool) -> Self {
        Self { config, pool }
    }

    pub fn config(&self) -> &AnthropicConfig {
        &self.config
    }

    fn build_headers(&self) -> Result<HeaderMap, ProviderError> {
        let mut headers = HeaderMap::new();
        if let Some(api_key) = &self.config.api_key {
            let value = HeaderValue::from_str(api_key)
                .map_err(|_| ProviderError::configuration(PROVIDER, "API key is not a valid header value"))?;
            headers.insert("x-api-key", value);
        }
        let version = HeaderValue::from_str(&self.config.api_version)
            .map_err(|_| ProviderError::configuration(PROVIDER, "API version is not a valid header value"))?;
        headers.insert("anthropic-version", version);
        Ok(headers)
    }
}

#[async_trait]
impl ProviderAdapter for AnthropicProvider {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    fn translate_request(&self, payload: Value) -> Result<UpstreamRequest, ProviderError> {
        if require_array(&payload, "messages").is_none() {
            return Err(ProviderError::invalid_request(PROVIDER, "Messages array is required"));
        }

        let request: ChatCompletionRequest = serde_json::from_value(payload).map_err(|e| {
            ProviderError::invalid_request(PROVIDER, format!("Invalid message format: {}", e))
        })?;

        let model = request
            .model
            .clone()
            .unwrap_or_else(|| self.config.default_model.clone());
        let stop_sequences = request
            .stop
            .clone()
            .map(|stop| stop.into_vec())
            .unwrap_or_default();
        let (system, messages) = request.split_system();

        debug!(
            model = %model,
            messages = messages.len(),
            has_system = system.is_some(),
            "Translated Anthropic request"
        );

        let body = json!({
            "model": model,
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature,
            "system": system.unwrap_or_else(|| Value::String(String::new())),
            "messages": messages,
            "stop_sequences": stop_sequences,
        });

        Ok(UpstreamRequest {
            url: self.config.endpoint(),
            headers: self.build_headers()?,
            body,
        })
    }

    async fn call_upstream(&self, request: UpstreamRequest) -> Result<Value, ProviderError> {
        self.pool.post_json(PROVIDER, request).await
    }

    fn translate_response(&self, response: Value) -> Value {
        let text = response
            .get("content")
            .and_then(|content| content.get(0))
            .and_then(|block| block.get("text"))
            .and_then(Value::as_str)
            .unwrap_or_default();

        let wrapped = ChatCompletionResponse::from_assistant_text(text);
        serde_json::to_value(wrapped).unwrap_or_else(|_| {
            json!({"choices": [{"message": {"role": "assistant", "content": text}}]})
        })
    }
}
