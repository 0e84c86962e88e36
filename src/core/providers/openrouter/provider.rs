//! OpenRouter Provider Implementation
//!
//! OpenRouter speaks the OpenAI chat completions dialect, so messages are
//! forwarded as received and the response is returned untouched.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::{Value, json};

use crate::core::providers::base::{ConnectionPool, UpstreamRequest};
use crate::core::providers::unified_provider::ProviderError;
use crate::core::traits::ProviderAdapter;
use crate::core::types::{StopSequences, require_array};

use super::config::OpenRouterConfig;

const PROVIDER: &str = "openrouter";

/// OpenRouter provider implementation
#[derive(Debug, Clone)]
pub struct OpenRouterProvider {
    config: OpenRouterConfig,
    pool: ConnectionPool,
}

impl OpenRouterProvider {
    /// Create a new OpenRouter provider
    pub fn new(config: OpenRouterConfig, pool: ConnectionPool) -> Self {
        Self { config, pool }
    }

    /// Get provider configuration
    pub fn config(&self) -> &OpenRouterConfig {
        &self.config
    }

    fn build_headers(&self) -> Result<HeaderMap, ProviderError> {
        let invalid = |what: &str| {
            ProviderError::configuration(PROVIDER, format!("{} is not a valid header value", what))
        };

        let mut headers = HeaderMap::new();
        if let Some(api_key) = &self.config.api_key {
            let bearer = HeaderValue::from_str(&format!("Bearer {}", api_key))
                .map_err(|_| invalid("API key"))?;
            headers.insert(AUTHORIZATION, bearer);
        }
        // Optional attribution headers used for OpenRouter rankings
        if let Some(site_url) = &self.config.site_url {
            let value = HeaderValue::from_str(site_url).map_err(|_| invalid("Site URL"))?;
            headers.insert("http-referer", value);
        }
        if let Some(site_name) = &self.config.site_name {
            let value = HeaderValue::from_str(site_name).map_err(|_| invalid("Site name"))?;
            headers.insert("x-title", value);
        }
        Ok(headers)
    }
}

#[async_trait]
impl ProviderAdapter for OpenRouterProvider {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    fn translate_request(&self, payload: Value) -> Result<UpstreamRequest, ProviderError> {
        let messages = require_array(&payload, "messages")
            .ok_or_else(|| ProviderError::invalid_request(PROVIDER, "Messages array is required"))?
            .clone();

        let model = payload
            .get("model")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| self.config.default_model.clone());

        let mut body = json!({
            "model": model,
            "messages": messages,
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature,
        });

        if let Some(stop) = payload.get("stop").filter(|v| !v.is_null()) {
            let stop: StopSequences = serde_json::from_value(stop.clone()).map_err(|e| {
                ProviderError::invalid_request(PROVIDER, format!("Invalid stop sequences: {}", e))
            })?;
            body["stop"] = json!(stop.into_vec());
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
