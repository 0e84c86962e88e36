use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use reqwest::header::HeaderMap;
use serde_json::Value;
use tracing::debug;

use crate::core::providers::unified_provider::ProviderError;
use crate::utils::truncate_string;

/// Unified connection pool configuration
pub struct PoolConfig;
impl PoolConfig {
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;
    pub const POOL_SIZE: usize = 80;
    pub const KEEPALIVE_SECS: u64 = 90;
}

/// One outbound call, fully prepared by an adapter
#[derive(Debug, Clone)]
pub struct UpstreamRequest {
    /// Absolute endpoint URL
    pub url: String,
    /// Auth and version headers
    pub headers: HeaderMap,
    /// JSON body in the provider's wire format
    pub body: Value,
}

/// Shared HTTP client used by every adapter
#[derive(Debug, Clone)]
pub struct ConnectionPool {
    client: Arc<Client>,
}

impl ConnectionPool {
    /// Create a new connection pool
    ///
    /// `request_timeout` of `None` leaves the total request time unbounded, so
    /// an upstream call runs until it completes or the transport gives up.
    pub fn new(request_timeout: Option<Duration>) -> Result<Self, ProviderError> {
        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(PoolConfig::CONNECT_TIMEOUT_SECS))
            .pool_idle_timeout(Duration::from_secs(PoolConfig::KEEPALIVE_SECS))
            .pool_max_idle_per_host(PoolConfig::POOL_SIZE);

        if let Some(timeout) = request_timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| {
            ProviderError::configuration("http", format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self {
            client: Arc::new(client),
        })
    }

    /// Get the underlying reqwest client
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// POST a JSON body and decode the JSON answer.
    ///
    /// A non-2xx status becomes [`ProviderError::Upstream`] carrying the raw
    /// body text; transport failures and undecodable bodies are kept apart as
    /// `Network` and `Parse`.
    pub async fn post_json(
        &self,
        provider: &'static str,
        request: UpstreamRequest,
    ) -> Result<Value, ProviderError> {
        debug!(provider, url = %request.url, "Sending upstream request");

        let response = self
            .client
            .post(&request.url)
            .headers(request.headers)
            .json(&request.body)
            .send()
            .await
            .map_err(|e| ProviderError::network(provider, e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ProviderError::network(provider, format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            debug!(
                provider,
                status = status.as_u16(),
                body = %truncate_string(&text, 200),
                "Upstream returned failure status"
            );
            return Err(ProviderError::upstream(provider, status.as_u16(), text));
        }

        serde_json::from_str(&text)
            .map_err(|e| ProviderError::parse(provider, format!("Failed to parse JSON: {}", e)))
    }
}
