//! Core provider trait definitions
//!
//! Defines the interface every upstream adapter implements

use async_trait::async_trait;
use serde_json::Value;
use std::fmt::Debug;

use crate::core::providers::base::UpstreamRequest;
use crate::core::providers::unified_provider::ProviderError;

/// Translation and transport for one upstream API
///
/// The request handler drives an adapter through three steps, in order:
///
/// 1. [`translate_request`](Self::translate_request) turns the inbound JSON
///    payload into a ready-to-send [`UpstreamRequest`]. A payload without the
///    expected message list fails here with [`ProviderError::InvalidRequest`]
///    and no network call is made.
/// 2. [`call_upstream`](Self::call_upstream) performs exactly one outbound call.
/// 3. [`translate_response`](Self::translate_response) reshapes the provider's
///    answer for the client.
///
/// # Example
///
/// ```rust,ignore
/// #[async_trait]
/// impl ProviderAdapter for EchoAdapter {
///     fn name(&self) -> &'static str {
///         "echo"
///     }
///
///     fn translate_request(&self, payload: Value) -> Result<UpstreamRequest, ProviderError> {
///         Ok(UpstreamRequest { url: self.url.clone(), headers: HeaderMap::new(), body: payload })
///     }
///
///     async fn call_upstream(&self, request: UpstreamRequest) -> Result<Value, ProviderError> {
///         self.pool.post_json(self.name(), request).await
///     }
/// }
/// ```
#[async_trait]
pub trait ProviderAdapter: Send + Sync + Debug + 'static {
    /// Short lowercase provider name, used in logs and error bodies
    fn name(&self) -> &'static str;

    /// Build the provider-native request from the client payload
    fn translate_request(&self, payload: Value) -> Result<UpstreamRequest, ProviderError>;

    /// Send the request upstream and decode the JSON answer
    async fn call_upstream(&self, request: UpstreamRequest) -> Result<Value, ProviderError>;

    /// Reshape the provider answer; pass-through by default
    fn translate_response(&self, response: Value) -> Value {
        response
    }
}

/// Provider configuration trait
pub trait ProviderConfig: Send + Sync + Clone + Debug + 'static {
    /// Validate configuration
    fn validate(&self) -> Result<(), String>;

    /// Get API key
    fn api_key(&self) -> Option<&str>;

    /// Get API base URL
    fn api_base(&self) -> &str;

    /// Whether the route for this provider consults the rate limiter
    fn rate_limited(&self) -> bool;
}

/// Shared base URL check used by every provider config
pub(crate) fn validate_base_url(provider: &str, base_url: &str) -> Result<(), String> {
    if base_url.is_empty() {
        return Err(format!("{} base URL is required", provider));
    }
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(format!(
            "{} base URL must start with http:// or https://",
            provider
        ));
    }
    Ok(())
}
