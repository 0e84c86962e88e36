//! Main relay configuration

#![allow(missing_docs)]

use super::*;
use serde::{Deserialize, Serialize};

/// Main relay configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GatewayConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Rate limiting configuration
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
    /// Provider configurations
    #[serde(default)]
    pub providers: ProvidersConfig,
}

impl GatewayConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        self.server
            .validate()
            .map_err(|e| format!("Server config error: {}", e))?;
        self.rate_limit
            .validate()
            .map_err(|e| format!("Rate limit config error: {}", e))?;
        self.providers
            .validate()
            .map_err(|e| format!("Provider config error: {}", e))?;
        Ok(())
    }
}
