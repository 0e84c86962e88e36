//! Configuration management for the relay
//!
//! Settings come from an optional YAML file, then environment overrides.

pub mod loader;
pub mod models;

pub use models::*;

use crate::utils::error::{GatewayError, Result};
use std::path::Path;
use tracing::{debug, info, warn};

/// Environment variable naming the YAML config file
pub const CONFIG_PATH_ENV: &str = "RELAY_CONFIG";

/// Config file used when `RELAY_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "config/gateway.yaml";

/// Main configuration struct for the relay
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Relay configuration
    pub gateway: GatewayConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| GatewayError::Config(format!("Failed to read config file: {}", e)))?;

        let gateway: GatewayConfig = serde_yaml::from_str(&content)
            .map_err(|e| GatewayError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { gateway };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from defaults plus environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut gateway = GatewayConfig::default();
        gateway.apply_env_overrides()?;

        let config = Self { gateway };
        config.validate()?;
        Ok(config)
    }

    /// Load the file named by `RELAY_CONFIG`, then apply environment overrides.
    ///
    /// A missing file falls back to defaults; an unreadable or invalid one is
    /// an error.
    pub async fn load() -> Result<Self> {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let mut config = if Path::new(&path).exists() {
            Self::from_file(&path).await?
        } else {
            debug!("Config file {} not found, using defaults", path);
            Self::default()
        };

        config.gateway.apply_env_overrides()?;
        config.validate()?;
        config.warn_missing_api_keys();
        Ok(config)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.gateway.server
    }

    /// Get rate limit configuration
    pub fn rate_limit(&self) -> &RateLimitConfig {
        &self.gateway.rate_limit
    }

    /// Get providers configuration
    pub fn providers(&self) -> &ProvidersConfig {
        &self.gateway.providers
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");
        self.gateway.validate().map_err(GatewayError::Config)
    }

    /// Log a warning for every provider without an API key
    pub fn warn_missing_api_keys(&self) {
        for provider in self.gateway.providers.missing_api_keys() {
            warn!(
                provider = provider,
                "No API key configured; requests will be sent without credentials"
            );
        }
    }

    /// Convert to YAML string. API keys are never included.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.gateway)
            .map_err(|e| GatewayError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
