//! Configuration loading utilities
//!
//! Environment overrides applied on top of the YAML file.

use super::models::*;
use crate::utils::error::{GatewayError, Result};
use std::env;
use std::str::FromStr;
use tracing::debug;

impl GatewayConfig {
    /// Apply overrides from the process environment
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_from(|key| env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        // Server configuration
        if let Some(host) = lookup("RELAY_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("RELAY_PORT") {
            self.server.port = parse_var("RELAY_PORT", &port)?;
        }

        // Rate limiting
        if let Some(enabled) = lookup("RELAY_RATE_LIMIT_ENABLED") {
            self.rate_limit.enabled = parse_var("RELAY_RATE_LIMIT_ENABLED", &enabled)?;
        }
        if let Some(max_requests) = lookup("RELAY_RATE_LIMIT_MAX_REQUESTS") {
            self.rate_limit.max_requests =
                parse_var("RELAY_RATE_LIMIT_MAX_REQUESTS", &max_requests)?;
        }
        if let Some(window_secs) = lookup("RELAY_RATE_LIMIT_WINDOW_SECS") {
            self.rate_limit.window_secs = parse_var("RELAY_RATE_LIMIT_WINDOW_SECS", &window_secs)?;
        }

        // Provider secrets
        if let Some(key) = lookup("GEMINI_API_KEY") {
            self.providers.gemini.api_key = Some(key);
        }
        if let Some(key) = lookup("CLAUDE_API_KEY").or_else(|| lookup("ANTHROPIC_API_KEY")) {
            self.providers.anthropic.api_key = Some(key);
        }
        if let Some(key) = lookup("OPENROUTER_API_KEY") {
            self.providers.openrouter.api_key = Some(key);
        }
        if let Some(site_url) = lookup("OPENROUTER_SITE_URL") {
            self.providers.openrouter.site_url = Some(site_url);
        }
        if let Some(site_name) = lookup("OPENROUTER_SITE_NAME") {
            self.providers.openrouter.site_name = Some(site_name);
        }

        debug!("Environment overrides applied");
        Ok(())
    }
}

fn parse_var<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| GatewayError::Config(format!("Invalid {}: {}", key, e)))
}
