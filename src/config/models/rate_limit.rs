//! Rate limiting configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Longest accepted window, one year
pub const MAX_WINDOW_SECS: u64 = 365 * 24 * 60 * 60;

/// Rate limiting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Enable rate limiting
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Requests admitted per client per window
    #[serde(default = "default_max_requests")]
    pub max_requests: u32,
    /// Window length in seconds
    #[serde(default = "default_window_secs")]
    pub window_secs: u64,
    /// Upper bound on client windows held in memory
    #[serde(default = "default_max_tracked_clients")]
    pub max_tracked_clients: usize,
    /// Period of the expired-window sweep in seconds
    #[serde(default = "default_cleanup_interval_secs")]
    pub cleanup_interval_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_requests: default_max_requests(),
            window_secs: default_window_secs(),
            max_tracked_clients: default_max_tracked_clients(),
            cleanup_interval_secs: default_cleanup_interval_secs(),
        }
    }
}

impl RateLimitConfig {
    /// Validate rate limit configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_requests == 0 {
            return Err("max_requests must be greater than 0".to_string());
        }
        if self.window_secs == 0 {
            return Err("window_secs must be greater than 0".to_string());
        }
        if self.window_secs > MAX_WINDOW_SECS {
            return Err(format!(
                "window_secs must be at most {} (one year)",
                MAX_WINDOW_SECS
            ));
        }
        if self.max_tracked_clients == 0 {
            return Err("max_tracked_clients must be greater than 0".to_string());
        }
        Ok(())
    }
}

fn default_max_requests() -> u32 {
    100
}

fn default_window_secs() -> u64 {
    10 * 60
}

fn default_max_tracked_clients() -> usize {
    10_000
}

fn default_cleanup_interval_secs() -> u64 {
    60
}
