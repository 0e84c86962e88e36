//! Application state shared across HTTP handlers
//!
//! This module provides the AppState struct and the per-route relay state.

use crate::config::Config;
use crate::core::rate_limiter::RateLimiter;
use crate::core::traits::ProviderAdapter;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// All fields are wrapped in Arc for efficient sharing across worker threads.
#[derive(Clone)]
pub struct AppState {
    /// Relay configuration (shared read-only)
    pub config: Arc<Config>,
    /// One entry per provider route
    pub routes: Vec<RelayRoute>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config, routes: Vec<RelayRoute>) -> Self {
        Self {
            config: Arc::new(config),
            routes,
        }
    }

    /// Get relay configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Route mounted at `path`
    pub fn route(&self, path: &str) -> Option<&RelayRoute> {
        self.routes.iter().find(|route| route.path == path)
    }

    /// Client windows held across every route
    pub fn tracked_clients(&self) -> usize {
        self.routes.iter().map(RelayRoute::tracked_clients).sum()
    }
}

/// State attached to a single provider route
#[derive(Debug, Clone)]
pub struct RelayRoute {
    /// Mount path, e.g. `/api/gemini`
    pub path: String,
    /// Adapter the route delegates to
    pub adapter: Arc<dyn ProviderAdapter>,
    /// This route's own limiter, consulted before the adapter; `None` when exempt
    pub limiter: Option<Arc<RateLimiter>>,
}

impl RelayRoute {
    /// Mount `adapter` at `/api/{name}`
    pub fn new(adapter: Arc<dyn ProviderAdapter>, limiter: Option<Arc<RateLimiter>>) -> Self {
        Self {
            path: format!("/api/{}", adapter.name()),
            adapter,
            limiter,
        }
    }

    /// Client windows held by this route's limiter
    pub fn tracked_clients(&self) -> usize {
        self.limiter
            .as_ref()
            .map_or(0, |limiter| limiter.tracked_clients())
    }

    /// Whether requests on this route are counted
    pub fn is_rate_limited(&self) -> bool {
        self.limiter
            .as_ref()
            .is_some_and(|limiter| limiter.is_enabled())
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("routes", &self.routes)
            .field("tracked_clients", &self.tracked_clients())
            .finish()
    }
}
