//! HTTP server core implementation
//!
//! This module provides the HttpServer struct and its core methods.

use crate::config::{Config, RateLimitConfig, ServerConfig};
use crate::core::providers::base::ConnectionPool;
use crate::core::providers::{AnthropicProvider, GeminiProvider, OpenRouterProvider};
use crate::core::rate_limiter::RateLimiter;
use crate::core::traits::{ProviderAdapter, ProviderConfig};
use crate::server::middleware::RequestIdMiddleware;
use crate::server::routes;
use crate::server::state::{AppState, RelayRoute};
use crate::utils::error::{GatewayError, Result};
use actix_web::{
    App, HttpServer as ActixHttpServer,
    middleware::{DefaultHeaders, Logger},
    web,
};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Access log line; the request id is set by [`RequestIdMiddleware`]
const ACCESS_LOG_FORMAT: &str = r#"%a "%r" %s %b %{x-request-id}i %Dms"#;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
    /// Periodic sweeps of expired rate-limit windows, one per limited route
    cleanup_tasks: Vec<JoinHandle<()>>,
}

impl HttpServer {
    /// Create a new HTTP server
    ///
    /// Builds the shared HTTP client, one adapter per provider and a separate
    /// rate limiter for each limited route. Must be called inside a tokio runtime.
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let pool = ConnectionPool::new(config.server().upstream_timeout())?;
        let rate_limit = config.rate_limit();
        let providers = config.providers();

        let routes = vec![
            relay_route(
                Arc::new(GeminiProvider::new(providers.gemini.clone(), pool.clone())),
                providers.gemini.rate_limited(),
                rate_limit,
            ),
            relay_route(
                Arc::new(AnthropicProvider::new(providers.anthropic.clone(), pool.clone())),
                providers.anthropic.rate_limited(),
                rate_limit,
            ),
            relay_route(
                Arc::new(OpenRouterProvider::new(providers.openrouter.clone(), pool)),
                providers.openrouter.rate_limited(),
                rate_limit,
            ),
        ];

        let cleanup_tasks: Vec<JoinHandle<()>> = routes
            .iter()
            .filter_map(|route| route.limiter.clone())
            .map(RateLimiter::start_cleanup_task)
            .collect();
        if !rate_limit.enabled {
            warn!("Rate limiting is disabled for all routes");
        }

        let state = AppState::new(config.clone(), routes);

        Ok(Self {
            config: config.gateway.server.clone(),
            state,
            cleanup_tasks,
        })
    }

    /// Create the Actix-web application
    pub fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let max_body_size = state.config.server().max_body_size;
        let relay_routes = state.routes.clone();

        App::new()
            .app_data(state)
            .app_data(web::PayloadConfig::new(max_body_size))
            .wrap(Logger::new(ACCESS_LOG_FORMAT))
            .wrap(DefaultHeaders::new().add(("Server", crate::NAME)))
            .wrap(RequestIdMiddleware)
            .configure(move |cfg| routes::configure_routes(cfg, &relay_routes))
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        let port = self.config.port;

        info!("Starting HTTP server on {}", bind_addr);
        for route in &self.state.routes {
            info!("   POST {} -> {}", route.path, route.adapter.name());
        }
        info!("   GET  /health");

        let state = web::Data::new(self.state);

        let mut server = ActixHttpServer::new(move || Self::create_app(state.clone()));
        if let Some(workers) = self.config.workers {
            server = server.workers(workers);
        }

        let server = server
            .bind(&bind_addr)
            .map_err(|e| Self::format_bind_error(e, &bind_addr, port))?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| GatewayError::server(format!("Server error: {}", e)))?;

        for task in self.cleanup_tasks {
            task.abort();
        }

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// Route for `adapter` with its own window store unless the route opts out
fn relay_route(
    adapter: Arc<dyn ProviderAdapter>,
    rate_limited: bool,
    rate_limit: &RateLimitConfig,
) -> RelayRoute {
    let route_limiter =
        (rate_limit.enabled && rate_limited).then(|| Arc::new(RateLimiter::new(rate_limit.clone())));
    let route = RelayRoute::new(adapter, route_limiter);
    info!(
        path = %route.path,
        rate_limited = route.is_rate_limited(),
        "Registered provider route"
    );
    route
}
