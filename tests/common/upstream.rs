//! Stub upstream providers
//!
//! One `wiremock` server stands in for all three providers; each provider's
//! base URL is pointed at a distinct path prefix on it.

use actix_web::web;
use chat_relay::Config;
use chat_relay::server::{AppState, HttpServer};
use wiremock::MockServer;

pub const GEMINI_KEY: &str = "test-gemini-key";
pub const CLAUDE_KEY: &str = "test-claude-key";
pub const OPENROUTER_KEY: &str = "test-openrouter-key";

pub const GEMINI_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";
pub const ANTHROPIC_PATH: &str = "/v1/messages";
pub const OPENROUTER_PATH: &str = "/api/v1/chat/completions";

/// A mock server plus a relay configuration pointing at it
pub struct StubUpstream {
    pub server: MockServer,
    pub config: Config,
}

impl StubUpstream {
    /// Start a stub with API keys for every provider
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let uri = server.uri();

        let mut config = Config::default();
        let providers = &mut config.gateway.providers;
        providers.gemini.base_url = format!("{}/v1beta", uri);
        providers.gemini.api_key = Some(GEMINI_KEY.to_string());
        providers.anthropic.base_url = uri.clone();
        providers.anthropic.api_key = Some(CLAUDE_KEY.to_string());
        providers.openrouter.base_url = format!("{}/api/v1", uri);
        providers.openrouter.api_key = Some(OPENROUTER_KEY.to_string());

        Self { server, config }
    }

    /// Adjust the configuration before the app is built
    pub fn configure(mut self, f: impl FnOnce(&mut Config)) -> Self {
        f(&mut self.config);
        self
    }

    /// Build the relay state for the current configuration
    pub async fn state(&self) -> web::Data<AppState> {
        let server = HttpServer::new(&self.config)
            .await
            .expect("relay should build from stub config");
        web::Data::new(server.state().clone())
    }
}

/// Build an initialized test service for `$stub`
#[macro_export]
macro_rules! relay_service {
    ($stub:expr) => {
        actix_web::test::init_service(chat_relay::server::HttpServer::create_app(
            $stub.state().await,
        ))
        .await
    };
}
