//! E2E relay tests against live providers

#[cfg(test)]
mod tests {
    use crate::common::assertions::assert_json_status;
    use crate::common::fixtures::{chat_with_system, gemini_request, post};
    use crate::skip_without_env;
    use actix_web::{test, web};
    use chat_relay::Config;
    use chat_relay::server::HttpServer;

    async fn live_state() -> web::Data<chat_relay::server::AppState> {
        let mut config = Config::default();
        config.gateway.apply_env_overrides().unwrap();
        let server = HttpServer::new(&config).await.unwrap();
        web::Data::new(server.state().clone())
    }

    #[actix_web::test]
    #[ignore]
    async fn test_live_gemini() {
        skip_without_env!("GEMINI_API_KEY");

        let app = test::init_service(HttpServer::create_app(live_state().await)).await;
        let resp = test::call_service(&app, post("/api/gemini", gemini_request()).to_request()).await;
        let body = assert_json_status(resp, 200).await;

        assert!(body["candidates"].is_array());
    }

    #[actix_web::test]
    #[ignore]
    async fn test_live_anthropic() {
        skip_without_env!("CLAUDE_API_KEY");

        let app = test::init_service(HttpServer::create_app(live_state().await)).await;
        let resp = test::call_service(&app, post("/api/anthropic", chat_with_system()).to_request()).await;
        let body = assert_json_status(resp, 200).await;

        assert_eq!(body["choices"][0]["message"]["role"], "assistant");
        assert!(body["choices"][0]["message"]["content"].is_string());
    }

    #[actix_web::test]
    #[ignore]
    async fn test_live_openrouter() {
        skip_without_env!("OPENROUTER_API_KEY");

        let app = test::init_service(HttpServer::create_app(live_state().await)).await;
        let resp = test::call_service(&app, post("/api/openrouter", chat_with_system()).to_request()).await;
        let body = assert_json_status(resp, 200).await;

        assert!(!body["choices"].as_array().unwrap().is_empty());
    }
}
