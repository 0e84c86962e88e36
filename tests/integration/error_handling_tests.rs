//! Error handling integration tests

#[cfg(test)]
mod tests {
    use crate::common::assertions::assert_json_status;
    use crate::common::fixtures::{chat_with_system, gemini_request, post};
    use crate::common::upstream::*;
    use crate::relay_service;
    use actix_web::test;
    use serde_json::json;
    use wiremock::matchers::{any, method, path};
    use wiremock::{Mock, ResponseTemplate};

    #[actix_web::test]
    async fn test_upstream_error_status_and_body_pass_through() {
        let stub = StubUpstream::start().await;
        Mock::given(method("POST"))
            .and(path(ANTHROPIC_PATH))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
            .mount(&stub.server)
            .await;

        let app = relay_service!(stub);
        let resp = test::call_service(&app, post("/api/anthropic", chat_with_system()).to_request()).await;
        let body = assert_json_status(resp, 503).await;

        assert_eq!(
            body,
            json!({"error": "Claude API request failed", "details": "upstream down"})
        );
    }

    #[actix_web::test]
    async fn test_gemini_upstream_error_names_provider() {
        let stub = StubUpstream::start().await;
        let upstream_error = r#"{"error":{"code":400,"message":"API key not valid"}}"#;
        Mock::given(method("POST"))
            .and(path(GEMINI_PATH))
            .respond_with(ResponseTemplate::new(400).set_body_string(upstream_error))
            .mount(&stub.server)
            .await;

        let app = relay_service!(stub);
        let resp = test::call_service(&app, post("/api/gemini", gemini_request()).to_request()).await;
        let body = assert_json_status(resp, 400).await;

        assert_eq!(body["error"], "Gemini API request failed");
        assert_eq!(body["details"], upstream_error);
    }

    #[actix_web::test]
    async fn test_missing_api_key_lets_upstream_reject() {
        let stub = StubUpstream::start()
            .await
            .configure(|config| config.gateway.providers.openrouter.api_key = None);
        Mock::given(method("POST"))
            .and(path(OPENROUTER_PATH))
            .respond_with(ResponseTemplate::new(401).set_body_string("No auth credentials found"))
            .mount(&stub.server)
            .await;

        let app = relay_service!(stub);
        let resp = test::call_service(&app, post("/api/openrouter", chat_with_system()).to_request()).await;
        let body = assert_json_status(resp, 401).await;

        assert_eq!(body["error"], "OpenRouter API request failed");
        assert_eq!(body["details"], "No auth credentials found");

        let received = stub.server.received_requests().await.unwrap();
        assert_eq!(received.len(), 1);
        assert!(!received[0].headers.contains_key("authorization"));
    }

    #[actix_web::test]
    async fn test_undecodable_upstream_body_is_internal_error() {
        let stub = StubUpstream::start().await;
        Mock::given(method("POST"))
            .and(path(OPENROUTER_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .mount(&stub.server)
            .await;

        let app = relay_service!(stub);
        let resp = test::call_service(&app, post("/api/openrouter", chat_with_system()).to_request()).await;
        let body = assert_json_status(resp, 500).await;

        assert_eq!(body["error"], "Internal server error");
        assert!(body["details"].is_string());
    }

    #[actix_web::test]
    async fn test_unreachable_upstream_is_internal_error() {
        let stub = StubUpstream::start()
            .await
            .configure(|config| config.gateway.providers.anthropic.base_url = "http://127.0.0.1:1".to_string());

        let app = relay_service!(stub);
        let resp = test::call_service(&app, post("/api/anthropic", chat_with_system()).to_request()).await;
        let body = assert_json_status(resp, 500).await;

        assert_eq!(body["error"], "Internal server error");
    }

    #[actix_web::test]
    async fn test_invalid_payloads_never_reach_upstream() {
        let stub = StubUpstream::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&stub.server)
            .await;

        let app = relay_service!(stub);
        let cases = [
            ("/api/anthropic", json!({"messages": "hi"}), "Messages array is required"),
            ("/api/openrouter", json!({}), "Messages array is required"),
            ("/api/gemini", json!({"contents": {"text": "hi"}}), "Contents array is required"),
        ];

        for (route, payload, message) in cases {
            let resp = test::call_service(&app, post(route, payload).to_request()).await;
            let body = assert_json_status(resp, 400).await;
            assert_eq!(body, json!({"error": message}));
        }
    }

    #[actix_web::test]
    async fn test_non_post_methods_are_rejected() {
        let stub = StubUpstream::start().await;
        let app = relay_service!(stub);

        for route in ["/api/gemini", "/api/anthropic", "/api/openrouter"] {
            let req = test::TestRequest::get().uri(route).to_request();
            let body = assert_json_status(test::call_service(&app, req).await, 405).await;
            assert_eq!(body, json!({"error": "Method not allowed"}));
        }
    }
}
