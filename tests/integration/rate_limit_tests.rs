//! Rate limiting through the full app

#[cfg(test)]
mod tests {
    use crate::common::assertions::{assert_json_status, assert_rate_limited};
    use crate::common::fixtures::{chat_with_system, gemini_request, post, post_as};
    use crate::common::upstream::*;
    use crate::relay_service;
    use actix_web::test;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, ResponseTemplate};

    async fn mount_anthropic_ok(stub: &StubUpstream) {
        Mock::given(method("POST"))
            .and(path(ANTHROPIC_PATH))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"content": [{"text": "ok"}]})),
            )
            .mount(&stub.server)
            .await;
    }

    #[actix_web::test]
    async fn test_hundred_and_first_request_is_rejected() {
        let stub = StubUpstream::start().await;
        mount_anthropic_ok(&stub).await;
        let app = relay_service!(stub);

        for i in 0..100 {
            let resp = test::call_service(&app, post("/api/anthropic", chat_with_system()).to_request()).await;
            assert_eq!(resp.status(), 200, "request {} should be admitted", i + 1);
        }

        let resp = test::call_service(&app, post("/api/anthropic", chat_with_system()).to_request()).await;
        let retry_header: u64 = resp.headers().get("retry-after").unwrap().to_str().unwrap().parse().unwrap();
        let body = assert_json_status(resp, 429).await;
        let retry_after = assert_rate_limited(&body);
        assert_eq!(retry_after, retry_header);
        assert!(retry_after <= 600);

        // Another client is unaffected
        let resp = test::call_service(
            &app,
            post_as("/api/anthropic", chat_with_system(), "198.51.100.20").to_request(),
        )
        .await;
        assert_eq!(resp.status(), 200);

        assert_eq!(stub.server.received_requests().await.unwrap().len(), 101);
    }

    #[actix_web::test]
    async fn test_each_route_keeps_its_own_window() {
        let stub = StubUpstream::start()
            .await
            .configure(|config| config.gateway.rate_limit.max_requests = 2);
        mount_anthropic_ok(&stub).await;
        Mock::given(method("POST"))
            .and(path(GEMINI_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
            .mount(&stub.server)
            .await;
        let app = relay_service!(stub);

        for _ in 0..2 {
            let resp = test::call_service(&app, post("/api/anthropic", chat_with_system()).to_request()).await;
            assert_eq!(resp.status(), 200);
        }
        let resp = test::call_service(&app, post("/api/anthropic", chat_with_system()).to_request()).await;
        let body = assert_json_status(resp, 429).await;
        assert_rate_limited(&body);

        // Exhausting one route leaves the others untouched
        let resp = test::call_service(&app, post("/api/gemini", gemini_request()).to_request()).await;
        assert_eq!(resp.status(), 200);
    }

    #[actix_web::test]
    async fn test_invalid_payloads_still_count_toward_the_route_window() {
        let stub = StubUpstream::start()
            .await
            .configure(|config| config.gateway.rate_limit.max_requests = 2);
        mount_anthropic_ok(&stub).await;
        let app = relay_service!(stub);

        let resp = test::call_service(&app, post("/api/anthropic", chat_with_system()).to_request()).await;
        assert_eq!(resp.status(), 200);

        let resp = test::call_service(&app, post("/api/anthropic", json!({})).to_request()).await;
        assert_eq!(resp.status(), 400);

        let resp = test::call_service(&app, post("/api/anthropic", chat_with_system()).to_request()).await;
        let body = assert_json_status(resp, 429).await;
        assert_rate_limited(&body);
    }

    #[actix_web::test]
    async fn test_exempt_route_ignores_limit() {
        let stub = StubUpstream::start().await.configure(|config| {
            config.gateway.rate_limit.max_requests = 1;
            config.gateway.providers.openrouter.rate_limited = false;
        });
        Mock::given(method("POST"))
            .and(path(OPENROUTER_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&stub.server)
            .await;
        let app = relay_service!(stub);

        for _ in 0..5 {
            let resp = test::call_service(&app, post("/api/openrouter", chat_with_system()).to_request()).await;
            assert_eq!(resp.status(), 200);
        }

        // The limited routes still enforce the cap
        let resp = test::call_service(&app, post("/api/gemini", json!({})).to_request()).await;
        assert_eq!(resp.status(), 400);
        let resp = test::call_service(&app, post("/api/gemini", json!({})).to_request()).await;
        assert_eq!(resp.status(), 429);
    }

    #[actix_web::test]
    async fn test_global_switch_disables_limiting() {
        let stub = StubUpstream::start().await.configure(|config| {
            config.gateway.rate_limit.enabled = false;
            config.gateway.rate_limit.max_requests = 1;
        });
        mount_anthropic_ok(&stub).await;
        let app = relay_service!(stub);

        for _ in 0..3 {
            let resp = test::call_service(&app, post("/api/anthropic", chat_with_system()).to_request()).await;
            assert_eq!(resp.status(), 200);
        }
    }
}
