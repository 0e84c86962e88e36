//! Request fixtures

use actix_web::test::TestRequest;
use serde_json::{Value, json};

/// Client address used by fixtures unless a test picks its own
pub const CLIENT_IP: &str = "203.0.113.10";

/// POST `body` to `path` as client [`CLIENT_IP`]
pub fn post(path: &str, body: Value) -> TestRequest {
    post_as(path, body, CLIENT_IP)
}

/// POST `body` to `path` as `client_ip`
pub fn post_as(path: &str, body: Value, client_ip: &str) -> TestRequest {
    TestRequest::post()
        .uri(path)
        .insert_header(("x-forwarded-for", client_ip))
        .set_json(body)
}

/// OpenAI-style conversation with a system prompt
pub fn chat_with_system() -> Value {
    json!({
        "messages": [
            {"role": "system", "content": "S"},
            {"role": "user", "content": "hi"}
        ]
    })
}

/// Gemini-native request body
pub fn gemini_request() -> Value {
    json!({
        "systemInstruction": {"parts": [{"text": "Answer in one sentence"}]},
        "contents": [{"role": "user", "parts": [{"text": "Why is the sky blue?"}]}]
    })
}
