//! Custom test assertions

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::test;
use serde_json::Value;

/// Assert the status and return the JSON body
pub async fn assert_json_status<B: MessageBody>(resp: ServiceResponse<B>, expected: u16) -> Value {
    let status = resp.status().as_u16();
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(status, expected, "unexpected status, body: {}", body);
    body
}

/// Assert a body carries the 429 contract and return the retry hint
pub fn assert_rate_limited(body: &Value) -> u64 {
    assert_eq!(body["error"], "Too many requests. Please try again later.");
    body["retryAfterSeconds"]
        .as_u64()
        .expect("retryAfterSeconds should be a non-negative integer")
}
