//! Provider relay endpoint
//!
//! One handler serves every provider route. Each request moves through
//! method check, admission, payload validation and the upstream call; any
//! step may end the request with an error response.

use crate::core::rate_limiter::RateLimitDecision;
use crate::server::middleware::{REQUEST_ID_HEADER, client_identifier};
use crate::server::state::RelayRoute;
use crate::utils::error::GatewayError;
use actix_web::http::Method;
use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Relay one request to the route's provider
pub async fn relay(
    req: HttpRequest,
    body: web::Bytes,
    route: web::Data<RelayRoute>,
) -> Result<HttpResponse, GatewayError> {
    let provider = route.adapter.name();
    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    if req.method() != Method::POST {
        debug!(provider, method = %req.method(), "Rejected non-POST request");
        return Err(GatewayError::MethodNotAllowed);
    }

    if let Some(limiter) = &route.limiter {
        let client_id = client_identifier(&req);
        if let RateLimitDecision::Rejected { retry_after_secs } =
            limiter.check_and_record(&client_id, Instant::now())
        {
            warn!(
                provider,
                client = %client_id,
                retry_after_secs,
                request_id = %request_id,
                "Rate limit exceeded"
            );
            return Err(GatewayError::RateLimit { retry_after_secs });
        }
    }

    // A body that is not JSON has no message list and fails validation below
    let payload: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    let upstream_request = route.adapter.translate_request(payload).map_err(|e| {
        debug!(provider, error = %e, "Rejected invalid payload");
        GatewayError::from(e)
    })?;

    let started = Instant::now();
    let raw = route
        .adapter
        .call_upstream(upstream_request)
        .await
        .map_err(|e| {
            if e.is_upstream() {
                warn!(provider, request_id = %request_id, error = %e, "Upstream request failed");
            } else {
                error!(provider, request_id = %request_id, error = %e, "Relay failed");
            }
            GatewayError::from(e)
        })?;

    info!(
        provider,
        request_id = %request_id,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Relayed request"
    );

    Ok(HttpResponse::Ok().json(route.adapter.translate_response(raw)))
}
