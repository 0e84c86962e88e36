//! Helper functions for middleware and handlers

use actix_web::HttpRequest;

/// Identifier used when neither a forwarded address nor a peer is known
pub const UNKNOWN_CLIENT: &str = "unknown";

/// Derive the rate-limit bucket for a request.
///
/// Uses the first entry of `X-Forwarded-For`, then the peer IP, then
/// [`UNKNOWN_CLIENT`]. The header is client-controlled, so the result is a
/// best-effort label and trivially spoofable.
pub fn client_identifier(req: &HttpRequest) -> String {
    let forwarded = req
        .headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty());

    if let Some(client) = forwarded {
        return client.to_string();
    }

    req.peer_addr()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}
