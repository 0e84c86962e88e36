//! Request correlation
//!
//! Every request carries an `x-request-id`. An id set by an upstream proxy is
//! kept when it is short printable ASCII; otherwise a fresh uuid replaces it.
//! The id is written back on the response and attached to a `request` span,
//! so relay logs for one call can be grepped together.

use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::header::{HeaderName, HeaderValue};
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;
use tracing::{Instrument, debug, info_span};

use crate::utils::generate_request_id;

/// Header carrying the request identifier
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest inbound id that is reused as is
const MAX_INBOUND_ID_LEN: usize = 128;

pub struct RequestIdMiddleware;

impl<S, B> Transform<S, ServiceRequest> for RequestIdMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RequestIdService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestIdService { service }))
    }
}

pub struct RequestIdService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestIdService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        let header = HeaderName::from_static(REQUEST_ID_HEADER);
        let request_id = match reusable_id(req.headers().get(&header)) {
            Some(inbound) => inbound,
            None => {
                let fresh = HeaderValue::from_str(&generate_request_id())
                    .unwrap_or_else(|_| HeaderValue::from_static("unassigned"));
                req.headers_mut().insert(header.clone(), fresh.clone());
                fresh
            }
        };

        let span = info_span!(
            "request",
            request_id = request_id.to_str().unwrap_or_default(),
            path = %req.path()
        );
        let fut = span.in_scope(|| {
            debug!("Relay request received");
            self.service.call(req)
        });

        Box::pin(
            async move {
                let mut res = fut.await?;
                res.headers_mut().insert(header, request_id);
                Ok(res)
            }
            .instrument(span),
        )
    }
}

/// Inbound id worth keeping: non-empty, bounded, visible ASCII only
fn reusable_id(value: Option<&HeaderValue>) -> Option<HeaderValue> {
    let value = value?;
    let text = value.to_str().ok()?;
    let acceptable = !text.is_empty()
        && text.len() <= MAX_INBOUND_ID_LEN
        && text.bytes().all(|b| b.is_ascii_graphic());
    acceptable.then(|| value.clone())
}
