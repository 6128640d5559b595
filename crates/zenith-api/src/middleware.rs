//! Per-request correlation
//!
//! Every request gets a `RequestContext` in its extensions. An inbound
//! `x-request-id` of at most `MAX_REQUEST_ID_LEN` bytes is adopted,
//! otherwise a fresh id is minted. The id is echoed on the response.

use std::time::Instant;

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use zenith_core::types::schema::HEADER_REQUEST_ID;
use zenith_core::types::{RequestContext, RequestId};
use zenith_core::{log_op_end, log_op_start};

/// Longest inbound request id that is adopted as-is
pub const MAX_REQUEST_ID_LEN: usize = 128;

pub async fn request_context(mut req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = req
        .headers()
        .get(HEADER_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.trim().is_empty() && v.len() <= MAX_REQUEST_ID_LEN)
        .map(|v| RequestId::from_string(v.to_string()))
        .unwrap_or_default();
    let ctx = RequestContext::with_request_id(request_id);

    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    log_op_start!(
        "http_request",
        request_id = ctx.request_id.as_str(),
        method = method.as_str(),
        path = path.as_str()
    );

    req.extensions_mut().insert(ctx.clone());
    let mut response = next.run(req).await;

    if let Ok(value) = HeaderValue::from_str(ctx.request_id.as_str()) {
        response.headers_mut().insert(HEADER_REQUEST_ID, value);
    }

    log_op_end!(
        "http_request",
        duration_ms = start.elapsed().as_millis() as u64,
        request_id = ctx.request_id.as_str(),
        method = method.as_str(),
        path = path.as_str(),
        status = response.status().as_u16() as u64
    );

    response
}
