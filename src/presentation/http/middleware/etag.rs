// src/presentation/http/middleware/etag.rs
use crate::presentation::http::error::HttpError;
use axum::{
    body::{self, Body},
    extract::Request,
    http::{HeaderValue, Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Strong validator for a response body: byte length plus a 64-bit FNV-1a
/// hash, quoted so it is a valid entity tag.
pub fn compute_etag(body: &[u8]) -> String {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for &byte in body {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0100_0000_01b3);
    }
    format!("\"{:x}-{hash:016x}\"", body.len())
}

/// Opaque part of an entity tag: weak prefix and quotes removed.
fn opaque_tag(token: &str) -> &str {
    let token = token.trim();
    let token = token
        .strip_prefix("W/")
        .or_else(|| token.strip_prefix("w/"))
        .unwrap_or(token);
    token.trim_matches('"')
}

/// Weak comparison of an `If-None-Match` value against `etag`. Accepts `*`
/// and comma-separated candidate lists.
pub fn if_none_match_matches(if_none_match: &HeaderValue, etag: &str) -> bool {
    let Ok(value) = if_none_match.to_str() else {
        return false;
    };
    let value = value.trim();
    value == "*"
        || value
            .split(',')
            .any(|candidate| opaque_tag(candidate) == opaque_tag(etag))
}

/// Tags successful `GET`/`HEAD` responses with an `ETag` and answers a
/// matching `If-None-Match` with `304 Not Modified` and no body.
pub async fn tag_responses(req: Request, next: Next) -> Response {
    if !matches!(*req.method(), Method::GET | Method::HEAD) {
        return next.run(req).await;
    }
    let if_none_match = req.headers().get(header::IF_NONE_MATCH).cloned();

    let response = next.run(req).await;
    if response.status() != StatusCode::OK || response.headers().contains_key(header::ETAG) {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = match body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(err) => {
            return HttpError::internal(format!("failed to buffer response body: {err}"))
                .into_response();
        }
    };
    if bytes.is_empty() {
        return Response::from_parts(parts, Body::from(bytes));
    }

    let tag = compute_etag(&bytes);
    let Ok(value) = HeaderValue::from_str(&tag) else {
        return Response::from_parts(parts, Body::from(bytes));
    };
    parts.headers.insert(header::ETAG, value);

    if if_none_match.is_some_and(|inm| if_none_match_matches(&inm, &tag)) {
        parts.status = StatusCode::NOT_MODIFIED;
        parts.headers.remove(header::CONTENT_LENGTH);
        parts.headers.remove(header::CONTENT_TYPE);
        return Response::from_parts(parts, Body::empty());
    }

    Response::from_parts(parts, Body::from(bytes))
}
