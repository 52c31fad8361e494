// src/presentation/http/middleware/panic.rs
use crate::presentation::http::error::HttpError;
use axum::response::{IntoResponse, Response};
use std::any::Any;

/// Turns a handler panic into the regular JSON 500 body. The access log
/// never sees a panicking request, so the cause is logged here.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };
    tracing::error!(panic = %detail, "handler panicked");
    HttpError::internal(format!("handler panicked: {detail}")).into_response()
}
