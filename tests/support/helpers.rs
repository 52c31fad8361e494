// tests/support/helpers.rs
use super::mocks::{FixedClock, InMemoryStore};
use axum::{
    Router,
    body::{self, Body},
    http::{Request, StatusCode},
    response::Response,
};
use inkpot_core::{
    application::{ports::time::Clock, services::ApplicationServices},
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        author::AuthorRepository,
    },
    presentation::http::{
        middleware::AccessLogConfig, routes::build_router, state::HttpState,
    },
};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt;

pub fn build_services(
    article_write: Arc<dyn ArticleWriteRepository>,
    article_read: Arc<dyn ArticleReadRepository>,
    authors: Arc<dyn AuthorRepository>,
) -> Arc<ApplicationServices> {
    let clock: Arc<dyn Clock> = Arc::new(FixedClock::default());
    Arc::new(ApplicationServices::new(
        article_write,
        article_read,
        authors,
        clock,
    ))
}

pub fn build_test_state(services: Arc<ApplicationServices>) -> HttpState {
    HttpState {
        services,
        access_log: Arc::new(AccessLogConfig::new(
            &["ip", "latency", "status", "method", "url", "error"],
            None,
        )),
    }
}

/// インメモリストアに接続したテスト用ルーター
pub fn make_test_router(store: &Arc<InMemoryStore>) -> Router {
    let services = build_services(store.clone(), store.clone(), store.clone());
    build_router(build_test_state(services))
}

/// 任意のリポジトリ構成でルーターを組み立てる
pub fn make_test_router_with(
    article_write: Arc<dyn ArticleWriteRepository>,
    article_read: Arc<dyn ArticleReadRepository>,
    authors: Arc<dyn AuthorRepository>,
) -> Router {
    build_router(build_test_state(build_services(
        article_write,
        article_read,
        authors,
    )))
}

pub async fn send(router: &Router, request: Request<Body>) -> Response {
    router.clone().oneshot(request).await.expect("router is infallible")
}

pub async fn body_json(response: Response) -> Value {
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected a JSON body")
}

pub fn header_str<'a>(response: &'a Response, name: &str) -> Option<&'a str> {
    response.headers().get(name).and_then(|v| v.to_str().ok())
}

/// ErrorResponse 形式のレスポンスであることを検証する
pub async fn assert_error_response(
    response: Response,
    expected_status: StatusCode,
    expected_message: &str,
) -> Value {
    assert_eq!(response.status(), expected_status);
    let content_type = header_str(&response, "content-type").unwrap_or("").to_owned();
    assert!(
        content_type.starts_with("application/json"),
        "unexpected content-type: {content_type}"
    );
    let json = body_json(response).await;
    assert_eq!(json["code"], expected_status.as_u16());
    assert_eq!(json["message"], expected_message);
    json
}
