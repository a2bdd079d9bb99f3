#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use souk_api::app::build_app;
use souk_api::config::ServerConfig;
use souk_api::state::AppState;
use souk_events::{EventBus, SearchIndexer};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:9000".to_string()],
        request_timeout_secs: 30,
        database_url: String::new(),
        db_max_connections: 5,
        event_bus_capacity: 1024,
    }
}

/// Build the full application router over `pool`, with a search indexer
/// running in the background exactly as in `main.rs`.
pub fn build_test_app(pool: PgPool) -> Router {
    let event_bus = Arc::new(EventBus::default());
    tokio::spawn(SearchIndexer::run(pool.clone(), event_bus.subscribe()));

    build_app(AppState {
        pool,
        config: Arc::new(test_config()),
        event_bus,
    })
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn with_json(
    app: &Router,
    method: Method,
    uri: &str,
    content_type: &str,
    body: Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> Response<Body> {
    with_json(app, Method::POST, uri, "application/json", body).await
}

pub async fn put_json(app: &Router, uri: &str, body: Value) -> Response<Body> {
    with_json(app, Method::PUT, uri, "application/json", body).await
}

/// PATCH with `application/merge-patch+json`.
pub async fn patch_json(app: &Router, uri: &str, body: Value) -> Response<Body> {
    with_json(app, Method::PATCH, uri, "application/merge-patch+json", body).await
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// `GET {uri}/count` as a number.
pub async fn count(app: &Router, resource: &str) -> i64 {
    let response = get(app, &format!("{resource}/count")).await;
    body_json(response).await.as_i64().unwrap()
}

/// Poll `check` every 100ms until it returns `true` or 5 seconds pass.
pub async fn eventually<F, Fut>(mut check: F) -> bool
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = bool>,
{
    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    loop {
        if check().await {
            return true;
        }
        if tokio::time::Instant::now() >= deadline {
            return false;
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
}
