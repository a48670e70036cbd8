use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use backend::{startup::build_router, AppState};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    build_router(Arc::new(AppState::new("Rust Axum")))
}

async fn send(app: Router, method: Method, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, content_type, body.to_vec())
}

#[tokio::test]
async fn health_returns_ok_status() {
    let (status, content_type, body) = send(app(), Method::GET, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn root_returns_welcome_message() {
    let (status, content_type, body) = send(app(), Method::GET, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        body,
        json!({ "message": "Welcome from the Rust Axum service!" })
    );
}

#[tokio::test]
async fn welcome_uses_configured_service_name() {
    let app = build_router(Arc::new(AppState::new("Billing")));
    let (status, _, body) = send(app, Method::GET, "/").await;

    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["message"], "Welcome from the Billing service!");
}

#[tokio::test]
async fn repeated_requests_get_identical_bodies() {
    let app = app();
    let (_, _, first) = send(app.clone(), Method::GET, "/health").await;
    let (_, _, second) = send(app, Method::GET, "/health").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    for uri in ["/missing", "/health/extra", "/api/health"] {
        let (status, _, _) = send(app(), Method::GET, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "GET {}", uri);
    }
}

#[tokio::test]
async fn wrong_method_on_known_route_is_rejected() {
    let (status, _, _) = send(app(), Method::POST, "/health").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (status, _, _) = send(app(), Method::DELETE, "/").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
