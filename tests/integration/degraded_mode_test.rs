//! Degraded-mode tests: behavior when no API credential is configured

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use colloquy_common::Config;

fn degraded_config() -> Config {
    Config {
        openai_api_key: None,
        openai_base_url: "https://api.openai.com/v1".to_string(),
        openai_model: "gpt-4o-mini".to_string(),
        rust_log: "colloquy=debug".to_string(),
        port: 3000,
    }
}

async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(value) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn test_submission_route_not_mounted() {
    let app = colloquy_app::create_app(&degraded_config());

    // The POST method is never offered, so the pipeline cannot be reached.
    let (status, _) = send(
        &app,
        Method::POST,
        "/v1/chat/messages",
        Some(json!({"content": "Hello"})),
    )
    .await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_status_carries_notice() {
    let app = colloquy_app::create_app(&degraded_config());

    let (status, body) = send(&app, Method::GET, "/v1/chat/status", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["input_enabled"], false);
    assert_eq!(body["model"], Value::Null);
    assert!(body["notice"]
        .as_str()
        .unwrap()
        .contains("OPENAI_API_KEY"));
}

#[tokio::test]
async fn test_history_and_reset_remain_available() {
    let app = colloquy_app::create_app(&degraded_config());

    let (status, history) = send(&app, Method::GET, "/v1/chat/messages", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(history.as_array().unwrap().is_empty());

    let (status, _) = send(&app, Method::DELETE, "/v1/chat/messages", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = colloquy_app::create_app(&degraded_config());

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
