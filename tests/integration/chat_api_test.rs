//! End-to-end chat API tests: router + handlers + pipeline over a scripted LLM

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use colloquy_chat::ChatApiState;
use colloquy_llm::{LlmError, LlmRole, LlmService, RecordingLlmService};

fn app_with(llm: Arc<RecordingLlmService>) -> Router {
    let state = ChatApiState::new(llm as Arc<dyn LlmService>, "gpt-4o-mini");
    colloquy_chat::routes(state)
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
async fn test_chat_round_trip() {
    let llm = Arc::new(RecordingLlmService::with_reply("Hi there"));
    let app = app_with(llm.clone());

    let (status, body) = send(
        &app,
        Method::POST,
        "/v1/chat/messages",
        Some(json!({"content": "Hello"})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user_message"]["role"], "user");
    assert_eq!(body["user_message"]["content"], "Hello");
    assert_eq!(body["assistant_message"]["role"], "assistant");
    assert_eq!(body["assistant_message"]["content"], "Hi there");

    // Exactly one provider call, carrying the single user message.
    assert_eq!(llm.call_count(), 1);
    let request = &llm.requests()[0];
    assert_eq!(request.messages.len(), 1);
    assert_eq!(request.messages[0].role, LlmRole::User);
    assert_eq!(request.messages[0].content, "Hello");

    let (status, history) = send(&app, Method::GET, "/v1/chat/messages", None).await;
    assert_eq!(status, StatusCode::OK);
    let history = history.as_array().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["role"], "user");
    assert_eq!(history[1]["role"], "assistant");
}

#[tokio::test]
async fn test_multi_turn_sends_full_history_in_order() {
    let llm = Arc::new(RecordingLlmService::scripted(vec![
        Ok("First response".to_string()),
        Ok("Second response".to_string()),
    ]));
    let app = app_with(llm.clone());

    let (status, body) = send(
        &app,
        Method::POST,
        "/v1/chat/messages",
        Some(json!({"content": "one"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["assistant_message"]["content"], "First response");

    let (status, body) = send(
        &app,
        Method::POST,
        "/v1/chat/messages",
        Some(json!({"content": "two"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["assistant_message"]["content"], "Second response");

    assert_eq!(llm.call_count(), 2);
    let second = &llm.requests()[1];
    let wire: Vec<(LlmRole, &str)> = second
        .messages
        .iter()
        .map(|m| (m.role, m.content.as_str()))
        .collect();
    assert_eq!(
        wire,
        vec![
            (LlmRole::User, "one"),
            (LlmRole::Assistant, "First response"),
            (LlmRole::User, "two"),
        ]
    );

    let (_, history) = send(&app, Method::GET, "/v1/chat/messages", None).await;
    assert_eq!(history.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_pipeline_failure_keeps_user_message() {
    let llm = Arc::new(RecordingLlmService::failing(LlmError::Response(
        "insufficient quota".to_string(),
    )));
    let app = app_with(llm.clone());

    let (status, body) = send(
        &app,
        Method::POST,
        "/v1/chat/messages",
        Some(json!({"content": "Hello"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"]["code"], "UPSTREAM_ERROR");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("insufficient quota"));
    // The remediation hint rides along with the error.
    assert!(body["error"]["hint"].as_str().unwrap().contains("API key"));

    // The user message is retained; no synthetic assistant reply appears.
    let (_, history) = send(&app, Method::GET, "/v1/chat/messages", None).await;
    let history = history.as_array().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["role"], "user");
    assert_eq!(history[0]["content"], "Hello");
}

#[tokio::test]
async fn test_chat_continues_after_failure() {
    let llm = Arc::new(RecordingLlmService::scripted(vec![
        Err(LlmError::RateLimit),
        Ok("Recovered".to_string()),
    ]));
    let app = app_with(llm.clone());

    let (status, _) = send(
        &app,
        Method::POST,
        "/v1/chat/messages",
        Some(json!({"content": "first"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);

    let (status, body) = send(
        &app,
        Method::POST,
        "/v1/chat/messages",
        Some(json!({"content": "second"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["assistant_message"]["content"], "Recovered");

    // The failed turn's user message stays in the history sent upstream.
    let second = &llm.requests()[1];
    let contents: Vec<&str> = second.messages.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, vec!["first", "second"]);
}

#[tokio::test]
async fn test_empty_prompt_passes_through() {
    let llm = Arc::new(RecordingLlmService::with_reply("still replied"));
    let app = app_with(llm.clone());

    let (status, _) = send(
        &app,
        Method::POST,
        "/v1/chat/messages",
        Some(json!({"content": ""})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(llm.requests()[0].messages[0].content, "");
}

#[tokio::test]
async fn test_reset_clears_history() {
    let llm = Arc::new(RecordingLlmService::with_reply("ok"));
    let app = app_with(llm.clone());

    send(
        &app,
        Method::POST,
        "/v1/chat/messages",
        Some(json!({"content": "Hello"})),
    )
    .await;

    let (status, _) = send(&app, Method::DELETE, "/v1/chat/messages", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, history) = send(&app, Method::GET, "/v1/chat/messages", None).await;
    assert!(history.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_status_with_credential() {
    let llm = Arc::new(RecordingLlmService::with_reply("ok"));
    let app = app_with(llm);

    let (status, body) = send(&app, Method::GET, "/v1/chat/status", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["input_enabled"], true);
    assert_eq!(body["model"], "gpt-4o-mini");
    assert_eq!(body["message_count"], 0);
    assert!(body.get("notice").is_none());
}
