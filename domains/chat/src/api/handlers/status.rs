//! Chat status handler

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::api::middleware::ChatApiState;

/// Static notice shown when no API credential is configured
pub const MISSING_CREDENTIAL_NOTICE: &str =
    "OpenAI API key not found. Set the OPENAI_API_KEY environment variable to enable chat input.";

/// Chat status DTO
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub input_enabled: bool,
    pub model: Option<String>,
    pub session_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub message_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<&'static str>,
}

/// Report whether input is offered, the configured model, and session info
pub async fn chat_status(State(state): State<ChatApiState>) -> Json<StatusResponse> {
    let conversation = state.session.lock().await;

    let model = state.responder.as_ref().map(|r| r.model.clone());
    let notice = if state.input_enabled() {
        None
    } else {
        Some(MISSING_CREDENTIAL_NOTICE)
    };

    Json(StatusResponse {
        input_enabled: state.input_enabled(),
        model,
        session_id: conversation.id(),
        started_at: conversation.started_at(),
        message_count: conversation.len(),
        notice,
    })
}
