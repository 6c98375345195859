//! Message API handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use colloquy_common::{Error, Result};

use crate::api::middleware::ChatApiState;
use crate::domain::entities::{ChatMessage, ChatRole};
use crate::pipeline::{self, PipelineError};

/// Request for sending a message
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    /// Message content; passed through unvalidated, empty included
    pub content: String,
}

/// Message response DTO
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub role: ChatRole,
    pub content: String,
}

impl From<ChatMessage> for MessageResponse {
    fn from(m: ChatMessage) -> Self {
        Self {
            role: m.role,
            content: m.content,
        }
    }
}

/// Response for send message (includes both user and assistant messages)
#[derive(Debug, Serialize)]
pub struct SendMessageResponse {
    pub user_message: MessageResponse,
    pub assistant_message: MessageResponse,
}

/// Send a message to the conversation
pub async fn send_message(
    State(state): State<ChatApiState>,
    Json(req): Json<SendMessageRequest>,
) -> Result<(StatusCode, Json<SendMessageResponse>)> {
    // The route is only mounted when a responder exists.
    let responder = state
        .responder
        .as_ref()
        .ok_or_else(|| Error::Internal("chat input is not enabled".to_string()))?;

    // Hold the session lock for the whole turn; a second submission waits
    // until this one completes.
    let mut conversation = state.session.lock().await;

    let history = conversation.messages().to_vec();
    let user_message = ChatMessage::user(req.content.clone());
    conversation.append(user_message.clone());

    tracing::debug!(
        session = %conversation.id(),
        history = history.len(),
        "Invoking response pipeline"
    );

    // On failure the user message stays in the conversation and no
    // assistant reply is recorded.
    let reply = pipeline::respond(
        responder.llm.clone(),
        &responder.model,
        &history,
        &req.content,
    )
    .await
    .map_err(|e| match e {
        PipelineError::Execution(err) => Error::Upstream(err.to_string()),
        PipelineError::Compilation(err) => Error::Internal(err.to_string()),
    })?;

    let assistant_message = ChatMessage::assistant(reply);
    conversation.append(assistant_message.clone());

    Ok((
        StatusCode::CREATED,
        Json(SendMessageResponse {
            user_message: user_message.into(),
            assistant_message: assistant_message.into(),
        }),
    ))
}

/// List the conversation history in insertion order
pub async fn list_messages(
    State(state): State<ChatApiState>,
) -> Result<Json<Vec<MessageResponse>>> {
    let conversation = state.session.lock().await;

    let responses: Vec<MessageResponse> = conversation
        .messages()
        .iter()
        .cloned()
        .map(Into::into)
        .collect();
    Ok(Json(responses))
}

/// Clear the conversation wholesale
pub async fn reset_conversation(State(state): State<ChatApiState>) -> Result<StatusCode> {
    let mut conversation = state.session.lock().await;
    conversation.reset();

    tracing::debug!(session = %conversation.id(), "Conversation reset");
    Ok(StatusCode::NO_CONTENT)
}
