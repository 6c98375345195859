//! Colloquy application composition root
//!
//! Wires the chat domain router over the configured LLM service. With no
//! credential the app comes up in degraded mode: the submission route is
//! not mounted and the status endpoint carries the notice.

use std::sync::Arc;

use axum::Router;

use colloquy_chat::ChatApiState;
use colloquy_common::Config;
use colloquy_llm::{LlmConfig, LlmService, OpenAiService};

/// Temperature used for chat completions
const CHAT_TEMPERATURE: f32 = 0.7;

/// Create the main application router
pub fn create_app(config: &Config) -> Router {
    let chat_state = match &config.openai_api_key {
        Some(api_key) => {
            let llm: Arc<dyn LlmService> = Arc::new(OpenAiService::new(LlmConfig {
                api_key: api_key.clone(),
                base_url: Some(config.openai_base_url.clone()),
                default_model: config.openai_model.clone(),
                default_temperature: Some(CHAT_TEMPERATURE),
            }));
            ChatApiState::new(llm, config.openai_model.clone())
        }
        None => {
            tracing::warn!("OPENAI_API_KEY not set; chat input disabled");
            ChatApiState::degraded()
        }
    };

    Router::new()
        .route("/health", axum::routing::get(health_check))
        .route("/", axum::routing::get(|| async { "Colloquy API v0.1.0" }))
        .merge(colloquy_chat::routes(chat_state))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
