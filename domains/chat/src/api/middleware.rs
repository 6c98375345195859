//! Chat domain state

use std::sync::Arc;

use colloquy_llm::LlmService;
use tokio::sync::Mutex;

use crate::domain::entities::Conversation;

/// The session conversation, shared across handlers.
///
/// Handlers that mutate the conversation hold this lock for the whole turn,
/// which also serializes submissions: a second one waits until the first
/// completes.
pub type SharedConversation = Arc<Mutex<Conversation>>;

/// The configured responder. Absent when no API credential is configured;
/// the submission route is then never mounted.
#[derive(Clone)]
pub struct Responder {
    pub llm: Arc<dyn LlmService>,
    pub model: String,
}

/// Application state for the chat domain
#[derive(Clone)]
pub struct ChatApiState {
    pub session: SharedConversation,
    pub responder: Option<Responder>,
}

impl ChatApiState {
    /// State with a responder: message submission is offered.
    pub fn new(llm: Arc<dyn LlmService>, model: impl Into<String>) -> Self {
        Self {
            session: Arc::new(Mutex::new(Conversation::new())),
            responder: Some(Responder {
                llm,
                model: model.into(),
            }),
        }
    }

    /// Degraded state: history and reset only, no submission.
    pub fn degraded() -> Self {
        Self {
            session: Arc::new(Mutex::new(Conversation::new())),
            responder: None,
        }
    }

    /// Whether message submission is offered
    pub fn input_enabled(&self) -> bool {
        self.responder.is_some()
    }
}
