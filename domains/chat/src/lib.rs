//! Chat domain: session conversation store, response pipeline, API

pub mod api;
pub mod domain;
pub mod pipeline;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{ChatMessage, ChatRole, Conversation};

// Re-export pipeline surface
pub use pipeline::{final_reply, respond, PipelineError, PipelineState};

// Re-export API types
pub use api::routes;
pub use api::{ChatApiState, Responder, SharedConversation};
