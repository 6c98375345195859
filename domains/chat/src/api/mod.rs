//! API layer for the chat domain

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::{ChatApiState, Responder, SharedConversation};
pub use routes::routes;
