//! Route definitions for the chat domain API

use axum::{routing::get, Router};

use super::handlers::{messages, status};
use super::middleware::ChatApiState;

/// Create the chat domain routes.
///
/// Without a responder the POST route is not mounted at all, so the
/// pipeline is unreachable; history, reset and the status notice remain.
pub fn routes(state: ChatApiState) -> Router {
    let message_methods = get(messages::list_messages).delete(messages::reset_conversation);
    let message_methods = if state.input_enabled() {
        message_methods.post(messages::send_message)
    } else {
        message_methods
    };

    Router::new()
        .route("/v1/chat/messages", message_methods)
        .route("/v1/chat/status", get(status::chat_status))
        .with_state(state)
}
