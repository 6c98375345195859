//! Response pipeline: a fresh two-node graph per request
//!
//! `respond` builds the graph (`entry` feeding `model`), runs it over the
//! full conversation plus the new prompt, and extracts the reply from the
//! snapshot stream. The pipeline has no side effects beyond the provider
//! call and holds no state between requests.

use std::sync::Arc;

use async_trait::async_trait;

use colloquy_graph::{
    CompilationError, CompiledStateGraph, GraphError, Node, NodeError, StateGraph,
};
use colloquy_llm::{CompletionRequest, LlmMessage, LlmRole, LlmService};

use crate::domain::entities::{ChatMessage, ChatRole};

/// State threaded through the execution graph. Ephemeral: constructed fresh
/// per request, never persisted or shared.
#[derive(Debug, Clone, Default)]
pub struct PipelineState {
    pub messages: Vec<ChatMessage>,
}

/// Errors from a pipeline invocation
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Compilation(#[from] CompilationError),

    #[error(transparent)]
    Execution(#[from] GraphError),
}

/// Pass-through entry node; marks the start of the chain.
struct EntryNode;

#[async_trait]
impl Node<PipelineState> for EntryNode {
    fn id(&self) -> &str {
        "entry"
    }

    async fn run(&self, state: PipelineState) -> Result<PipelineState, NodeError> {
        Ok(state)
    }
}

/// Invokes the LLM with the entire message list and appends its reply.
struct ModelNode {
    llm: Arc<dyn LlmService>,
    model: String,
}

#[async_trait]
impl Node<PipelineState> for ModelNode {
    fn id(&self) -> &str {
        "model"
    }

    async fn run(&self, mut state: PipelineState) -> Result<PipelineState, NodeError> {
        let request = CompletionRequest {
            model: self.model.clone(),
            messages: state.messages.iter().map(to_llm_message).collect(),
            temperature: None,
            max_tokens: None,
        };

        let response = self.llm.complete(request).await.map_err(NodeError::from)?;
        state.messages.push(ChatMessage::assistant(response.content));
        Ok(state)
    }
}

fn to_llm_message(message: &ChatMessage) -> LlmMessage {
    LlmMessage {
        role: match message.role {
            ChatRole::User => LlmRole::User,
            ChatRole::Assistant => LlmRole::Assistant,
        },
        content: message.content.clone(),
    }
}

fn build_graph(
    llm: Arc<dyn LlmService>,
    model: &str,
) -> Result<CompiledStateGraph<PipelineState>, CompilationError> {
    let mut graph = StateGraph::new();
    graph.add_node("entry", Box::new(EntryNode));
    graph.add_node(
        "model",
        Box::new(ModelNode {
            llm,
            model: model.to_string(),
        }),
    );
    graph.add_edge("entry");
    graph.add_edge("model");
    graph.compile()
}

/// Produce the assistant's reply for the given history plus new prompt.
///
/// Issues exactly one provider call carrying all prior messages and the
/// prompt in original order. Provider failures propagate; nothing is
/// retried or swallowed.
pub async fn respond(
    llm: Arc<dyn LlmService>,
    model: &str,
    history: &[ChatMessage],
    prompt: &str,
) -> Result<String, PipelineError> {
    let mut messages = history.to_vec();
    messages.push(ChatMessage::user(prompt));

    let graph = build_graph(llm, model)?;
    let snapshots = graph.stream(PipelineState { messages }).await?;
    Ok(final_reply(&snapshots))
}

/// The content of the last message in the last snapshot that contains any
/// message; the empty string when no snapshot has one.
pub fn final_reply(snapshots: &[PipelineState]) -> String {
    snapshots
        .iter()
        .rev()
        .find_map(|snapshot| snapshot.messages.last())
        .map(|message| message.content.clone())
        .unwrap_or_default()
}
