//! Mock LLM service implementations
//!
//! `MockLlmService` returns deterministic responses for local runs without a
//! credential. `RecordingLlmService` (feature `test-support`) additionally
//! captures every request and replays scripted results, for call-count and
//! message-order assertions in tests.

use crate::{CompletionRequest, CompletionResponse, LlmError, LlmService};

/// Mock LLM service for testing
#[derive(Debug, Clone, Default)]
pub struct MockLlmService;

impl MockLlmService {
    /// Create a new mock LLM service
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl LlmService for MockLlmService {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        tracing::info!("Mock LLM service processing completion request");

        let model = if request.model.is_empty() {
            "mock-model".to_string()
        } else {
            request.model
        };

        // Generate a simple response based on the last message
        let last_message = request
            .messages
            .last()
            .map(|m| m.content.as_str())
            .unwrap_or("empty");

        let content = format!("Mock response to: {}", last_message);
        let input_tokens = request
            .messages
            .iter()
            .map(|m| m.content.len() as i32 / 4)
            .sum::<i32>();
        let output_tokens = content.len() as i32 / 4;

        Ok(CompletionResponse {
            content,
            model,
            input_tokens,
            output_tokens,
            stop_reason: "stop".to_string(),
        })
    }

    fn default_model(&self) -> &str {
        "mock-model"
    }
}

/// Scripted LLM service that records every request it receives.
///
/// Replies are consumed front to back; once the script runs out, further
/// calls answer with an empty completion.
#[cfg(feature = "test-support")]
pub struct RecordingLlmService {
    replies: std::sync::Mutex<std::collections::VecDeque<Result<String, LlmError>>>,
    requests: std::sync::Mutex<Vec<CompletionRequest>>,
}

#[cfg(feature = "test-support")]
impl RecordingLlmService {
    /// Service that answers every call with the given content
    pub fn with_reply(content: impl Into<String>) -> Self {
        Self::scripted(vec![Ok(content.into())])
    }

    /// Service whose first call fails with the given error
    pub fn failing(error: LlmError) -> Self {
        Self::scripted(vec![Err(error)])
    }

    /// Service that replays the given results in order
    pub fn scripted(replies: Vec<Result<String, LlmError>>) -> Self {
        Self {
            replies: std::sync::Mutex::new(replies.into()),
            requests: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// Every request received so far, in call order
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of completion calls received
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[cfg(feature = "test-support")]
#[async_trait::async_trait]
impl LlmService for RecordingLlmService {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let model = if request.model.is_empty() {
            "scripted-model".to_string()
        } else {
            request.model.clone()
        };

        self.requests.lock().unwrap().push(request);

        let scripted = self.replies.lock().unwrap().pop_front();
        let content = match scripted {
            Some(Ok(content)) => content,
            Some(Err(error)) => return Err(error),
            None => String::new(),
        };

        Ok(CompletionResponse {
            content,
            model,
            input_tokens: 0,
            output_tokens: 0,
            stop_reason: "stop".to_string(),
        })
    }

    fn default_model(&self) -> &str {
        "scripted-model"
    }
}
