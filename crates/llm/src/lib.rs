//! LLM service abstraction for Colloquy
//!
//! Defines the provider-agnostic `LlmService` trait plus the request and
//! response types shared by implementations. The real implementation is
//! `OpenAiService` (Chat Completions API); `mock` holds the test doubles.

pub mod mock;
pub mod openai;

pub use mock::MockLlmService;
#[cfg(feature = "test-support")]
pub use mock::RecordingLlmService;
pub use openai::OpenAiService;

/// Role of a chat message sent to the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmRole {
    User,
    Assistant,
}

/// A single chat message in provider-neutral form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmMessage {
    pub role: LlmRole,
    pub content: String,
}

/// Request for a single completion
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Model to use; empty string selects the service default
    pub model: String,
    /// Full ordered message list, oldest first
    pub messages: Vec<LlmMessage>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

/// Response from a completion call
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionResponse {
    pub content: String,
    pub model: String,
    pub input_tokens: i32,
    pub output_tokens: i32,
    pub stop_reason: String,
}

/// LLM provider configuration
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    /// Base URL override; `None` uses the provider default
    pub base_url: Option<String>,
    pub default_model: String,
    pub default_temperature: Option<f32>,
}

/// Errors from an LLM provider call
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Rate limit exceeded")]
    RateLimit,

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Invalid response: {0}")]
    Response(String),
}

/// Provider-agnostic completion service
#[async_trait::async_trait]
pub trait LlmService: Send + Sync {
    /// Issue one completion call with the full message list
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError>;

    /// The model used when a request does not name one
    fn default_model(&self) -> &str;
}
