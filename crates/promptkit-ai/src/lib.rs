//! Chat completion client for OpenAI-compatible endpoints.
//!
//! Provides:
//! - `ChatClient` with raw, single-prompt and system+user completions
//! - `Completion`, a tagged result separating replies from failures
//! - `ChatBot`, an in-memory conversation on top of the client
//! - Token usage tracking
//! - A `ChatTransport` seam with an HTTP implementation and a scripted mock

pub mod chatbot;
pub mod client;
pub mod completion;
pub mod mock;
pub mod openai;
pub mod token_tracker;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use chatbot::{ChatBot, ChatState};
pub use client::ChatClient;
pub use completion::{Completion, CompletionOverrides, Reply};
pub use mock::MockTransport;
pub use openai::OpenAiTransport;
pub use token_tracker::{ModelUsage, TokenTracker};

/// Performs one completion exchange with the remote endpoint.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send(&self, request: &ChatRequest) -> Result<AiResponse, AiError>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// Request body for the chat completions endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub max_tokens: u32,
    pub temperature: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AiResponse {
    pub content: String,
    /// Model name reported by the endpoint, if any.
    pub model: Option<String>,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }

    /// Field-wise saturating sum.
    pub fn combine(&self, other: &TokenUsage) -> TokenUsage {
        TokenUsage {
            input_tokens: self.input_tokens.saturating_add(other.input_tokens),
            output_tokens: self.output_tokens.saturating_add(other.output_tokens),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl From<AiError> for promptkit_common::PromptkitError {
    fn from(e: AiError) -> Self {
        promptkit_common::PromptkitError::Ai(e.to_string())
    }
}
