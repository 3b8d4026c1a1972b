//! Scripted transport for deterministic tests.
//!
//! Replies are served in the order they were queued. Once the script runs
//! out, every call gets `mock reply <n>`, where `n` counts calls from 1.
//! Every request is recorded for later inspection.
//!
//! # Example
//!
//! ```rust,ignore
//! let transport = MockTransport::new()
//!     .with_reply("Hello!")
//!     .with_failure("connection reset");
//!
//! // First call replies "Hello!", second fails with a network error.
//! ```

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::{AiError, AiResponse, ChatRequest, ChatTransport, TokenUsage};

#[derive(Debug, Clone)]
enum Scripted {
    Reply(String),
    Failure(String),
}

#[derive(Debug, Default)]
pub struct MockTransport {
    script: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply.
    pub fn with_reply(self, content: impl Into<String>) -> Self {
        self.push(Scripted::Reply(content.into()));
        self
    }

    /// Queue a network failure.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.push(Scripted::Failure(message.into()));
        self
    }

    fn push(&self, entry: Scripted) {
        self.script
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push_back(entry);
    }

    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

#[async_trait]
impl ChatTransport for MockTransport {
    async fn send(&self, request: &ChatRequest) -> Result<AiResponse, AiError> {
        let call = {
            let mut requests = self
                .requests
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            requests.push(request.clone());
            requests.len()
        };

        let next = self
            .script
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .pop_front();

        let content = match next {
            Some(Scripted::Failure(message)) => return Err(AiError::NetworkError(message)),
            Some(Scripted::Reply(content)) => content,
            None => format!("mock reply {call}"),
        };

        let input_tokens = request
            .messages
            .iter()
            .map(|m| m.content.split_whitespace().count() as u64)
            .sum();
        let output_tokens = content.split_whitespace().count() as u64;

        Ok(AiResponse {
            content,
            model: None,
            usage: TokenUsage {
                input_tokens,
                output_tokens,
            },
        })
    }
}
