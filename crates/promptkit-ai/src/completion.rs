//! Completion results and per-call overrides.

use std::fmt;

use crate::{AiError, TokenUsage};

/// Per-call parameters. `None` falls back to the client's configured default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompletionOverrides {
    pub model: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f64>,
}

impl CompletionOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Apply the bounds the config loader enforces on its own defaults:
    /// a non-empty model, at least one token, temperature within `[0.0, 1.0]`.
    pub fn validate(&self) -> Result<(), AiError> {
        if let Some(model) = &self.model {
            if model.trim().is_empty() {
                return Err(AiError::InvalidRequest("model must not be empty".into()));
            }
        }
        if self.max_tokens == Some(0) {
            return Err(AiError::InvalidRequest("max_tokens must be at least 1".into()));
        }
        if let Some(temperature) = self.temperature {
            if !(0.0..=1.0).contains(&temperature) {
                return Err(AiError::InvalidRequest(format!(
                    "temperature must be between 0 and 1, got {temperature}"
                )));
            }
        }
        Ok(())
    }
}

/// A successful model response.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub content: String,
    pub model: String,
    pub usage: TokenUsage,
}

/// Outcome of one completion: either the model's reply or the failure that
/// prevented it. Rendering with `Display` yields the reply text, or
/// `Error: <reason>` for failures.
#[derive(Debug)]
pub enum Completion {
    Reply(Reply),
    Failed(AiError),
}

impl Completion {
    pub fn is_reply(&self) -> bool {
        matches!(self, Self::Reply(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Reply text, if the call succeeded.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Reply(reply) => Some(&reply.content),
            Self::Failed(_) => None,
        }
    }

    pub fn reply(&self) -> Option<&Reply> {
        match self {
            Self::Reply(reply) => Some(reply),
            Self::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&AiError> {
        match self {
            Self::Reply(_) => None,
            Self::Failed(e) => Some(e),
        }
    }

    pub fn into_result(self) -> Result<Reply, AiError> {
        match self {
            Self::Reply(reply) => Ok(reply),
            Self::Failed(e) => Err(e),
        }
    }
}

impl fmt::Display for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reply(reply) => f.write_str(&reply.content),
            Self::Failed(e) => write!(f, "Error: {e}"),
        }
    }
}
