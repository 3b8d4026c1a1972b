//! The chat completion client.

use std::sync::Arc;

use promptkit_config::ClientConfig;
use tracing::{debug, warn};

use crate::completion::{Completion, CompletionOverrides, Reply};
use crate::openai::OpenAiTransport;
use crate::{AiError, ChatRequest, ChatTransport, Message};

/// Shapes requests from a transcript plus overrides and dispatches them.
///
/// Cloning is cheap; clones share the configuration and transport.
#[derive(Clone)]
pub struct ChatClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn ChatTransport>,
}

impl ChatClient {
    /// Create a client that talks to the configured HTTP endpoint.
    pub fn new(config: ClientConfig) -> Result<Self, AiError> {
        let transport = OpenAiTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    pub fn with_transport(config: ClientConfig, transport: Arc<dyn ChatTransport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the request body, filling unset overrides from the config.
    pub fn build_request(&self, messages: &[Message], overrides: &CompletionOverrides) -> ChatRequest {
        ChatRequest {
            model: overrides
                .model
                .clone()
                .unwrap_or_else(|| self.config.default_model.clone()),
            messages: messages.to_vec(),
            max_tokens: overrides.max_tokens.unwrap_or(self.config.max_tokens),
            temperature: overrides.temperature.unwrap_or(self.config.temperature),
        }
    }

    /// Send a transcript and return the first choice's text.
    ///
    /// Out-of-range overrides, transport errors and API failures are all
    /// returned as `Completion::Failed`.
    pub async fn complete_chat(
        &self,
        messages: &[Message],
        overrides: &CompletionOverrides,
    ) -> Completion {
        if let Err(e) = overrides.validate() {
            warn!(error = %e, "rejected completion overrides");
            return Completion::Failed(e);
        }

        let request = self.build_request(messages, overrides);
        debug!(
            model = %request.model,
            messages = request.messages.len(),
            max_tokens = request.max_tokens,
            temperature = request.temperature,
            "chat completion request"
        );

        match self.transport.send(&request).await {
            Ok(response) => Completion::Reply(Reply {
                content: response.content,
                model: response.model.unwrap_or(request.model),
                usage: response.usage,
            }),
            Err(e) => {
                warn!(model = %request.model, error = %e, "chat completion failed");
                Completion::Failed(e)
            }
        }
    }

    /// Complete a single user prompt.
    pub async fn complete_simple(
        &self,
        prompt: impl Into<String>,
        overrides: &CompletionOverrides,
    ) -> Completion {
        let messages = [Message::user(prompt)];
        self.complete_chat(&messages, overrides).await
    }

    /// Complete a user message under a system prompt.
    pub async fn complete_with_system(
        &self,
        system_prompt: impl Into<String>,
        user_message: impl Into<String>,
        overrides: &CompletionOverrides,
    ) -> Completion {
        let messages = [Message::system(system_prompt), Message::user(user_message)];
        self.complete_chat(&messages, overrides).await
    }
}
