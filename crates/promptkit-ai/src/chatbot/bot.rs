//! ChatBot struct and conversation management.

use tracing::debug;

use crate::client::ChatClient;
use crate::completion::{Completion, CompletionOverrides};
use crate::token_tracker::TokenTracker;
use crate::{Message, Role};

use super::types::ChatState;

/// A conversation with message history.
pub struct ChatBot {
    client: ChatClient,
    /// Conversation history, oldest first. Starts with the system prompt, if any.
    transcript: Vec<Message>,
    /// Overrides applied to every turn.
    overrides: CompletionOverrides,
    tracker: TokenTracker,
    state: ChatState,
}

impl ChatBot {
    pub fn new(client: ChatClient, system_prompt: Option<String>) -> Self {
        let transcript = system_prompt
            .map(|prompt| vec![Message::system(prompt)])
            .unwrap_or_default();
        Self {
            client,
            transcript,
            overrides: CompletionOverrides::default(),
            tracker: TokenTracker::new(),
            state: ChatState::Active,
        }
    }

    pub fn with_system_prompt(client: ChatClient, prompt: impl Into<String>) -> Self {
        Self::new(client, Some(prompt.into()))
    }

    pub fn with_overrides(mut self, overrides: CompletionOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Add a user message and get the assistant's response.
    ///
    /// Both the user message and the rendered response are appended, so a
    /// failed call leaves its `Error: ...` text in the history.
    pub async fn chat(&mut self, user_input: impl Into<String>) -> Completion {
        self.transcript.push(Message::user(user_input));

        let completion = self
            .client
            .complete_chat(&self.transcript, &self.overrides)
            .await;

        if let Some(reply) = completion.reply() {
            self.tracker.record(reply);
        }

        self.transcript.push(Message::assistant(completion.to_string()));
        self.state = ChatState::Active;
        completion
    }

    /// Drop every exchange, keeping only a leading system prompt.
    pub fn reset(&mut self) {
        let keep = usize::from(self.system_prompt().is_some());
        self.transcript.truncate(keep);
        self.state = ChatState::Reset;
        debug!(kept = keep, "conversation reset");
    }

    pub fn system_prompt(&self) -> Option<&str> {
        self.transcript
            .first()
            .filter(|m| m.role == Role::System)
            .map(|m| m.content.as_str())
    }

    /// Get the full conversation history.
    pub fn messages(&self) -> &[Message] {
        &self.transcript
    }

    pub fn message_count(&self) -> usize {
        self.transcript.len()
    }

    pub fn state(&self) -> ChatState {
        self.state
    }

    pub fn tracker(&self) -> &TokenTracker {
        &self.tracker
    }
}
