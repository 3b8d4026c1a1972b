//! In-memory chatbot conversation.
//!
//! A `ChatBot` owns its transcript, sends the whole history on every turn,
//! and can be reset back to its system prompt.

mod bot;
mod types;

#[cfg(test)]
mod tests;

pub use bot::ChatBot;
pub use types::ChatState;
