//! Chatbot state.

/// Where the conversation stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatState {
    /// Accepting turns; the transcript may hold any number of exchanges.
    Active,
    /// Just reset; the transcript holds at most the system prompt.
    Reset,
}
