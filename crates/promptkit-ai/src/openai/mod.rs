//! OpenAI-compatible chat completions transport.
//!
//! Posts `{model, messages, max_tokens, temperature}` to
//! `<base_url>/chat/completions` with Bearer authentication and reads the
//! first choice's message content.

mod api;
mod client;


pub use client::OpenAiTransport;
