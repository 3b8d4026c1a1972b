//! Example drivers for the promptkit chat client.
//!
//! Each driver takes a `ChatClient` and a `Console`, so the binaries wire
//! them to stdin/stdout while tests drive them with scripted input and a
//! mock transport.

pub mod bootstrap;
pub mod chatbot;
pub mod cli;
pub mod client_tour;
pub mod console;
pub mod logging;
pub mod text_generation;

#[cfg(test)]
mod test_support;

pub use console::Console;
