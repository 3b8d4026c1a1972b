//! Shared fixtures for driver tests.

use std::io::Cursor;
use std::sync::Arc;

use promptkit_ai::{ChatClient, MockTransport};
use promptkit_config::{ClientConfig, GenerationConfig};

use crate::console::Console;

pub(crate) type TestConsole = Console<Cursor<String>, Vec<u8>>;

pub(crate) fn mock_client(mock: &Arc<MockTransport>) -> ChatClient {
    let config = ClientConfig::new("sk-test", &GenerationConfig::default()).unwrap();
    ChatClient::with_transport(config, mock.clone())
}

pub(crate) fn console(input: &str) -> TestConsole {
    Console::new(Cursor::new(input.to_string()), Vec::new())
}

pub(crate) fn output(console: TestConsole) -> String {
    String::from_utf8(console.into_output()).unwrap()
}
