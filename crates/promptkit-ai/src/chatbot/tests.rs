//! Tests for chatbot turns and reset.

use std::sync::Arc;

use promptkit_config::{ClientConfig, GenerationConfig};

use super::*;
use crate::mock::MockTransport;
use crate::{ChatClient, Message, Role};

fn bot(mock: &Arc<MockTransport>, system: Option<&str>) -> ChatBot {
    let config = ClientConfig::new("sk-test", &GenerationConfig::default()).unwrap();
    let client = ChatClient::with_transport(config, mock.clone());
    ChatBot::new(client, system.map(String::from))
}

#[test]
fn starts_with_system_prompt() {
    let mock = Arc::new(MockTransport::new());
    let bot = bot(&mock, Some("be nice"));
    assert_eq!(bot.messages(), &[Message::system("be nice")]);
    assert_eq!(bot.system_prompt(), Some("be nice"));
    assert_eq!(bot.state(), ChatState::Active);
}

#[test]
fn starts_empty_without_system_prompt() {
    let mock = Arc::new(MockTransport::new());
    let bot = bot(&mock, None);
    assert_eq!(bot.message_count(), 0);
    assert!(bot.system_prompt().is_none());
}

#[tokio::test]
async fn chat_appends_user_then_assistant() {
    let mock = Arc::new(MockTransport::new().with_reply("Hi there!"));
    let mut bot = bot(&mock, None);

    let completion = bot.chat("hello").await;

    assert_eq!(completion.text(), Some("Hi there!"));
    assert_eq!(
        bot.messages(),
        &[Message::user("hello"), Message::assistant("Hi there!")]
    );
}

#[tokio::test]
async fn chat_sends_full_history() {
    let mock = Arc::new(MockTransport::new());
    let mut bot = bot(&mock, Some("sys"));

    bot.chat("one").await;
    bot.chat("two").await;

    let requests = mock.requests();
    assert_eq!(requests[0].messages.len(), 2);
    assert_eq!(requests[1].messages.len(), 4);
    assert_eq!(requests[1].messages[0], Message::system("sys"));
    assert_eq!(requests[1].messages[2].role, Role::Assistant);
    assert_eq!(requests[1].messages[3], Message::user("two"));
}

#[tokio::test]
async fn failed_turn_still_appends_two_messages() {
    let mock = Arc::new(MockTransport::new().with_failure("timed out"));
    let mut bot = bot(&mock, None);

    let completion = bot.chat("hello").await;

    assert!(completion.is_failed());
    assert_eq!(bot.message_count(), 2);
    assert!(bot.messages()[1].content.starts_with("Error:"));
    assert_eq!(bot.tracker().replies(), 0);
}

#[tokio::test]
async fn reset_keeps_leading_system_message() {
    let mock = Arc::new(MockTransport::new());
    let mut bot = bot(&mock, Some("sys"));
    bot.chat("a").await;
    bot.chat("b").await;
    assert_eq!(bot.message_count(), 5);

    bot.reset();

    assert_eq!(bot.messages(), &[Message::system("sys")]);
    assert_eq!(bot.state(), ChatState::Reset);
}

#[tokio::test]
async fn reset_without_system_message_empties_transcript() {
    let mock = Arc::new(MockTransport::new());
    let mut bot = bot(&mock, None);
    bot.chat("a").await;
    bot.chat("b").await;

    bot.reset();

    assert!(bot.messages().is_empty());
}

#[tokio::test]
async fn chat_after_reset_is_active_again() {
    let mock = Arc::new(MockTransport::new());
    let mut bot = bot(&mock, Some("sys"));
    bot.reset();
    bot.chat("again").await;

    assert_eq!(bot.state(), ChatState::Active);
    assert_eq!(bot.message_count(), 3);
}

#[tokio::test]
async fn successful_turns_are_tracked_per_model() {
    let mock = Arc::new(MockTransport::new().with_reply("two words"));
    let mut bot = bot(&mock, None);

    bot.chat("one two three").await;

    assert_eq!(bot.tracker().replies(), 1);
    let (model, usage) = bot.tracker().models().next().unwrap();
    assert_eq!(model, "gpt-3.5-turbo");
    assert_eq!(usage.usage.input_tokens, 3);
    assert_eq!(usage.usage.output_tokens, 2);
}

#[tokio::test]
async fn overrides_apply_to_every_turn() {
    let mock = Arc::new(MockTransport::new());
    let mut bot = bot(&mock, None).with_overrides(
        crate::CompletionOverrides::new().with_temperature(0.0),
    );

    bot.chat("a").await;
    bot.chat("b").await;

    assert!(mock.requests().iter().all(|r| r.temperature == 0.0));
}

#[tokio::test]
async fn reset_keeps_token_totals() {
    let mock = Arc::new(MockTransport::new().with_reply("fine thanks"));
    let mut bot = bot(&mock, Some("sys"));
    bot.chat("how are you").await;

    bot.reset();

    assert_eq!(bot.tracker().replies(), 1);
    assert_eq!(bot.tracker().total().output_tokens, 2);
}
