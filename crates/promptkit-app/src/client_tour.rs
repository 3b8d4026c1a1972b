//! A quick tour of the three client operations.

use std::io::{BufRead, Write};

use promptkit_ai::{ChatClient, CompletionOverrides, Message};
use promptkit_common::PromptkitError;

use crate::console::Console;

/// The multi-turn transcript sent by the third example.
pub fn mystery_transcript() -> Vec<Message> {
    vec![
        Message::system("You are a creative writing assistant."),
        Message::user("Write the first sentence of a mystery novel."),
        Message::assistant(
            "The old lighthouse keeper hadn't been seen for three days, but his light still \
             swept across the harbor every night at exactly midnight.",
        ),
        Message::user("Continue the story with the next sentence."),
    ]
}

pub async fn run<R, W>(client: &ChatClient, console: &mut Console<R, W>) -> Result<(), PromptkitError>
where
    R: BufRead,
    W: Write,
{
    let defaults = CompletionOverrides::new();

    console.line("Chat Client Tour")?;
    console.rule('=', 50)?;

    console.blank()?;
    console.line("1. Simple Completion:")?;
    let completion = client
        .complete_simple(
            "Explain what artificial intelligence is in one paragraph.",
            &defaults,
        )
        .await;
    console.line(format_args!("Response: {completion}"))?;

    console.blank()?;
    console.line("2. Conversation with System Prompt:")?;
    let completion = client
        .complete_with_system(
            "You are a helpful Python programming assistant.",
            "How do I read a CSV file in Python?",
            &defaults,
        )
        .await;
    console.line(format_args!("Response: {completion}"))?;

    console.blank()?;
    console.line("3. Multi-turn Conversation:")?;
    let completion = client.complete_chat(&mystery_transcript(), &defaults).await;
    console.line(format_args!("Response: {completion}"))?;

    Ok(())
}
