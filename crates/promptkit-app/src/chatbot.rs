//! Chatbot examples: interactive loop, specialized personalities, and a
//! memory demonstration, selected from a numbered menu.

use std::io::{BufRead, Write};

use promptkit_ai::{ChatBot, ChatClient};
use promptkit_common::PromptkitError;
use tracing::info;

use crate::console::Console;

pub const MENU_PROMPT: &str = "Choose an option:\n\
    1. Interactive Chat\n\
    2. Specialized Bot Examples\n\
    3. Memory Example\n\
    Enter (1/2/3): ";

const ASSISTANT_PROMPT: &str = "You are a helpful, friendly, and knowledgeable assistant. \
    You should be conversational and engaging while providing accurate and useful information. \
    Keep responses concise but informative.";

const MEMORY_PROMPT: &str = "You are a helpful assistant with a good memory for details.";

/// A specialized bot: heading, personality, and the one question it is asked.
struct Persona {
    title: &'static str,
    system_prompt: &'static str,
    question: &'static str,
}

static PERSONAS: [Persona; 3] = [
    Persona {
        title: "Coding Assistant Bot",
        system_prompt: "You are a programming expert and tutor. You help people learn to code \
            and solve programming problems. You provide clear explanations and well-commented code examples.",
        question: "How do I sort a list in Python?",
    },
    Persona {
        title: "Creative Writing Assistant Bot",
        system_prompt: "You are a creative writing assistant. You help with storytelling, \
            character development, plot ideas, and writing techniques. You're encouraging and constructive.",
        question: "I'm stuck on my novel. My main character feels flat. Any suggestions?",
    },
    Persona {
        title: "Study Buddy Bot",
        system_prompt: "You are a study buddy who helps students learn. You break down complex \
            topics into simple explanations, create study plans, and use analogies to make learning fun.",
        question: "Can you explain photosynthesis in simple terms?",
    },
];

const MEMORY_TURNS: [&str; 3] = [
    "My name is Alice and I'm a software engineer.",
    "What's my profession again?",
    "What did I tell you about myself?",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Interactive,
    Specialized,
    Memory,
    /// Anything unrecognized runs the specialized and memory examples.
    All,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => Self::Interactive,
            "2" => Self::Specialized,
            "3" => Self::Memory,
            _ => Self::All,
        }
    }
}

/// Show the menu, read a choice, and run the selected example.
pub async fn run_menu<R, W>(
    client: &ChatClient,
    console: &mut Console<R, W>,
) -> Result<(), PromptkitError>
where
    R: BufRead,
    W: Write,
{
    let input = console
        .prompt(MENU_PROMPT)?
        .ok_or_else(|| PromptkitError::Other("no menu choice entered".into()))?;

    match MenuChoice::parse(&input) {
        MenuChoice::Interactive => interactive_chat(client, console).await,
        MenuChoice::Specialized => specialized_bots(client, console).await,
        MenuChoice::Memory => memory_example(client, console).await,
        MenuChoice::All => {
            console.line("Running all examples...")?;
            specialized_bots(client, console).await?;
            memory_example(client, console).await
        }
    }
}

/// Read-eval-print loop until `quit` or end of input.
pub async fn interactive_chat<R, W>(
    client: &ChatClient,
    console: &mut Console<R, W>,
) -> Result<(), PromptkitError>
where
    R: BufRead,
    W: Write,
{
    console.line("Interactive ChatBot")?;
    console.rule('=', 50)?;
    console.line("Type 'quit' to exit, 'reset' to start a new conversation")?;
    console.blank()?;

    let mut bot = ChatBot::with_system_prompt(client.clone(), ASSISTANT_PROMPT);

    loop {
        let Some(input) = console.prompt("You: ")? else {
            console.blank()?;
            console.line("Goodbye!")?;
            break;
        };

        if input.eq_ignore_ascii_case("quit") {
            console.line("Goodbye!")?;
            break;
        }
        if input.eq_ignore_ascii_case("reset") {
            bot.reset();
            console.line("Conversation reset!")?;
            continue;
        }
        if input.is_empty() {
            continue;
        }

        let completion = bot.chat(input).await;
        console.line(format_args!("Bot: {completion}"))?;
        console.blank()?;
    }

    let tracker = bot.tracker();
    let total = tracker.total();
    info!(
        replies = tracker.replies(),
        input_tokens = total.input_tokens,
        output_tokens = total.output_tokens,
        "chat session ended"
    );
    for (model, used) in tracker.models() {
        info!(
            model,
            replies = used.replies,
            input_tokens = used.usage.input_tokens,
            output_tokens = used.usage.output_tokens,
            "token usage by model"
        );
    }
    Ok(())
}

/// One question each to three bots with different personalities.
pub async fn specialized_bots<R, W>(
    client: &ChatClient,
    console: &mut Console<R, W>,
) -> Result<(), PromptkitError>
where
    R: BufRead,
    W: Write,
{
    console.line("Specialized Chatbot Examples")?;
    console.rule('=', 50)?;

    for (i, persona) in PERSONAS.iter().enumerate() {
        console.blank()?;
        console.line(format_args!("{}. {}:", i + 1, persona.title))?;

        let mut bot = ChatBot::with_system_prompt(client.clone(), persona.system_prompt);
        let completion = bot.chat(persona.question).await;
        console.line(format_args!("User: {}", persona.question))?;
        console.line(format_args!("Bot: {completion}"))?;
    }
    Ok(())
}

/// Three turns on one bot, each relying on the earlier context.
pub async fn memory_example<R, W>(
    client: &ChatClient,
    console: &mut Console<R, W>,
) -> Result<(), PromptkitError>
where
    R: BufRead,
    W: Write,
{
    console.blank()?;
    console.blank()?;
    console.line("Conversation Memory Example")?;
    console.rule('=', 50)?;

    let mut bot = ChatBot::with_system_prompt(client.clone(), MEMORY_PROMPT);

    for (i, turn) in MEMORY_TURNS.iter().enumerate() {
        let completion = bot.chat(*turn).await;
        if i > 0 {
            console.blank()?;
        }
        console.line(format_args!("User: {turn}"))?;
        console.line(format_args!("Bot: {completion}"))?;
    }
    Ok(())
}
