//! Text generation examples, each a standalone completion with its own
//! sampling parameters.

use std::io::{BufRead, Write};

use promptkit_ai::{ChatClient, CompletionOverrides};
use promptkit_common::PromptkitError;

use crate::console::Console;

const STORY_PROMPT: &str = "Write a short story (3-4 paragraphs) about a robot who discovers \
    emotions for the first time. The story should be touching and explore themes of \
    consciousness and humanity.";

const SUMMARY_SOURCE: &str = "Artificial Intelligence (AI) is a branch of computer science that aims \
    to create intelligent machines that can think and learn like humans. The field of AI research was \
    founded at a conference at Dartmouth College in 1956, where the term \"artificial intelligence\" was \
    coined. AI encompasses various subfields including machine learning, natural language processing, \
    computer vision, and robotics. Machine learning, a subset of AI, focuses on the development of \
    algorithms that can learn from and make decisions based on data. Deep learning, which is a subset of \
    machine learning, uses neural networks with multiple layers to model and understand complex patterns \
    in data. AI has found applications in numerous industries including healthcare, finance, \
    transportation, and entertainment. Some notable AI achievements include defeating world champions in \
    chess and Go, enabling self-driving cars, and powering virtual assistants like Siri and Alexa. \
    However, AI also presents challenges including ethical concerns about bias and fairness, privacy \
    issues, and questions about the future impact on employment. As AI continues to advance, it's \
    important to develop it responsibly and consider its societal implications.";

const SUMMARY_SYSTEM: &str = "You are a helpful assistant that creates concise summaries.";

const TRANSLATION_SOURCE: &str = "Hello, how are you today? I hope you're having a wonderful day!";

pub const TRANSLATION_LANGUAGES: [&str; 4] = ["Spanish", "French", "German", "Japanese"];

const CODE_SYSTEM: &str =
    "You are a helpful programming assistant that writes clean, well-commented code.";

const CODE_REQUEST: &str = "Write a Python function that takes a list of numbers and returns:
1. The sum of all numbers
2. The average
3. The maximum and minimum values

The function should handle edge cases like empty lists.";

/// Story generation with a warmer temperature and a token cap.
pub async fn creative_writing<R, W>(
    client: &ChatClient,
    console: &mut Console<R, W>,
) -> Result<(), PromptkitError>
where
    R: BufRead,
    W: Write,
{
    console.line("Creative Writing Example")?;
    console.rule('-', 30)?;

    let overrides = CompletionOverrides::new()
        .with_temperature(0.8)
        .with_max_tokens(500);
    let completion = client.complete_simple(STORY_PROMPT, &overrides).await;

    console.line("Generated Story:")?;
    console.line(completion)?;
    Ok(())
}

/// Summarize a fixed passage under a system prompt, using config defaults.
pub async fn summarization<R, W>(
    client: &ChatClient,
    console: &mut Console<R, W>,
) -> Result<(), PromptkitError>
where
    R: BufRead,
    W: Write,
{
    console.blank()?;
    console.blank()?;
    console.line("Text Summarization Example")?;
    console.rule('-', 35)?;

    let user_message =
        format!("Please summarize the following text in 2-3 sentences:\n\n{SUMMARY_SOURCE}");
    let completion = client
        .complete_with_system(SUMMARY_SYSTEM, user_message, &CompletionOverrides::new())
        .await;

    console.line(format_args!(
        "Original text length: {}",
        SUMMARY_SOURCE.split_whitespace().count()
    ))?;
    console.blank()?;
    console.line("Summary:")?;
    console.line(completion)?;
    Ok(())
}

/// Translate one sentence into several languages at a low temperature.
pub async fn translation<R, W>(
    client: &ChatClient,
    console: &mut Console<R, W>,
) -> Result<(), PromptkitError>
where
    R: BufRead,
    W: Write,
{
    console.blank()?;
    console.blank()?;
    console.line("Language Translation Example")?;
    console.rule('-', 35)?;

    let overrides = CompletionOverrides::new().with_temperature(0.3);
    for language in TRANSLATION_LANGUAGES {
        let prompt =
            format!("Translate the following English text to {language}: '{TRANSLATION_SOURCE}'");
        let completion = client.complete_simple(prompt, &overrides).await;
        console.line(format_args!("{language}: {completion}"))?;
    }
    Ok(())
}

/// Code generation under a system prompt at a near-deterministic temperature.
pub async fn code_generation<R, W>(
    client: &ChatClient,
    console: &mut Console<R, W>,
) -> Result<(), PromptkitError>
where
    R: BufRead,
    W: Write,
{
    console.blank()?;
    console.blank()?;
    console.line("Code Generation Example")?;
    console.rule('-', 30)?;

    let overrides = CompletionOverrides::new().with_temperature(0.2);
    let completion = client
        .complete_with_system(CODE_SYSTEM, CODE_REQUEST, &overrides)
        .await;

    console.line("Generated Code:")?;
    console.line(completion)?;
    Ok(())
}

/// Run every example in order.
pub async fn run_all<R, W>(
    client: &ChatClient,
    console: &mut Console<R, W>,
) -> Result<(), PromptkitError>
where
    R: BufRead,
    W: Write,
{
    creative_writing(client, console).await?;
    summarization(client, console).await?;
    translation(client, console).await?;
    code_generation(client, console).await
}
