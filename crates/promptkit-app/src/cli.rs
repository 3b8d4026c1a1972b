use std::path::PathBuf;

use clap::Parser;

/// Promptkit example drivers for an OpenAI-compatible chat API.
///
/// The API key is read from `OPENAI_API_KEY` (a `.env` file in the working
/// directory is honored).
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (e.g. `promptkit=debug`).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
