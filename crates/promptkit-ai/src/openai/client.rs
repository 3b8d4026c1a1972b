//! Transport struct, response parsing, and error body extraction.

use std::fmt;

use promptkit_config::ClientConfig;
use serde::Deserialize;

use crate::{AiError, AiResponse, TokenUsage};

/// HTTP transport for the chat completions endpoint.
pub struct OpenAiTransport {
    pub(crate) url: String,
    pub(crate) api_key: String,
    pub(crate) http: reqwest::Client,
}

impl fmt::Debug for OpenAiTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiTransport")
            .field("url", &self.url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl OpenAiTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("promptkit/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AiError::NetworkError(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            url: config.completions_url(),
            api_key: config.api_key.clone(),
            http,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[derive(Deserialize)]
struct CompletionBody {
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    choices: Vec<ChoiceBody>,
    #[serde(default)]
    usage: Option<UsageBody>,
}

#[derive(Deserialize)]
struct ChoiceBody {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct UsageBody {
    #[serde(default)]
    prompt_tokens: u64,
    #[serde(default)]
    completion_tokens: u64,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Parse a successful response body into the first choice's text.
pub(crate) fn parse_response(body: &str) -> Result<AiResponse, AiError> {
    let parsed: CompletionBody =
        serde_json::from_str(body).map_err(|e| AiError::ParseError(e.to_string()))?;

    let choice = parsed
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| AiError::ParseError("response contained no choices".into()))?;

    let usage = parsed
        .usage
        .map(|u| TokenUsage {
            input_tokens: u.prompt_tokens,
            output_tokens: u.completion_tokens,
        })
        .unwrap_or_default();

    Ok(AiResponse {
        content: choice.message.content.unwrap_or_default(),
        model: parsed.model,
        usage,
    })
}

/// Best human-readable message from an error response body.
pub(crate) fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.error.message,
        Err(_) => body.chars().take(200).collect(),
    }
}
