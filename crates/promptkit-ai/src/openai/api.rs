//! ChatTransport implementation for OpenAiTransport.

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

use crate::{AiError, AiResponse, ChatRequest, ChatTransport};

use super::client::{error_message, parse_response, OpenAiTransport};

#[async_trait]
impl ChatTransport for OpenAiTransport {
    async fn send(&self, request: &ChatRequest) -> Result<AiResponse, AiError> {
        debug!(url = %self.url, model = %request.model, "OpenAI API request");

        let response = self
            .http
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| AiError::NetworkError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AiError::NetworkError(e.to_string()))?;

        match status {
            StatusCode::TOO_MANY_REQUESTS => Err(AiError::RateLimited),
            StatusCode::UNAUTHORIZED => Err(AiError::AuthenticationFailed(error_message(&body))),
            s if !s.is_success() => Err(AiError::ApiError(format!(
                "HTTP {s}: {}",
                error_message(&body)
            ))),
            _ => parse_response(&body),
        }
    }
}
