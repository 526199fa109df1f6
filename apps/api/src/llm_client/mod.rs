/// LLM Client — the single point of entry for all model API calls in Floowbox.
///
/// No other module may call the provider API directly. Components that need a
/// model receive an `Arc<dyn LlmBackend>` so tests can substitute a fake.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;
#[cfg(test)]
pub mod testing;

pub const DEFAULT_API_URL: &str = "https://api.anthropic.com/v1/messages";
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-5";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// One initial attempt plus a single retry.
const MAX_ATTEMPTS: u32 = 2;
const RETRY_BACKOFF: Duration = Duration::from_millis(500);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Anything that can turn a prompt into model text.
#[async_trait]
pub trait LlmBackend: Send + Sync {
    fn model(&self) -> &str;

    async fn complete(&self, prompt: &str, system: &str) -> Result<String, LlmError>;
}

/// Calls the backend and deserializes its text response as JSON.
/// The prompt must instruct the model to return valid JSON.
pub async fn complete_json<T: DeserializeOwned>(
    backend: &dyn LlmBackend,
    prompt: &str,
    system: &str,
) -> Result<T, LlmError> {
    let text = backend.complete(prompt, system).await?;
    serde_json::from_str(strip_code_fence(&text)).map_err(LlmError::Parse)
}

/// Unwraps a Markdown code block (```` ```json ... ``` ```` or ```` ``` ... ``` ````)
/// if the whole text is one. Anything else is returned trimmed.
pub fn strip_code_fence(text: &str) -> &str {
    let text = text.trim();
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };

    // Drop the info string on the opening line, e.g. `json`.
    let body = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric()),
    };

    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

/// Connection settings for the hosted model.
#[derive(Debug, Clone)]
pub struct LlmSettings {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub timeout: Duration,
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl LlmResponse {
    /// Extracts the text content from the first text block.
    pub fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// Messages API client. Constructed once at startup and handed to the
/// components that need it.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    settings: LlmSettings,
}

impl LlmClient {
    pub fn new(settings: LlmSettings) -> Result<Self, LlmError> {
        let client = Client::builder().timeout(settings.timeout).build()?;
        Ok(Self { client, settings })
    }

    /// Makes a raw call to the Messages API, returning the full response object.
    /// Transport failures, 429 and 5xx are retried once after a short pause.
    pub async fn call(&self, prompt: &str, system: &str) -> Result<LlmResponse, LlmError> {
        let request_body = AnthropicRequest {
            model: &self.settings.model,
            max_tokens: self.settings.max_tokens,
            system,
            messages: vec![AnthropicMessage {
                role: "user",
                content: prompt,
            }],
        };

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_ATTEMPTS {
            if attempt > 0 {
                if let Some(err) = &last_error {
                    warn!(
                        "LLM call failed ({err}), retrying after {}ms",
                        RETRY_BACKOFF.as_millis()
                    );
                }
                tokio::time::sleep(RETRY_BACKOFF).await;
            }

            let response = self
                .client
                .post(&self.settings.api_url)
                .header("x-api-key", &self.settings.api_key)
                .header("anthropic-version", ANTHROPIC_VERSION)
                .header("content-type", "application/json")
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Transport(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<AnthropicError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let llm_response: LlmResponse = response.json().await?;

            if let Some(usage) = &llm_response.usage {
                debug!(
                    "LLM call succeeded: input_tokens={}, output_tokens={}",
                    usage.input_tokens, usage.output_tokens
                );
            }

            return Ok(llm_response);
        }

        Err(last_error.unwrap_or(LlmError::EmptyContent))
    }
}

#[async_trait]
impl LlmBackend for LlmClient {
    fn model(&self) -> &str {
        &self.settings.model
    }

    async fn complete(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
        let response = self.call(prompt, system).await?;
        response
            .text()
            .filter(|t| !t.trim().is_empty())
            .map(str::to_string)
            .ok_or(LlmError::EmptyContent)
    }
}
