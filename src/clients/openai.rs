//! OpenAI-compatible chat completions client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clients::traits::CompletionModel;
use crate::config::Config;
use crate::error::{IdeaBriefError, Result};

/// HTTP client for an OpenAI-compatible `/chat/completions` endpoint.
///
/// Holds the credential and base URL for the lifetime of the process; one
/// instance is created at startup and shared across requests. No retries:
/// a failed call surfaces immediately as a gateway error.
pub struct OpenAIChatClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl OpenAIChatClient {
    pub fn new(cfg: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(cfg.http_timeout_ms))
            .build()
            .map_err(|e| IdeaBriefError::Config {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            api_key: cfg.api_key.clone(),
            base_url: cfg.base_url.clone(),
            model: cfg.model.clone(),
        })
    }
}

#[async_trait]
impl CompletionModel for OpenAIChatClient {
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String> {
        debug!(
            "Requesting completion (model={}, max_tokens={}, prompt_chars={})",
            self.model,
            max_tokens,
            prompt.len()
        );

        let body = ChatRequest {
            model: &self.model,
            max_tokens,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(IdeaBriefError::Gateway {
                message: format!("completion API error {status}: {error_text}"),
            });
        }

        let parsed: ChatResponse = response.json().await?;
        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| IdeaBriefError::Gateway {
                message: "completion API returned no choices".to_string(),
            })
    }
}
