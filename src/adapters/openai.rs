use crate::config::file::CompletionConfig;
use crate::domain::ports::TextCompletion;
use crate::utils::error::{CadastroError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const SYSTEM_MESSAGE: &str = "Você é um assistente especializado em análise de notas fiscais \
                              brasileiras. Sempre responda em JSON válido.";

/// [`TextCompletion`] backed by an OpenAI-style `/chat/completions` endpoint.
///
/// Every transport, status and decode failure is surfaced uniformly as
/// `CompletionUnavailable`; the caller cannot tell (and does not need to
/// tell) an auth error from a timeout.
pub struct OpenAiCompletion {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl OpenAiCompletion {
    pub fn new(endpoint: String, model: String, api_key: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CadastroError::ConfigError {
                message: format!("failed to build HTTP client: {}", e),
            })?;

        tracing::debug!("Using completion API key: {}", masked(&api_key));

        Ok(Self {
            client,
            endpoint,
            model,
            api_key,
        })
    }

    pub fn from_config(config: &CompletionConfig) -> Result<Self> {
        Self::new(
            config.endpoint().to_string(),
            config.model().to_string(),
            config.api_key()?,
            Duration::from_secs(config.timeout_seconds()),
        )
    }
}

#[async_trait]
impl TextCompletion for OpenAiCompletion {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_MESSAGE,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: 0.1,
            max_tokens: 500,
        };

        tracing::debug!("Sending completion request to {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| CadastroError::CompletionUnavailable {
                message: format!("request failed: {}", e),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CadastroError::CompletionUnavailable {
                message: format!("unexpected status {}: {}", status, body),
            });
        }

        let envelope: ChatResponse =
            response
                .json()
                .await
                .map_err(|e| CadastroError::CompletionUnavailable {
                    message: format!("malformed response envelope: {}", e),
                })?;

        let content = envelope
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| CadastroError::CompletionUnavailable {
                message: "response contained no choices".to_string(),
            })?;

        Ok(content.trim().to_string())
    }
}

fn masked(api_key: &str) -> String {
    if api_key.len() > 14 && api_key.is_ascii() {
        format!("{}...{}", &api_key[..10], &api_key[api_key.len() - 4..])
    } else {
        "***".to_string()
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}
