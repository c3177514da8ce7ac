//! Chat-completions backend.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{OpenAiConfig, handle_error_response};
use crate::error::ClassifyError;
use crate::traits::TextGenerator;

/// [`TextGenerator`] over an OpenAI-compatible `/chat/completions` endpoint.
#[derive(Debug, Clone)]
pub struct OpenAiChatClient {
    config: OpenAiConfig,
    http_client: reqwest::Client,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatRequestMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatRequestMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl OpenAiChatClient {
    pub fn new(config: OpenAiConfig) -> Result<Self, ClassifyError> {
        let http_client = config.build_http_client()?;
        Ok(Self {
            config,
            http_client,
        })
    }

    /// Construct from `OPENAI_API_KEY`.
    pub fn from_env() -> Result<Self, ClassifyError> {
        Self::new(OpenAiConfig::from_env()?)
    }
}

#[async_trait]
impl TextGenerator for OpenAiChatClient {
    async fn generate(&self, prompt: &str) -> Result<String, ClassifyError> {
        let url = self.config.endpoint("/chat/completions");
        let body = ChatCompletionRequest {
            model: self.config.chat_model(),
            messages: vec![ChatRequestMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.config.temperature(),
        };

        debug!(model = self.config.chat_model(), "sending chat completion");
        let response = self
            .http_client
            .post(&url)
            .headers(self.config.request_headers()?)
            .json(&body)
            .send()
            .await
            .map_err(|e| ClassifyError::transport(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(handle_error_response(response).await);
        }

        let parsed: ChatCompletionResponse = response.json().await.map_err(|e| {
            ClassifyError::Transport(format!("failed to parse chat completion envelope: {e}"))
        })?;

        // An empty or absent message degrades downstream rather than erroring:
        // the decode ladder owns that contract.
        Ok(parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default())
    }
}
