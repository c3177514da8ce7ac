//! Configuration for the OpenAI-compatible backends.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

use crate::defaults;
use crate::error::ClassifyError;

/// Connection settings shared by the chat and moderation clients.
///
/// The API key is held as a [`SecretString`] so it never appears in `Debug`
/// output or logs. A missing credential is a construction-time error; it is
/// never surfaced per classification call.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    base_url: String,
    api_key: SecretString,
    chat_model: String,
    moderation_model: String,
    temperature: f32,
    timeout: Duration,
    connect_timeout: Duration,
}

impl OpenAiConfig {
    /// Build a config with crate defaults for everything but the key.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ClassifyError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ClassifyError::Config("API key is empty".to_string()));
        }
        Ok(Self {
            base_url: defaults::openai::BASE_URL.to_string(),
            api_key: SecretString::from(api_key),
            chat_model: defaults::openai::CHAT_MODEL.to_string(),
            moderation_model: defaults::openai::MODERATION_MODEL.to_string(),
            temperature: defaults::openai::TEMPERATURE,
            timeout: defaults::http::REQUEST_TIMEOUT,
            connect_timeout: defaults::http::CONNECT_TIMEOUT,
        })
    }

    /// Read the credential from `OPENAI_API_KEY`.
    pub fn from_env() -> Result<Self, ClassifyError> {
        let key = std::env::var(defaults::openai::API_KEY_ENV).map_err(|_| {
            ClassifyError::Config(format!(
                "{} is not set",
                defaults::openai::API_KEY_ENV
            ))
        })?;
        Self::new(key)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_chat_model(mut self, model: impl Into<String>) -> Self {
        self.chat_model = model.into();
        self
    }

    pub fn with_moderation_model(mut self, model: impl Into<String>) -> Self {
        self.moderation_model = model.into();
        self
    }

    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn chat_model(&self) -> &str {
        &self.chat_model
    }

    pub fn moderation_model(&self) -> &str {
        &self.moderation_model
    }

    pub const fn temperature(&self) -> f32 {
        self.temperature
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    pub(crate) fn request_headers(&self) -> Result<HeaderMap, ClassifyError> {
        let mut headers = HeaderMap::new();
        let bearer = format!("Bearer {}", self.api_key.expose_secret());
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&bearer)
                .map_err(|e| ClassifyError::Config(format!("invalid API key format: {e}")))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(defaults::http::USER_AGENT),
        );
        Ok(headers)
    }

    pub(crate) fn build_http_client(&self) -> Result<reqwest::Client, ClassifyError> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .build()
            .map_err(|e| ClassifyError::Config(format!("failed to build HTTP client: {e}")))
    }
}
