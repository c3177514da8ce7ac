//! Moderation-endpoint backend.
//!
//! The hosted moderation endpoint skips prompting entirely: it takes the raw
//! comment and returns per-category boolean flags. This client maps those
//! flags onto the crate taxonomy so both classification paths produce the
//! same [`ClassificationResult`] shape.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use super::{OpenAiConfig, handle_error_response};
use crate::error::ClassifyError;
use crate::taxonomy::{Category, KNOWN_CATEGORIES};
use crate::types::{ClassificationRequest, ClassificationResult};

/// Classifier over an OpenAI-compatible `/moderations` endpoint.
#[derive(Debug, Clone)]
pub struct OpenAiModerationClient {
    config: OpenAiConfig,
    http_client: reqwest::Client,
}

#[derive(Serialize)]
struct ModerationApiRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Deserialize)]
struct ModerationApiResponse {
    results: Vec<ModerationApiResult>,
}

/// Categories come back as a name→flag map rather than a fixed struct, so new
/// provider categories flow through without a schema change.
#[derive(Deserialize)]
struct ModerationApiResult {
    flagged: bool,
    categories: HashMap<String, bool>,
}

impl OpenAiModerationClient {
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

    /// Classify one comment via the moderation endpoint.
    ///
    /// An unflagged comment yields an empty category list. Flagged provider
    /// categories are mapped onto the taxonomy; ones with no counterpart are
    /// preserved verbatim as [`Category::Other`].
    pub async fn moderate_comment(
        &self,
        comment: &str,
    ) -> Result<ClassificationResult, ClassifyError> {
        let request = ClassificationRequest::new(comment)?;

        let url = self.config.endpoint("/moderations");
        let body = ModerationApiRequest {
            model: self.config.moderation_model(),
            input: request.text(),
        };

        debug!(model = self.config.moderation_model(), "sending moderation request");
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

        let parsed: ModerationApiResponse = response.json().await.map_err(|e| {
            ClassifyError::Transport(format!("failed to parse moderation envelope: {e}"))
        })?;

        let result = parsed.results.into_iter().next().ok_or_else(|| {
            ClassifyError::Transport("moderation reply contained no results".to_string())
        })?;

        let categories = if result.flagged {
            categories_from_flags(&result.categories)
        } else {
            Vec::new()
        };
        Ok(ClassificationResult::new(None, categories, None))
    }
}

/// Collect flagged provider categories into taxonomy order, unmapped names
/// last in alphabetical order (the flag map itself is unordered).
fn categories_from_flags(flags: &HashMap<String, bool>) -> Vec<Category> {
    let mut mapped = Vec::new();
    let mut unmapped = Vec::new();
    for (name, flagged) in flags {
        if !flagged {
            continue;
        }
        match map_provider_category(name) {
            Some(category) => mapped.push(category),
            None => unmapped.push(name.clone()),
        }
    }

    let mut categories: Vec<Category> = KNOWN_CATEGORIES
        .iter()
        .filter(|known| mapped.contains(known))
        .cloned()
        .collect();
    unmapped.sort();
    categories.extend(unmapped.into_iter().map(Category::Other));
    categories
}

/// Provider category → taxonomy. Sub-categories like `harassment/threatening`
/// fold into their base label; `*/threatening` and `violence*` both read as
/// threats.
fn map_provider_category(name: &str) -> Option<Category> {
    if name.ends_with("threatening") || name.starts_with("violence") {
        return Some(Category::Threatening);
    }
    if name.starts_with("harassment") {
        return Some(Category::Harassment);
    }
    if name.starts_with("hate") {
        return Some(Category::HateSpeech);
    }
    if name.starts_with("sexual") {
        return Some(Category::Vulgar);
    }
    if name.starts_with("self-harm") {
        return Some(Category::SelfHarm);
    }
    None
}
