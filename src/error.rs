//! Error types for the classification boundary.
//!
//! A malformed model reply is deliberately *not* represented here: the decode
//! ladder in [`crate::decode`] absorbs it into a degraded result, so callers
//! only ever see transport-level and input-level failures.

use thiserror::Error;

/// Errors surfaced by `classify` and the bundled transports.
#[derive(Debug, Clone, Error)]
pub enum ClassifyError {
    /// The comment was blank after trimming. No external call was made.
    #[error("comment is empty")]
    EmptyInput,

    /// The model service rejected the call for quota reasons. Callers should
    /// show a "try again shortly" notice rather than a generic failure.
    #[error("rate limited by the model service: {0}")]
    RateLimited(String),

    /// Any other network/API-level failure, with the underlying message
    /// preserved for display.
    #[error("transport failure: {0}")]
    Transport(String),

    /// Invalid or missing client configuration (e.g. no API key). Raised at
    /// construction time, never per classification call.
    #[error("configuration error: {0}")]
    Config(String),
}

impl ClassifyError {
    /// Build a transport-level error, promoting to [`ClassifyError::RateLimited`]
    /// when the message carries a quota / "too many requests" indicator.
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        if looks_rate_limited(&message) {
            Self::RateLimited(message)
        } else {
            Self::Transport(message)
        }
    }

    /// Whether a retry could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited(_) | Self::Transport(_))
    }

    /// Whether this is the distinguished rate-limit kind.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited(_))
    }
}

/// Message heuristics for rate-limit detection. Provider SDKs and proxies
/// word this inconsistently, so match the common spellings.
fn looks_rate_limited(message: &str) -> bool {
    let lower = message.to_lowercase();
    lower.contains("429")
        || lower.contains("too many requests")
        || lower.contains("rate limit")
        || lower.contains("ratelimit")
        || lower.contains("quota")
        || lower.contains("resource_exhausted")
}

impl From<reqwest::Error> for ClassifyError {
    fn from(err: reqwest::Error) -> Self {
        Self::transport(err.to_string())
    }
}
