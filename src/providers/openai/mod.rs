//! OpenAI-compatible backends: a chat-completions generator and a
//! moderation-endpoint classifier.

mod chat;
mod config;
mod moderation;

pub use chat::OpenAiChatClient;
pub use config::OpenAiConfig;
pub use moderation::OpenAiModerationClient;

use crate::error::ClassifyError;

/// Map a non-success HTTP response to an error, consuming the body for the
/// detail message.
pub(crate) async fn handle_error_response(response: reqwest::Response) -> ClassifyError {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    status_error(status, &body)
}

pub(crate) fn status_error(status: u16, body: &str) -> ClassifyError {
    match status {
        401 => ClassifyError::Transport(format!("invalid API key (401): {body}")),
        429 => ClassifyError::RateLimited(format!("429 Too Many Requests: {body}")),
        // Fall back to message heuristics: proxies sometimes tunnel quota
        // failures behind other status codes.
        _ => ClassifyError::transport(format!("API error {status}: {body}")),
    }
}
