//! Crate-wide default values.

use std::time::Duration;

/// Summary sentinel used when the model supplies none.
pub const NO_SUMMARY: &str = "No summary available.";

/// Maximum number of characters of a raw reply carried into a degraded
/// result's summary.
pub const DEGRADED_SUMMARY_CHARS: usize = 200;

/// HTTP defaults shared by the bundled transports.
pub mod http {
    use super::Duration;

    /// The upstream service is the sole source of variable latency, so every
    /// request carries a deadline.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
    pub const USER_AGENT: &str = concat!("commentgate/", env!("CARGO_PKG_VERSION"));
}

/// OpenAI-compatible endpoint defaults.
pub mod openai {
    pub const BASE_URL: &str = "https://api.openai.com/v1";
    pub const CHAT_MODEL: &str = "gpt-4o-mini";
    pub const MODERATION_MODEL: &str = "omni-moderation-latest";
    /// Classification wants the most deterministic output the model offers.
    pub const TEMPERATURE: f32 = 0.0;
    pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
}
