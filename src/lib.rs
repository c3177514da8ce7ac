//! commentgate
//!
//! Resilient LLM-backed comment classification for moderation UIs.
//!
//! The crate owns one thing: turning a raw user comment into a structured
//! [`ClassificationResult`] by prompting a hosted model and best-effort
//! parsing its free-form reply. Rendering, button wiring, and credential
//! storage belong to the presentation layer.
//!
//! # Example
//!
//! ```rust,no_run
//! use commentgate::{CommentClassifier, OpenAiChatClient};
//!
//! # async fn run() -> Result<(), commentgate::ClassifyError> {
//! let classifier = CommentClassifier::new(OpenAiChatClient::from_env()?);
//! let result = classifier.classify("you are all idiots").await?;
//! if result.is_harmful() {
//!     if let Some(rewrite) = result.suggested_response() {
//!         println!("consider instead: {rewrite}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```
#![deny(unsafe_code)]

pub mod classifier;
pub mod decode;
pub mod defaults;
pub mod error;
pub mod prompt;
pub mod providers;
pub mod retry;
pub mod taxonomy;
pub mod traits;
pub mod types;

pub use classifier::CommentClassifier;
pub use error::ClassifyError;
pub use providers::openai::{OpenAiChatClient, OpenAiConfig, OpenAiModerationClient};
pub use retry::{RetryExecutor, RetryPolicy};
pub use taxonomy::Category;
pub use traits::TextGenerator;
pub use types::{ClassificationRequest, ClassificationResult};
