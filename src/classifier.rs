//! The comment classifier.

use tracing::debug;

use crate::decode::decode_reply;
use crate::error::ClassifyError;
use crate::prompt::classification_prompt;
use crate::traits::TextGenerator;
use crate::types::{ClassificationRequest, ClassificationResult};

/// Classifies comments through a pluggable [`TextGenerator`] backend.
///
/// The classifier is stateless between calls: the most recent comment and
/// result belong to the caller, and retry/backoff policy is the caller's
/// choice (see [`crate::retry`]). Each `classify` call performs exactly one
/// outbound request, or none at all for blank input.
pub struct CommentClassifier<G> {
    backend: G,
}

impl<G: TextGenerator> CommentClassifier<G> {
    pub fn new(backend: G) -> Self {
        Self { backend }
    }

    /// Classify one comment.
    ///
    /// Returns `EmptyInput` without touching the network when the trimmed
    /// comment is empty. A reply that cannot be parsed is not an error: the
    /// decode ladder turns it into a degraded result so the caller always has
    /// something renderable.
    pub async fn classify(&self, comment: &str) -> Result<ClassificationResult, ClassifyError> {
        let request = ClassificationRequest::new(comment)?;
        let prompt = classification_prompt(request.text());
        debug!(comment_chars = request.text().chars().count(), "dispatching classification");
        let reply = self.backend.generate(&prompt).await?;
        let result = decode_reply(&reply);
        debug!(
            categories = result.categories().len(),
            harmful = result.is_harmful(),
            "classification decoded"
        );
        Ok(result)
    }

    /// Access the underlying backend.
    pub fn backend(&self) -> &G {
        &self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::Category;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct CannedGenerator {
        reply: &'static str,
        calls: AtomicU32,
    }

    impl CannedGenerator {
        fn new(reply: &'static str) -> Self {
            Self {
                reply,
                calls: AtomicU32::new(0),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for CannedGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, ClassifyError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.reply.to_string())
        }
    }

    #[tokio::test]
    async fn blank_input_short_circuits_before_the_backend() {
        let classifier = CommentClassifier::new(CannedGenerator::new("{}"));
        let err = classifier.classify("   \n ").await.unwrap_err();
        assert!(matches!(err, ClassifyError::EmptyInput));
        assert_eq!(classifier.backend().calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn one_backend_call_per_classify() {
        let classifier = CommentClassifier::new(CannedGenerator::new(
            r#"{"categories":["Humor"],"summary":"a joke"}"#,
        ));
        let result = classifier.classify("knock knock").await.unwrap();
        assert_eq!(result.categories(), &[Category::Humor]);
        assert_eq!(classifier.backend().calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn backend_errors_pass_through() {
        struct FailingGenerator;

        #[async_trait]
        impl TextGenerator for FailingGenerator {
            async fn generate(&self, _prompt: &str) -> Result<String, ClassifyError> {
                Err(ClassifyError::transport("429 Too Many Requests"))
            }
        }

        let classifier = CommentClassifier::new(FailingGenerator);
        let err = classifier.classify("hello").await.unwrap_err();
        assert!(err.is_rate_limited());
    }
}
