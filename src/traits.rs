//! Capability traits.

use async_trait::async_trait;

use crate::error::ClassifyError;

/// A text-generation backend the classifier can call through.
///
/// This is the sole failure-prone boundary of the crate. Implementations make
/// exactly one outbound call per invocation and map every transport-level
/// failure into a [`ClassifyError`]; they never panic across this boundary.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send one prompt and return the raw reply text.
    async fn generate(&self, prompt: &str) -> Result<String, ClassifyError>;
}

#[async_trait]
impl<T: TextGenerator + ?Sized> TextGenerator for std::sync::Arc<T> {
    async fn generate(&self, prompt: &str) -> Result<String, ClassifyError> {
        (**self).generate(prompt).await
    }
}
