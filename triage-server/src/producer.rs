//! The text-producer boundary.

use async_trait::async_trait;
use gemini_adapter::GeminiClient;

/// A blocking text-generation call: prompt and model in, raw reply out.
///
/// Handlers and tests depend on this trait, never on live credentials.
/// Errors cross this seam as plain strings; the pipeline wraps them into
/// typed upstream failures.
#[async_trait]
pub trait TextProducer: Send + Sync {
    /// Produces the raw model reply for a prompt, or an explicit upstream
    /// error message.
    async fn produce(&self, prompt: &str, model: &str) -> Result<String, String>;
}

#[async_trait]
impl TextProducer for GeminiClient {
    async fn produce(&self, prompt: &str, model: &str) -> Result<String, String> {
        self.generate(prompt, model)
            .await
            .map_err(|err| err.to_string())
    }
}
