//! Application state and the triage pipeline.
//!
//! `AppState` centralizes dependency injection: handlers see one object
//! carrying the text producer, the extractor, and the model choice, and
//! tests swap the producer for a canned one.

use std::sync::Arc;

use anyhow::Context;
use gemini_adapter::GeminiClient;
use triage_extract::{
    ExtractionFailure, ExtractorConfig, FallbackPolicy, ResponseExtractor, TriageRecord,
};

use crate::config::ServerConfig;
use crate::producer::TextProducer;
use crate::prompt;

/// Shared state injected into actix-web handlers.
pub struct AppState {
    producer: Arc<dyn TextProducer>,
    extractor: ResponseExtractor,
    fallback: FallbackPolicy,
    model: String,
}

impl AppState {
    /// Builds production state: a Gemini client from the environment and an
    /// extractor configured with the server's fallback policy.
    ///
    /// # Errors
    ///
    /// Fails when `GEMINI_API_KEY` is unset or the HTTP client cannot be
    /// constructed.
    pub fn new(config: &ServerConfig) -> anyhow::Result<Self> {
        let client = GeminiClient::from_env().context("failed to create Gemini client")?;
        Ok(Self::with_producer(Arc::new(client), config))
    }

    /// Builds state around an arbitrary text producer. Tests use this to
    /// inject canned replies.
    #[must_use]
    pub fn with_producer(producer: Arc<dyn TextProducer>, config: &ServerConfig) -> Self {
        let extractor = ResponseExtractor::new()
            .with_config(ExtractorConfig::default().with_fallback(config.fallback));
        Self {
            producer,
            extractor,
            fallback: config.fallback,
            model: config.model.clone(),
        }
    }

    /// Runs the full pipeline: prompt construction, the producer call, then
    /// extraction under the configured fallback policy.
    ///
    /// # Errors
    ///
    /// Under [`FallbackPolicy::Surface`], returns the typed extraction
    /// failure (including producer failures as upstream errors). Under
    /// [`FallbackPolicy::SafeDefault`], never fails.
    pub async fn triage(&self, symptoms: &str) -> Result<TriageRecord, ExtractionFailure> {
        let prompt = prompt::build_triage_prompt(symptoms);

        let raw = match self.producer.produce(&prompt, &self.model).await {
            Ok(raw) => raw,
            Err(message) => {
                tracing::warn!(error = %message, "text producer failed");
                let failure = ExtractionFailure::upstream(message, "");
                return match self.fallback {
                    FallbackPolicy::SafeDefault => Ok(TriageRecord::safe_default()),
                    FallbackPolicy::Surface => Err(failure),
                };
            }
        };

        tracing::debug!(reply_len = raw.len(), "model reply received");
        self.extractor.extract_or_fallback(&raw)
    }
}
