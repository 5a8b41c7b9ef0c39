//! The extractor: strategy chain, parse attempt, normalization.

use serde_json::Value;

use crate::config::{ExtractorConfig, FallbackPolicy};
use crate::error::ExtractionFailure;
use crate::normalize;
use crate::record::TriageRecord;
use crate::strategy::{BraceSpan, ExtractionStrategy, FencedJsonBlock};

/// Turns a raw model reply into a normalized [`TriageRecord`].
///
/// The extractor holds only its strategy chain and configuration; each
/// [`extract`](Self::extract) call operates purely on its input, so a
/// single instance is safe to share across request handlers without
/// coordination.
pub struct ResponseExtractor {
    strategies: Vec<Box<dyn ExtractionStrategy>>,
    config: ExtractorConfig,
}

impl ResponseExtractor {
    /// Creates an extractor with the standard strategy chain: the fenced
    /// `json` block scan first, then the permissive brace-span scan.
    #[must_use]
    pub fn new() -> Self {
        Self {
            strategies: vec![Box::new(FencedJsonBlock::new()), Box::new(BraceSpan)],
            config: ExtractorConfig::default(),
        }
    }

    /// Replaces the extractor configuration (fluent builder).
    #[must_use]
    pub fn with_config(mut self, config: ExtractorConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the strategy chain. Strategies are tried in order; the
    /// first candidate wins.
    #[must_use]
    pub fn with_strategies(mut self, strategies: Vec<Box<dyn ExtractionStrategy>>) -> Self {
        self.strategies = strategies;
        self
    }

    /// Extracts and normalizes a triage record from a raw model reply.
    ///
    /// This is the pure path: every outcome is a value, nothing is
    /// swallowed or defaulted beyond the documented field-level policy
    /// (unknown severity becomes Medium, numbered-list prescriptions are
    /// split).
    ///
    /// # Errors
    ///
    /// - [`ExtractionFailure::NoJsonFound`] when no strategy locates a
    ///   candidate span.
    /// - [`ExtractionFailure::MalformedJson`] when the candidate fails to
    ///   parse, or parses without a disease name.
    /// - [`ExtractionFailure::UpstreamError`] when the reply is the
    ///   producer's own `{"error": ...}` object.
    pub fn extract(&self, raw: &str) -> Result<TriageRecord, ExtractionFailure> {
        let Some(candidate) = self.locate(raw) else {
            tracing::debug!(reply_len = raw.len(), "no JSON candidate in model reply");
            return Err(ExtractionFailure::NoJsonFound {
                raw: raw.to_owned(),
            });
        };

        let value: Value =
            serde_json::from_str(candidate).map_err(|err| ExtractionFailure::MalformedJson {
                message: err.to_string(),
                raw: raw.to_owned(),
            })?;

        // Producers report their own failures in-band as {"error": "..."}.
        if let Some(message) = value.get("error").and_then(Value::as_str) {
            return Err(ExtractionFailure::UpstreamError {
                message: message.to_owned(),
                raw: raw.to_owned(),
            });
        }

        let parsed =
            serde_json::from_value(value).map_err(|err| ExtractionFailure::MalformedJson {
                message: err.to_string(),
                raw: raw.to_owned(),
            })?;

        normalize::normalize(parsed).map_err(|message| ExtractionFailure::MalformedJson {
            message: message.to_owned(),
            raw: raw.to_owned(),
        })
    }

    /// Like [`extract`](Self::extract), but applies the configured fallback
    /// policy: under [`FallbackPolicy::SafeDefault`] any failure collapses
    /// to [`TriageRecord::safe_default`].
    ///
    /// # Errors
    ///
    /// Under [`FallbackPolicy::Surface`], the same failures as
    /// [`extract`](Self::extract). Under `SafeDefault`, never.
    pub fn extract_or_fallback(&self, raw: &str) -> Result<TriageRecord, ExtractionFailure> {
        match self.extract(raw) {
            Ok(record) => Ok(record),
            Err(failure) => match self.config.fallback {
                FallbackPolicy::SafeDefault => {
                    tracing::warn!(
                        reason = ?failure.reason(),
                        "extraction failed, answering with safe default record"
                    );
                    Ok(TriageRecord::safe_default())
                }
                FallbackPolicy::Surface => Err(failure),
            },
        }
    }

    fn locate<'a>(&self, raw: &'a str) -> Option<&'a str> {
        for strategy in &self.strategies {
            if let Some(candidate) = strategy.locate(raw) {
                tracing::trace!(strategy = strategy.name(), "located JSON candidate");
                return Some(candidate);
            }
        }
        None
    }
}

impl Default for ResponseExtractor {
    fn default() -> Self {
        Self::new()
    }
}
