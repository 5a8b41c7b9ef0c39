//! Extractor configuration and fallback policy.

/// What to do when no usable record can be recovered from a reply.
///
/// The two behaviors mirror the two call sites this service grew out of:
/// one surfaced the raw failure to its caller, the other always answered
/// with a fixed conservative record. Neither is universally right, so the
/// choice is a configuration parameter rather than a hard-coded policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// Surface the typed failure, raw reply attached (default).
    #[default]
    Surface,
    /// Swallow the failure and answer with
    /// [`TriageRecord::safe_default`](crate::TriageRecord::safe_default).
    SafeDefault,
}

/// Configuration for response extraction behavior.
#[derive(Debug, Clone, Default)]
pub struct ExtractorConfig {
    /// Policy applied by
    /// [`ResponseExtractor::extract_or_fallback`](crate::ResponseExtractor::extract_or_fallback).
    pub fallback: FallbackPolicy,
}

impl ExtractorConfig {
    /// Sets the fallback policy (fluent builder).
    #[must_use]
    pub const fn with_fallback(mut self, policy: FallbackPolicy) -> Self {
        self.fallback = policy;
        self
    }
}
