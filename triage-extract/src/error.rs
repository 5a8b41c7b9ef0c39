//! Typed extraction failures.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why extraction failed, as a bare tag.
///
/// Serialized in snake case so failure reasons stay stable across the API
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    /// No brace-delimited span was found anywhere in the reply.
    NoJsonFound,
    /// A candidate span was found but could not be turned into a usable
    /// record.
    MalformedJson,
    /// The upstream text producer itself failed.
    UpstreamError,
}

/// Extraction failed.
///
/// Every variant carries the original raw reply unchanged; callers need it
/// for diagnostics and retry decisions, and discarding it here would lose
/// the only evidence of what the model actually said.
#[derive(Debug, Clone, Error)]
pub enum ExtractionFailure {
    /// No brace-delimited span was found anywhere in the reply.
    #[error("no JSON object found in model reply")]
    NoJsonFound {
        /// The unmodified raw reply.
        raw: String,
    },

    /// A candidate span was found but failed to parse, or parsed without
    /// the fields a usable record needs.
    #[error("model reply contained malformed JSON: {message}")]
    MalformedJson {
        /// Parser or normalization error message.
        message: String,
        /// The unmodified raw reply.
        raw: String,
    },

    /// The upstream text producer failed, either out-of-band (the call
    /// errored) or in-band (the reply is an `{"error": ...}` object).
    #[error("upstream model call failed: {message}")]
    UpstreamError {
        /// The producer's own error message.
        message: String,
        /// The unmodified raw reply, possibly empty.
        raw: String,
    },
}

impl ExtractionFailure {
    /// The bare reason tag for this failure.
    #[must_use]
    pub const fn reason(&self) -> FailureReason {
        match self {
            Self::NoJsonFound { .. } => FailureReason::NoJsonFound,
            Self::MalformedJson { .. } => FailureReason::MalformedJson,
            Self::UpstreamError { .. } => FailureReason::UpstreamError,
        }
    }

    /// The raw reply this failure was produced from, unchanged.
    #[must_use]
    pub fn raw(&self) -> &str {
        match self {
            Self::NoJsonFound { raw }
            | Self::MalformedJson { raw, .. }
            | Self::UpstreamError { raw, .. } => raw,
        }
    }

    /// Builds an [`UpstreamError`](Self::UpstreamError) from a producer's
    /// error message and whatever partial reply was received.
    #[must_use]
    pub fn upstream(message: impl Into<String>, raw: impl Into<String>) -> Self {
        Self::UpstreamError {
            message: message.into(),
            raw: raw.into(),
        }
    }
}
