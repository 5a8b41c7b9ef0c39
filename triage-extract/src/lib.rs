//! Extraction and normalization of medical triage records from LLM replies.
//!
//! A generative model asked for a structured triage verdict rarely returns
//! clean JSON: the object may be wrapped in prose, fenced in a markdown code
//! block, use inconsistent field names, or be missing entirely. This crate
//! turns that untrusted text into a validated [`TriageRecord`] or a typed
//! [`ExtractionFailure`]:
//!
//! - [`ResponseExtractor`] - ordered strategy chain, parse attempt, and
//!   field normalization
//! - [`ExtractionStrategy`] - one heuristic for locating a JSON span,
//!   independently testable and replaceable
//! - [`TriageRecord`] - the normalized output record
//! - [`ExtractionFailure`] - typed failure carrying the original raw reply
//! - [`FallbackPolicy`] - whether failures surface or collapse to a
//!   conservative default record
//!
//! Extraction is a pure, synchronous function of its input: no I/O, no
//! shared state, no retries. Retry and timeout policy belong to whoever
//! owns the network call that produced the reply.
//!
//! ## Example
//!
//! ```
//! use triage_extract::{Criticality, ResponseExtractor};
//!
//! let extractor = ResponseExtractor::new();
//! let reply = r#"Here is my assessment: {"disease": "Influenza",
//!     "criticality": "low", "remedy": "Rest and fluids", "rest": "3 days"}"#;
//!
//! let record = extractor.extract(reply).unwrap();
//! assert_eq!(record.disease, "Influenza");
//! assert_eq!(record.criticality, Criticality::Low);
//! ```

/// Extractor configuration and fallback policy.
pub mod config;
/// Typed extraction failures.
pub mod error;
/// The extractor: strategy chain, parse attempt, normalization.
pub mod extractor;
mod normalize;
/// Normalized record types.
pub mod record;
/// Heuristics for locating a JSON span inside unstructured text.
pub mod strategy;

pub use config::{ExtractorConfig, FallbackPolicy};
pub use error::{ExtractionFailure, FailureReason};
pub use extractor::ResponseExtractor;
pub use record::{Criticality, Remedy, TriageRecord};
pub use strategy::{BraceSpan, ExtractionStrategy, FencedJsonBlock};
