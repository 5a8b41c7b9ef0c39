//! Heuristics for locating a JSON span inside unstructured text.
//!
//! Carving JSON out of prose is a best-effort delimiter search, not real
//! parsing. Each heuristic is one [`ExtractionStrategy`]; the extractor
//! tries them in order and hands the first candidate to the parser, so a
//! new heuristic (say, multi-object disambiguation) can be added without
//! touching normalization.

use regex::Regex;

/// One heuristic for locating a structured-data span inside a raw reply.
///
/// Strategies only *locate* a candidate; whether it parses is the
/// extractor's problem. Implementations must be stateless with respect to
/// the input so they stay safe to share across threads.
pub trait ExtractionStrategy: Send + Sync {
    /// Short name used in trace output.
    fn name(&self) -> &'static str;

    /// Returns the candidate JSON span, if this heuristic finds one.
    fn locate<'a>(&self, raw: &'a str) -> Option<&'a str>;
}

const FENCE_PATTERN: &str = r"(?s)```json\s*(\{.*?\})\s*```";

/// Finds an object inside a markdown code fence explicitly tagged `json`.
///
/// Non-greedy, so the first closing fence ends the block even when several
/// fences appear in one reply.
#[derive(Debug, Clone)]
pub struct FencedJsonBlock {
    pattern: Regex,
}

impl FencedJsonBlock {
    /// Creates the fence scanner.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(FENCE_PATTERN).expect("fence pattern is a valid regex"),
        }
    }
}

impl Default for FencedJsonBlock {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionStrategy for FencedJsonBlock {
    fn name(&self) -> &'static str {
        "fenced-json-block"
    }

    fn locate<'a>(&self, raw: &'a str) -> Option<&'a str> {
        self.pattern
            .captures(raw)
            .and_then(|captures| captures.get(1))
            .map(|group| group.as_str())
    }
}

/// Takes the widest `{` .. `}` span in the reply.
///
/// Deliberately permissive: leading and trailing prose is tolerated, and
/// when several objects appear the whole span between the first `{` and the
/// last `}` is taken. Over-capture usually still parses; under-capture
/// would miss the object entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct BraceSpan;

impl ExtractionStrategy for BraceSpan {
    fn name(&self) -> &'static str {
        "brace-span"
    }

    fn locate<'a>(&self, raw: &'a str) -> Option<&'a str> {
        let start = raw.find('{')?;
        let end = raw.rfind('}')?;
        if end < start {
            return None;
        }
        Some(&raw[start..=end])
    }
}
