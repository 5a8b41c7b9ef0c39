//! Normalized triage record types.

use serde::{Deserialize, Serialize};

/// Severity classification of the suspected condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Criticality {
    /// Urgent; the reply may deliberately omit medicine recommendations.
    High,
    /// Moderate severity. Also the default when the model's label is
    /// missing or unrecognized.
    Medium,
    /// Minor condition.
    Low,
}

impl Criticality {
    /// Parses a severity label, ignoring case and surrounding whitespace.
    ///
    /// Returns `None` for anything that is not High, Medium, or Low; the
    /// caller decides whether that defaults or fails.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }
}

/// Recommended treatment: either free text or an ordered list of items.
///
/// Models return both shapes for the same prompt. A numbered-list string
/// ("1. Rest\n2. Fluids") is split into `Items` during normalization; an
/// already-structured array passes through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Remedy {
    /// Ordered treatment steps.
    Items(Vec<String>),
    /// A single free-text prescription.
    Text(String),
}

/// Normalized output of a successful extraction.
///
/// Constructed once per reply and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageRecord {
    /// Name of the suspected condition. Always non-empty.
    pub disease: String,
    /// Severity of the condition.
    pub criticality: Criticality,
    /// Recommended treatment. `None` means the reply explicitly carried no
    /// medicines, which is expected for high-risk cases pending human
    /// review.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remedy: Option<Remedy>,
    /// Recommended rest period as free text, e.g. "2 days" or "Not required".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest: Option<String>,
}

impl TriageRecord {
    /// The conservative record returned when extraction fails under the
    /// [`SafeDefault`](crate::FallbackPolicy::SafeDefault) policy.
    ///
    /// Signals "consult a professional" instead of fabricating specifics.
    #[must_use]
    pub fn safe_default() -> Self {
        Self {
            disease: "Unknown Condition".to_owned(),
            criticality: Criticality::Medium,
            remedy: Some(Remedy::Items(vec![
                "Please consult a doctor for specific advice".to_owned(),
            ])),
            rest: None,
        }
    }
}
