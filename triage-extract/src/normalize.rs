//! Field normalization applied after a successful parse.
//!
//! Parsing only proves the candidate span was JSON. Normalization turns the
//! loosely-shaped object into a [`TriageRecord`]: severity labels are
//! case-folded and defaulted, numbered-list prescriptions are split into
//! ordered items, and a record without a disease name is rejected outright.

use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;

use crate::record::{Criticality, Remedy, TriageRecord};

/// Shape of the parsed reply before normalization.
///
/// Field names are aliased where the model is known to vary: the treatment
/// field arrives as `remedy`, `medicines`, or `remedies` depending on which
/// prompt variant produced the reply.
#[derive(Debug, Deserialize)]
pub(crate) struct RawRecord {
    #[serde(default)]
    disease: Option<String>,
    #[serde(default)]
    criticality: Option<String>,
    #[serde(default, alias = "medicines", alias = "remedies")]
    remedy: Option<RawRemedy>,
    #[serde(default)]
    rest: Option<String>,
}

/// Treatment field as the model returns it: a list or a single string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawRemedy {
    Items(Vec<String>),
    Text(String),
}

/// Normalizes a parsed record.
///
/// Minor shape mismatches are recovered silently (unknown severity defaults
/// to Medium, numbered-list text becomes an item list). A missing or blank
/// `disease` is not recoverable: some JSON with no disease name is as
/// useless to the caller as no JSON at all, and is reported as an error
/// message for the extractor to wrap.
pub(crate) fn normalize(raw: RawRecord) -> Result<TriageRecord, &'static str> {
    let disease = raw
        .disease
        .map(|name| name.trim().to_owned())
        .filter(|name| !name.is_empty())
        .ok_or("record is missing a disease name")?;

    let criticality = raw
        .criticality
        .as_deref()
        .and_then(Criticality::parse)
        .unwrap_or(Criticality::Medium);

    let remedy = match raw.remedy {
        Some(RawRemedy::Items(items)) => Some(Remedy::Items(items)),
        Some(RawRemedy::Text(text)) => Some(split_ordinals(&text)),
        // Explicitly no medicines; expected for high-risk replies.
        None => None,
    };

    let rest = raw
        .rest
        .map(|period| period.trim().to_owned())
        .filter(|period| !period.is_empty());

    Ok(TriageRecord {
        disease,
        criticality,
        remedy,
        rest,
    })
}

// Whitespace after the dot is required so dosage decimals ("0.5 ml")
// never split a free-text prescription.
#[allow(clippy::expect_used)]
fn ordinal_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\d+\.\s+").expect("ordinal pattern is a valid regex"))
}

/// Splits a numbered-list prescription into ordered items.
///
/// "1. Rest\n2. Fluids" becomes `["Rest", "Fluids"]`; text without ordinal
/// markers passes through unchanged.
fn split_ordinals(text: &str) -> Remedy {
    let pattern = ordinal_pattern();
    if !pattern.is_match(text) {
        return Remedy::Text(text.to_owned());
    }

    let items: Vec<String> = pattern
        .split(text)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToOwned::to_owned)
        .collect();

    if items.is_empty() {
        Remedy::Text(text.to_owned())
    } else {
        Remedy::Items(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(json: &str) -> RawRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_full_record_passes_through() {
        let record = normalize(raw(
            r#"{"disease": "Flu", "criticality": "Low", "remedy": "Fluids", "rest": "2 days"}"#,
        ))
        .unwrap();
        assert_eq!(record.disease, "Flu");
        assert_eq!(record.criticality, Criticality::Low);
        assert_eq!(record.remedy, Some(Remedy::Text("Fluids".into())));
        assert_eq!(record.rest.as_deref(), Some("2 days"));
    }

    #[test]
    fn test_missing_disease_is_rejected() {
        assert!(normalize(raw(r#"{"criticality": "High"}"#)).is_err());
        assert!(normalize(raw(r#"{"disease": "  ", "criticality": "High"}"#)).is_err());
    }

    #[test]
    fn test_unknown_criticality_defaults_to_medium() {
        let record = normalize(raw(r#"{"disease": "Flu", "criticality": "severe"}"#)).unwrap();
        assert_eq!(record.criticality, Criticality::Medium);

        let record = normalize(raw(r#"{"disease": "Flu"}"#)).unwrap();
        assert_eq!(record.criticality, Criticality::Medium);
    }

    #[test]
    fn test_numbered_list_remedy_is_split() {
        let record = normalize(raw(
            r#"{"disease": "Flu", "remedy": "1. Rest\n2. Fluids\n3. Paracetamol 500mg"}"#,
        ))
        .unwrap();
        assert_eq!(
            record.remedy,
            Some(Remedy::Items(vec![
                "Rest".into(),
                "Fluids".into(),
                "Paracetamol 500mg".into()
            ]))
        );
    }

    #[test]
    fn test_remedy_list_passes_through_unchanged() {
        let record =
            normalize(raw(r#"{"disease": "Flu", "medicines": ["Rest", "Fluids"]}"#)).unwrap();
        assert_eq!(
            record.remedy,
            Some(Remedy::Items(vec!["Rest".into(), "Fluids".into()]))
        );
    }

    #[test]
    fn test_dosage_decimals_do_not_split() {
        let record = normalize(raw(
            r#"{"disease": "Cough", "remedy": "FEDCOF-LS 2.5ml twice daily"}"#,
        ))
        .unwrap();
        assert_eq!(
            record.remedy,
            Some(Remedy::Text("FEDCOF-LS 2.5ml twice daily".into()))
        );
    }

    #[test]
    fn test_absent_remedy_stays_absent() {
        let record = normalize(raw(r#"{"disease": "Cardiac arrest", "criticality": "High"}"#))
            .unwrap();
        assert_eq!(record.remedy, None);
    }

    #[test]
    fn test_remedies_alias_is_accepted() {
        let record =
            normalize(raw(r#"{"disease": "Flu", "remedies": "1. Rest 2. Fluids"}"#)).unwrap();
        assert_eq!(
            record.remedy,
            Some(Remedy::Items(vec!["Rest".into(), "Fluids".into()]))
        );
    }
}
