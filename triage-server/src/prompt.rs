//! Prompt construction for the triage model call.

use std::fmt::Write;

/// Formats the triage prompt for a symptom description.
///
/// The model is asked for a single strict-JSON object with the four record
/// fields. The symptom text is interpolated last so a long description
/// cannot push the formatting rules out of view.
#[must_use]
pub fn build_triage_prompt(symptoms: &str) -> String {
    let mut prompt = String::new();

    let _ = writeln!(
        prompt,
        "You are a medical assistant AI. Analyze the given symptoms and identify the most likely disease."
    );
    let _ = writeln!(prompt, "Determine its criticality level (High, Medium, or Low).");
    let _ = writeln!(
        prompt,
        "Return ONLY a valid JSON object with EXACTLY these four fields:"
    );
    let _ = writeln!(prompt, "- 'disease' (string)");
    let _ = writeln!(prompt, "- 'criticality' (string)");
    let _ = writeln!(prompt, "- 'remedy' (string)");
    let _ = writeln!(prompt, "- 'rest' (string)");
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "Formatting Rules:");
    let _ = writeln!(
        prompt,
        "1. 'remedy' must contain prescribed medicines with dosage in '1-0-1' format and liquid medicines in 'ml' format."
    );
    let _ = writeln!(
        prompt,
        "   Example: \"Paracetamol 500mg 1-0-1, FEDCOF-LS 10ml\""
    );
    let _ = writeln!(
        prompt,
        "2. Do NOT return arrays, lists, explanations, or extra text."
    );
    let _ = writeln!(prompt, "3. Do NOT include markdown, headings, or analysis.");
    let _ = writeln!(
        prompt,
        "4. 'rest' must contain number of rest days (e.g., '2 days', '5 days') or 'Not required'."
    );
    let _ = writeln!(prompt, "5. Response must be strictly valid JSON.");
    let _ = writeln!(prompt);
    let _ = write!(prompt, "Symptoms Input: {symptoms}");

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_names_all_record_fields() {
        let prompt = build_triage_prompt("fever and cough");
        for field in ["'disease'", "'criticality'", "'remedy'", "'rest'"] {
            assert!(prompt.contains(field), "missing {field}");
        }
    }

    #[test]
    fn test_symptoms_come_last() {
        let prompt = build_triage_prompt("persistent headache");
        assert!(prompt.ends_with("Symptoms Input: persistent headache"));
    }
}
