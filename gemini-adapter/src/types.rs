//! Shared data types for Gemini adapter configuration and wire traffic.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Gemini REST endpoint.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Base URL of the Generative Language API.
    pub base_url: String,
    /// API version path segment.
    ///
    /// Default: `v1beta`
    pub api_version: String,
    /// Maximum wall-clock time for one `generateContent` call.
    ///
    /// Default: 60 seconds
    pub timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com".to_owned(),
            api_version: "v1beta".to_owned(),
            timeout: Duration::from_secs(60),
        }
    }
}

impl GeminiConfig {
    /// Overrides the base URL (fluent builder). Useful for test servers.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the request timeout (fluent builder).
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// One text fragment inside a content block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    /// The text payload.
    pub text: String,
}

/// A block of model or user content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// Ordered fragments making up this block.
    #[serde(default)]
    pub parts: Vec<Part>,
    /// Originating role, e.g. `user` or `model`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    /// Conversation turns; a single user turn for one-shot prompts.
    pub contents: Vec<Content>,
}

/// One generated candidate reply.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// The candidate's content, absent when generation was blocked.
    #[serde(default)]
    pub content: Option<Content>,
    /// Why generation stopped, e.g. `STOP` or `SAFETY`.
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Response body of `models/{model}:generateContent`.
///
/// Only the fields this adapter needs; the API returns more.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    /// Generated candidates, best first.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated text of the best candidate, if any text was produced.
    #[must_use]
    pub fn reply_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .map(|part| part.text.as_str())
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_text_concatenates_parts() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [{
                    "content": {
                        "parts": [{"text": "{\"disease\": "}, {"text": "\"Flu\"}"}],
                        "role": "model"
                    },
                    "finishReason": "STOP"
                }]
            }"#,
        )
        .unwrap();
        assert_eq!(response.reply_text().as_deref(), Some("{\"disease\": \"Flu\"}"));
    }

    #[test]
    fn test_reply_text_empty_when_no_candidates() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.reply_text(), None);
    }

    #[test]
    fn test_reply_text_empty_when_blocked() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates": [{"finishReason": "SAFETY"}]}"#,
        )
        .unwrap();
        assert_eq!(response.reply_text(), None);
    }
}
