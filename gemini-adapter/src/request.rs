//! Request construction for `generateContent` invocations.

use url::Url;

use crate::error::GeminiError;
use crate::types::{Content, GeminiConfig, GenerateContentRequest, Part};

/// Builds the `generateContent` endpoint URL for the given model.
///
/// # Errors
///
/// Returns [`GeminiError::InvalidEndpoint`] when the configured base URL or
/// the model identifier does not form a valid URL.
pub fn endpoint_url(config: &GeminiConfig, model: &str) -> Result<Url, GeminiError> {
    if model.is_empty() || model.contains('/') {
        return Err(GeminiError::InvalidEndpoint(format!(
            "invalid model identifier: {model:?}"
        )));
    }

    let raw = format!(
        "{}/{}/models/{}:generateContent",
        config.base_url.trim_end_matches('/'),
        config.api_version,
        model
    );
    Url::parse(&raw).map_err(|err| GeminiError::InvalidEndpoint(format!("{raw}: {err}")))
}

/// Builds the request body for a one-shot user prompt.
#[must_use]
pub fn build_body(prompt: &str) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: prompt.to_owned(),
            }],
            role: Some("user".to_owned()),
        }],
    }
}
