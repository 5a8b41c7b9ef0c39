//! HTTP transport for `generateContent` calls.

use crate::error::GeminiError;
use crate::request::{build_body, endpoint_url};
use crate::types::{GeminiConfig, GenerateContentResponse};

/// Sends one `generateContent` request and returns the reply text.
///
/// # Errors
///
/// Returns [`GeminiError::Api`] for non-2xx statuses (body included for
/// diagnostics), [`GeminiError::Decode`] when the response body is not the
/// expected shape, and [`GeminiError::EmptyReply`] when the API answered
/// without any candidate text.
pub async fn send_generate(
    http: &reqwest::Client,
    api_key: &str,
    config: &GeminiConfig,
    model: &str,
    prompt: &str,
) -> Result<String, GeminiError> {
    let url = endpoint_url(config, model)?;
    let body = build_body(prompt);

    tracing::debug!(%url, model, prompt_len = prompt.len(), "sending generateContent request");

    let response = http
        .post(url)
        .header("x-goog-api-key", api_key)
        .json(&body)
        .send()
        .await?;

    let status = response.status();
    let payload = response.text().await?;

    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), "generateContent request rejected");
        return Err(GeminiError::Api {
            status: status.as_u16(),
            body: payload,
        });
    }

    let decoded: GenerateContentResponse =
        serde_json::from_str(&payload).map_err(|err| GeminiError::Decode(err.to_string()))?;

    decoded.reply_text().ok_or(GeminiError::EmptyReply)
}
