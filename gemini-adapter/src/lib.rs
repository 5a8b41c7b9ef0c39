//! Rust adapter for the Gemini `generateContent` REST API.
//!
//! This crate covers exactly what a triage pipeline needs from a text
//! producer: one blocking request in, one raw reply string out, with typed
//! errors for everything that can go wrong on the way. Credentials are
//! passed in explicitly by the caller, never read from process-global
//! state, so tests and downstream code stay independent of the
//! environment.

/// HTTP transport for `generateContent` calls.
pub mod client;
/// Error types returned by adapter operations.
pub mod error;
/// Request construction for `generateContent` invocations.
pub mod request;
/// Shared data types for configuration and wire traffic.
pub mod types;

pub use error::GeminiError;
pub use types::*;

/// Environment variable holding the API key, read by
/// [`GeminiClient::from_env`].
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Environment variable overriding the API base URL, read by
/// [`GeminiClient::from_env`].
pub const GEMINI_BASE_URL_ENV: &str = "GEMINI_BASE_URL";

/// High-level client for the Gemini text-generation API.
///
/// Does not implement `Debug`; the API key must not end up in logs.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    config: types::GeminiConfig,
}

impl GeminiClient {
    /// Creates a client with an explicit API key and default configuration.
    ///
    /// # Errors
    ///
    /// Returns `GeminiError::Http` if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(api_key: impl Into<String>) -> Result<Self, GeminiError> {
        Self::with_config(api_key, types::GeminiConfig::default())
    }

    /// Creates a client with an explicit API key and configuration.
    ///
    /// # Errors
    ///
    /// Returns `GeminiError::Http` if the underlying HTTP client cannot be
    /// constructed.
    pub fn with_config(
        api_key: impl Into<String>,
        config: types::GeminiConfig,
    ) -> Result<Self, GeminiError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            config,
        })
    }

    /// Creates a client from `GEMINI_API_KEY` (and optionally
    /// `GEMINI_BASE_URL`) in the environment.
    ///
    /// This is a convenience for binaries; library code should prefer
    /// [`new`](Self::new) with an injected key.
    ///
    /// # Errors
    ///
    /// Returns `GeminiError::MissingApiKey` when the key variable is unset
    /// or empty.
    pub fn from_env() -> Result<Self, GeminiError> {
        let api_key = std::env::var(GEMINI_API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(GeminiError::MissingApiKey)?;

        let config = match std::env::var(GEMINI_BASE_URL_ENV) {
            Ok(base_url) if !base_url.trim().is_empty() => {
                types::GeminiConfig::default().with_base_url(base_url)
            }
            _ => types::GeminiConfig::default(),
        };

        Self::with_config(api_key, config)
    }

    /// Runs a prompt through the given model and returns the raw reply text.
    ///
    /// # Errors
    ///
    /// Returns `GeminiError` if the request fails, the API rejects it, the
    /// response cannot be decoded, or no candidate text was produced.
    pub async fn generate(&self, prompt: &str, model: &str) -> Result<String, GeminiError> {
        client::send_generate(&self.http, &self.api_key, &self.config, model, prompt).await
    }
}
