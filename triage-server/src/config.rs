//! Server configuration.

use triage_extract::FallbackPolicy;

/// Application configuration, assembled from CLI flags by the binary.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Gemini model identifier used for triage prompts.
    pub model: String,
    /// What an extraction failure becomes at the HTTP boundary: an error
    /// body, or the conservative default record.
    pub fallback: FallbackPolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 5001,
            model: "gemini-2.5-flash-lite".to_owned(),
            fallback: FallbackPolicy::Surface,
        }
    }
}

impl ServerConfig {
    /// The address pair to bind the HTTP server to.
    #[must_use]
    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_the_public_contract() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 5001);
        assert_eq!(config.fallback, FallbackPolicy::Surface);
    }
}
