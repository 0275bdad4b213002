//! Ollama client configuration.

use std::time::Duration;

/// Ollama chat client configuration.
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    /// Base URL of the server, without the `/api/chat` suffix.
    pub endpoint: String,
    pub model: String,
    pub timeout: Duration,
}

impl OllamaConfig {
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            timeout: Duration::from_secs(60),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self::new("http://localhost:11434", "phi3")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_ollama() {
        let config = OllamaConfig::default();
        assert_eq!(config.endpoint, "http://localhost:11434");
        assert_eq!(config.model, "phi3");
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn with_timeout_overrides() {
        let config = OllamaConfig::default().with_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
