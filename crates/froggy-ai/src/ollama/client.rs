//! Ollama client struct, request building, and response parsing.

use crate::{AiError, ChatMessage, Role};

use super::config::OllamaConfig;

/// Ollama API client.
pub struct OllamaClient {
    pub(crate) config: OllamaConfig,
    pub(crate) http: reqwest::Client,
}

impl OllamaClient {
    pub fn new(config: OllamaConfig) -> Self {
        Self {
            http: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(10))
                .timeout(config.timeout)
                .build()
                .expect("failed to build HTTP client"),
            config,
        }
    }

    /// Full URL of the chat endpoint.
    pub(crate) fn chat_url(&self) -> String {
        format!("{}/api/chat", self.config.endpoint.trim_end_matches('/'))
    }

    /// Build the JSON request body for `/api/chat`.
    pub(crate) fn build_request_body(&self, system: &str, user: &str) -> serde_json::Value {
        let messages = vec![
            ChatMessage {
                role: Role::System,
                content: system.to_string(),
            },
            ChatMessage {
                role: Role::User,
                content: user.to_string(),
            },
        ];

        serde_json::json!({
            "model": self.config.model,
            "messages": messages,
            "stream": false,
        })
    }

    /// Parse a non-streaming `/api/chat` response into the reply text.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<String, AiError> {
        json["message"]["content"]
            .as_str()
            .map(String::from)
            .ok_or_else(|| AiError::ParseError("response has no message content".into()))
    }
}
