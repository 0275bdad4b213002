//! ChatBackend trait implementation for OllamaClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{AiError, ChatBackend};

use super::client::OllamaClient;

#[async_trait]
impl ChatBackend for OllamaClient {
    async fn chat(&self, system: &str, user: &str) -> Result<String, AiError> {
        let body = self.build_request_body(system, user);

        debug!(model = %self.config.model, "Ollama chat request");

        let response = self
            .http
            .post(self.chat_url())
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| AiError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let text = text.chars().take(200).collect::<String>();
            return Err(AiError::ApiError(format!("HTTP {status}: {text}")));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::ParseError(e.to_string()))?;

        self.parse_response(json)
    }
}
