//! External services for the companion.
//!
//! Provides the local LLM chat backend (Ollama, non-streaming) behind the
//! [`ChatBackend`] trait, and the offline random fact pool behind
//! [`FactProvider`].

pub mod facts;
pub mod ollama;

use async_trait::async_trait;

pub use facts::{BuiltinFacts, FactProvider};
pub use ollama::{OllamaClient, OllamaConfig};

/// One question-answering round trip to the chat service.
///
/// Implementations send a single `{system, user}` exchange and return the
/// reply text. No conversation state is kept between calls.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn chat(&self, system: &str, user: &str) -> Result<String, AiError>;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
}
