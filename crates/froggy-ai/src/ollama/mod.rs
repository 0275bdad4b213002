//! Ollama chat client.
//!
//! Implements the `ChatBackend` trait against a locally running Ollama
//! server's `/api/chat` endpoint (http://localhost:11434 by default),
//! non-streaming only.

mod api;
mod client;
mod config;

pub use client::OllamaClient;
pub use config::OllamaConfig;
