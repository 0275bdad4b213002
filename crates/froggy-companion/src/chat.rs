//! The background chat request lifecycle.

use std::sync::Arc;

use froggy_ai::ChatBackend;
use froggy_common::RequestId;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Shown when the chat service cannot be reached or errors out.
pub const FALLBACK_REPLY: &str = "I'm not able to connect to the mighty llama.";

/// Completion notification for one chat request.
#[derive(Debug, Clone)]
pub struct ChatReply {
    pub id: RequestId,
    pub text: String,
}

/// One in-flight question round trip, running off the engine loop.
///
/// The task always delivers exactly one [`ChatReply`] on its channel: the
/// backend's reply text on success, [`FALLBACK_REPLY`] on any failure.
/// Nothing escapes the task boundary, and there is no cancellation: a
/// started request runs to completion.
pub struct ChatRequestTask {
    id: RequestId,
    handle: JoinHandle<()>,
}

impl ChatRequestTask {
    pub fn spawn(
        backend: Arc<dyn ChatBackend>,
        persona: String,
        prompt: String,
        tx: mpsc::Sender<ChatReply>,
    ) -> Self {
        let id = RequestId::new();
        let task_id = id.clone();
        let handle = tokio::spawn(async move {
            let text = match backend.chat(&persona, &prompt).await {
                Ok(reply) => reply,
                Err(e) => {
                    tracing::warn!(error = %e, "chat backend call failed");
                    FALLBACK_REPLY.to_string()
                }
            };
            let _ = tx.send(ChatReply { id: task_id, text }).await;
        });
        Self { id, handle }
    }

    pub fn id(&self) -> &RequestId {
        &self.id
    }

    /// True once the completion notification has been sent.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}
