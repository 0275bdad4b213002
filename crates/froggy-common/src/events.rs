use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::Point;

/// Everything the engine tells the outside world.
///
/// A shell renders these; nothing else crosses the boundary in this
/// direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    SpeechShown { text: String, duration_ms: u64 },
    SpeechCleared,
    ThinkingStarted,
    ThinkingStopped,
    PromptShown,
    PromptHidden,
    Moved(Point),
    Shutdown,
    #[serde(other)]
    Unknown,
}

#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: Event) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}
