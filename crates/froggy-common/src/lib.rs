pub mod actions;
pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use actions::Action;
pub use errors::{ConfigError, FroggyError};
pub use events::{Event, EventBus};
pub use id::{new_id, RequestId};
pub use types::{Color, Point, Reminder, SpeechStyle};

pub type Result<T> = std::result::Result<T, FroggyError>;
