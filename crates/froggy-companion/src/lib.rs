//! The companion engine.
//!
//! Everything that makes the frog behave lives here: the reminder
//! scheduler, the chat request lifecycle, the speech display state
//! machine, and the controller orchestrating them. The engine speaks to
//! the outside world only through channels ([`froggy_common::Action`]s
//! in, [`froggy_common::Event`]s out), so any shell, whether a desktop
//! window or a terminal, can drive it.

pub mod chat;
pub mod controller;
pub mod reminders;
pub mod runtime;
pub mod speech;

pub use chat::{ChatReply, ChatRequestTask, FALLBACK_REPLY};
pub use controller::{CompanionController, ControllerConfig, Phase};
pub use reminders::ReminderScheduler;
pub use runtime::{Companion, CompanionHandle};
pub use speech::{reading_duration, SpeechEntry, SpeechSurface};
