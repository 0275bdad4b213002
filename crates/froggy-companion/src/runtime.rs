//! The engine loop: wires the controller to its channels and timers.

use std::sync::Arc;
use std::time::Instant;

use froggy_ai::{ChatBackend, FactProvider};
use froggy_common::{Action, Event, EventBus, Reminder, SpeechStyle};
use tokio::sync::{broadcast, mpsc};

use crate::chat::ChatReply;
use crate::controller::{CompanionController, ControllerConfig};
use crate::reminders::ReminderScheduler;

/// The assembled engine. Construct with [`Companion::new`], then drive it
/// with [`Companion::run`] on the tokio runtime.
pub struct Companion {
    controller: CompanionController,
    scheduler: ReminderScheduler,
    action_rx: mpsc::Receiver<Action>,
    reminder_rx: mpsc::Receiver<String>,
    chat_rx: mpsc::Receiver<ChatReply>,
}

/// Cloneable handle a shell uses to drive the engine and observe it.
#[derive(Clone)]
pub struct CompanionHandle {
    actions: mpsc::Sender<Action>,
    events: EventBus,
}

impl CompanionHandle {
    /// Deliver a user input to the engine. Returns `false` once the
    /// engine has shut down.
    pub async fn send(&self, action: Action) -> bool {
        self.actions.send(action).await.is_ok()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.events.subscribe()
    }
}

impl Companion {
    pub fn new(
        config: ControllerConfig,
        style: SpeechStyle,
        reminders: Vec<Reminder>,
        backend: Arc<dyn ChatBackend>,
        facts: Arc<dyn FactProvider>,
    ) -> (Self, CompanionHandle) {
        let events = EventBus::new(256);
        let (action_tx, action_rx) = mpsc::channel(64);
        let (chat_tx, chat_rx) = mpsc::channel(8);
        let (reminder_tx, reminder_rx) = mpsc::channel(16);

        let mut scheduler = ReminderScheduler::new(reminder_tx);
        for reminder in reminders {
            scheduler = scheduler.add(reminder);
        }

        let controller =
            CompanionController::new(config, style, backend, facts, chat_tx, events.clone());

        (
            Self {
                controller,
                scheduler,
                action_rx,
                reminder_rx,
                chat_rx,
            },
            CompanionHandle {
                actions: action_tx,
                events,
            },
        )
    }

    /// Run until Quit arrives or every action sender is gone.
    ///
    /// All state changes happen on this task; the chat task and the
    /// reminder timers only ever reach it through their channels.
    pub async fn run(mut self) {
        self.scheduler.start();

        loop {
            let deadline = self.controller.speech_deadline();
            tokio::select! {
                action = self.action_rx.recv() => match action {
                    Some(Action::Quit) => {
                        self.controller.handle_action(Action::Quit);
                        break;
                    }
                    Some(action) => self.controller.handle_action(action),
                    None => break,
                },
                Some(reply) = self.chat_rx.recv() => {
                    self.controller.handle_chat_reply(reply);
                }
                Some(text) = self.reminder_rx.recv() => {
                    self.controller.handle_reminder(text);
                }
                _ = sleep_until(deadline), if deadline.is_some() => {
                    self.controller.expire_speech(Instant::now());
                }
            }
        }

        self.scheduler.stop();
        tracing::info!("engine loop stopped");
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    if let Some(deadline) = deadline {
        tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await;
    }
}
