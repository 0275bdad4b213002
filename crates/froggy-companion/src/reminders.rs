//! Repeating reminder timers.

use std::time::Duration;

use froggy_common::Reminder;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

/// Delivers each registered reminder's text over the outbound channel
/// after every full interval.
///
/// Reminders are static data registered before `start()`; there are no
/// error conditions. The channel is the only way reminder text reaches
/// the rest of the system.
pub struct ReminderScheduler {
    tx: mpsc::Sender<String>,
    reminders: Vec<Reminder>,
    handles: Vec<JoinHandle<()>>,
}

impl ReminderScheduler {
    pub fn new(tx: mpsc::Sender<String>) -> Self {
        Self {
            tx,
            reminders: Vec::new(),
            handles: Vec::new(),
        }
    }

    /// Register a reminder. Builder-style so registrations chain.
    pub fn add(mut self, reminder: Reminder) -> Self {
        self.reminders.push(reminder);
        self
    }

    /// Spawn one repeating timer per registered reminder. The first
    /// delivery happens one full interval after start, not immediately.
    pub fn start(&mut self) {
        for reminder in &self.reminders {
            let tx = self.tx.clone();
            let text = reminder.text.clone();
            let period = Duration::from_millis(reminder.interval_ms);
            let handle = tokio::spawn(async move {
                let mut tick = time::interval_at(time::Instant::now() + period, period);
                tick.set_missed_tick_behavior(MissedTickBehavior::Delay);
                loop {
                    tick.tick().await;
                    if tx.send(text.clone()).await.is_err() {
                        break;
                    }
                }
            });
            self.handles.push(handle);
        }
        if !self.reminders.is_empty() {
            tracing::info!(count = self.reminders.len(), "reminder timers started");
        }
    }

    /// Halt all timers. Nothing is delivered after this returns.
    pub fn stop(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }
}

impl Drop for ReminderScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}
