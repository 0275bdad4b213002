//! The speech display surface and its timing rules.

use std::time::{Duration, Instant};

use froggy_common::SpeechStyle;

/// One visible message. Single slot, last write wins, no queue.
#[derive(Debug, Clone)]
pub struct SpeechEntry {
    pub text: String,
    pub shown_at: Instant,
    pub duration: Duration,
}

impl SpeechEntry {
    pub fn deadline(&self) -> Instant {
        self.shown_at + self.duration
    }

    /// Returns `true` if this entry's visible duration has elapsed.
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.deadline()
    }
}

/// The transient speech output area.
///
/// `show` replaces whatever is visible and restarts the clear deadline.
/// Only the current entry's own deadline can clear the surface, so a
/// superseded message's timer never wipes a newer one.
#[derive(Debug)]
pub struct SpeechSurface {
    current: Option<SpeechEntry>,
    style: SpeechStyle,
}

impl SpeechSurface {
    pub fn new(style: SpeechStyle) -> Self {
        Self {
            current: None,
            style,
        }
    }

    pub fn style(&self) -> &SpeechStyle {
        &self.style
    }

    /// Display `text`, superseding any current entry, and restart the
    /// clear deadline at `duration` from now.
    pub fn show(&mut self, text: String, duration: Duration) {
        self.current = Some(SpeechEntry {
            text,
            shown_at: Instant::now(),
            duration,
        });
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&SpeechEntry> {
        self.current.as_ref()
    }

    pub fn text(&self) -> Option<&str> {
        self.current.as_ref().map(|entry| entry.text.as_str())
    }

    /// Deadline of the current entry, if one is visible.
    pub fn deadline(&self) -> Option<Instant> {
        self.current.as_ref().map(SpeechEntry::deadline)
    }

    /// Clear the current entry if its deadline has passed.
    /// Returns `true` when something was cleared.
    pub fn expire_if_due(&mut self, now: Instant) -> bool {
        match &self.current {
            Some(entry) if entry.is_expired(now) => {
                self.current = None;
                true
            }
            _ => false,
        }
    }
}

/// Visible duration for a chat reply read at `wpm` words per minute,
/// rounded up to the next millisecond.
pub fn reading_duration(text: &str, wpm: u32) -> Duration {
    let words = text.split_whitespace().count() as u64;
    Duration::from_millis((60_000 * words).div_ceil(u64::from(wpm.max(1))))
}
