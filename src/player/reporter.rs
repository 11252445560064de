//! Transient error messages over the status text.
//!
//! An error replaces the status text with `"Error: <message>"` and schedules
//! a reversion to the text that was shown before, after a fixed delay.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::sink::TextSink;
use super::timer::{TimerHandle, Timers};

/// Delay before an error message reverts.
pub const DEFAULT_REVERT_DELAY: Duration = Duration::from_millis(3000);

/// Prefix put in front of every reported error.
pub const ERROR_PREFIX: &str = "Error: ";

/// How overlapping errors interact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevertPolicy {
    /// A new error cancels the pending reversion and still restores the text
    /// shown before the first error. Setting ordinary text also cancels it.
    #[default]
    Replace,
    /// Every error snapshots whatever is shown (possibly an earlier error)
    /// and gets its own reversion. Nothing is canceled.
    Overlap,
}

/// The status text currently shown, and the text an error will revert to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayMessage {
    pub text: String,
    pub previous: Option<String>,
}

/// Owns the status text and its pending reversions.
#[derive(Debug)]
pub struct ErrorReporter {
    message: DisplayMessage,
    timers: Timers<String>,
    active: Option<TimerHandle>,
    delay: Duration,
    policy: RevertPolicy,
}

impl Default for ErrorReporter {
    fn default() -> Self {
        Self::new(DEFAULT_REVERT_DELAY, RevertPolicy::default())
    }
}

impl ErrorReporter {
    pub fn new(delay: Duration, policy: RevertPolicy) -> Self {
        Self {
            message: DisplayMessage::default(),
            timers: Timers::new(),
            active: None,
            delay,
            policy,
        }
    }

    pub fn message(&self) -> &DisplayMessage {
        &self.message
    }

    /// Text currently shown.
    pub fn text(&self) -> &str {
        &self.message.text
    }

    pub fn policy(&self) -> RevertPolicy {
        self.policy
    }

    /// Number of reversions still waiting to fire.
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    /// Earliest pending reversion.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Show ordinary status text.
    pub fn show_text(&mut self, text: &str, sink: &mut dyn TextSink) {
        if self.policy == RevertPolicy::Replace {
            if let Some(handle) = self.active.take() {
                self.timers.cancel(handle);
                trace!("status text replaced, pending reversion canceled");
            }
            self.message.previous = None;
        }
        self.set(text, sink);
    }

    /// Show `"Error: <message>"` and schedule the reversion.
    pub fn report(&mut self, message: &str, now: Instant, sink: &mut dyn TextSink) {
        let restore = match self.policy {
            RevertPolicy::Replace => {
                if let Some(handle) = self.active.take() {
                    self.timers.cancel(handle);
                }
                self.message
                    .previous
                    .clone()
                    .unwrap_or_else(|| self.message.text.clone())
            }
            RevertPolicy::Overlap => self.message.text.clone(),
        };

        debug!(error = message, restore = %restore, "showing error");

        self.message.previous = Some(restore.clone());
        let handle = self.timers.schedule(now + self.delay, restore);
        self.active = Some(handle);
        self.set(&format!("{}{}", ERROR_PREFIX, message), sink);
    }

    /// Apply reversions due at `now`. Returns how many fired.
    pub fn tick(&mut self, now: Instant, sink: &mut dyn TextSink) -> usize {
        let due = self.timers.drain_due(now);
        let fired = due.len();

        for text in due {
            trace!(text = %text, "reverting status text");
            self.set(&text, sink);
        }

        if let Some(handle) = self.active {
            if !self.timers.is_pending(handle) {
                self.active = None;
                self.message.previous = None;
            }
        }

        fired
    }

    fn set(&mut self, text: &str, sink: &mut dyn TextSink) {
        self.message.text = text.to_string();
        sink.set_text(text);
    }
}
