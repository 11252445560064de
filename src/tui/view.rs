//! Terminal-side state the player renders into.

use crate::player::reporter::ERROR_PREFIX;
use crate::player::{PlayControl, ProgressSink, SeekCursor, TextSink, TimeSink};

/// Sink implementation backing the terminal widget.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TerminalView {
    pub text: String,
    pub time: String,
    pub progress: f64,
    pub playing: bool,
    pub label: Option<String>,
    /// Hover cursor, in columns from the start of the track
    pub cursor: Option<f64>,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_cursor(&mut self) {
        self.cursor = None;
    }

    /// Whether the status text is an error message.
    pub fn is_error(&self) -> bool {
        self.text.starts_with(ERROR_PREFIX)
    }
}

impl TextSink for TerminalView {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

impl TimeSink for TerminalView {
    fn set_time(&mut self, time: &str) {
        self.time = time.to_string();
    }
}

impl ProgressSink for TerminalView {
    fn set_progress(&mut self, percent: f64) {
        self.progress = percent;
    }
}

impl PlayControl for TerminalView {
    fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    fn set_label(&mut self, label: &str) {
        self.label = Some(label.to_string());
    }
}

impl SeekCursor for TerminalView {
    fn place_cursor(&mut self, offset_x: f64) {
        self.cursor = Some(offset_x);
    }
}
