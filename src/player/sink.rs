//! Presentation capabilities the player core renders into.
//!
//! A concrete UI binding implements these traits; the core never touches
//! widgets directly. `MemoryView` is a headless implementation for tests.

/// Receives the status text (track title, error messages).
pub trait TextSink {
    fn set_text(&mut self, text: &str);
}

/// Receives the formatted time string.
pub trait TimeSink {
    fn set_time(&mut self, time: &str);
}

/// Receives the progress indicator width, in percent.
pub trait ProgressSink {
    fn set_progress(&mut self, percent: f64);
}

/// The play/pause control.
pub trait PlayControl {
    /// Toggle the "playing" indicator.
    fn set_playing(&mut self, playing: bool);

    /// Update the control label. Bindings without a label ignore it.
    fn set_label(&mut self, _label: &str) {}
}

/// The hover cursor over the seek track.
pub trait SeekCursor {
    fn place_cursor(&mut self, _offset_x: f64) {}
}

/// Pointer position over the seek track.
pub trait PointerSource {
    /// Horizontal pointer offset from the start of the track.
    fn pointer_offset_x(&self) -> f64;

    /// Width of the track, in the same unit as the offset.
    fn track_width(&self) -> f64;
}

/// Everything the player renders into.
pub trait View: TextSink + TimeSink + ProgressSink + PlayControl + SeekCursor {}

impl<T> View for T where T: TextSink + TimeSink + ProgressSink + PlayControl + SeekCursor {}

/// A pointer position captured from a UI event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackPointer {
    pub offset_x: f64,
    pub width: f64,
}

impl TrackPointer {
    pub fn new(offset_x: f64, width: f64) -> Self {
        Self { offset_x, width }
    }
}

impl PointerSource for TrackPointer {
    fn pointer_offset_x(&self) -> f64 {
        self.offset_x
    }

    fn track_width(&self) -> f64 {
        self.width
    }
}

/// Headless view that keeps the last value pushed to each sink.
///
/// Meant for tests: `text_history` keeps every status text and is never
/// trimmed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryView {
    pub text: String,
    pub time: String,
    pub progress: Option<f64>,
    pub playing: bool,
    pub label: Option<String>,
    pub cursor: Option<f64>,
    /// Every status text shown, oldest first
    pub text_history: Vec<String>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TextSink for MemoryView {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.text_history.push(text.to_string());
    }
}

impl TimeSink for MemoryView {
    fn set_time(&mut self, time: &str) {
        self.time = time.to_string();
    }
}

impl ProgressSink for MemoryView {
    fn set_progress(&mut self, percent: f64) {
        self.progress = Some(percent);
    }
}

impl PlayControl for MemoryView {
    fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    fn set_label(&mut self, label: &str) {
        self.label = Some(label.to_string());
    }
}

impl SeekCursor for MemoryView {
    fn place_cursor(&mut self, offset_x: f64) {
        self.cursor = Some(offset_x);
    }
}
