//! Player core
//!
//! Wraps a host media primitive with a play/pause control, a time display,
//! and a seek track. Nothing here draws anything: the core pushes strings
//! and percentages into the sink traits of a [`View`].
//!
//! # Architecture
//!
//! - `format`: source URL validation by extension
//! - `time`: `M:SS` formatting and the time node text
//! - `progress`: progress percentage and seek fraction math
//! - `reporter`: transient error messages with cancelable reversion
//! - `timer`: clocks and one-shot timers for the host loop
//! - `controller`: the `Beard` state machine
//! - `media`, `sink`, `mount`: the seams to the host
//!
//! # Usage
//!
//! ```no_run
//! use beard::player::{Beard, LoadRequest, MemoryView, Mount, PlayerOptions, SimulatedMedia, SystemClock};
//!
//! let mount = Mount::from_attributes([("data-source", "track.mp3")]);
//! let media = SimulatedMedia::new(SystemClock, 180.0);
//! let mut player = Beard::initialize(&mount, media, MemoryView::new(), SystemClock, PlayerOptions::default());
//!
//! player.play();
//! player.load(LoadRequest::new("next.ogg", "Next up"));
//! ```

mod controller;
pub mod format;
pub mod media;
pub mod mount;
pub mod progress;
pub mod reporter;
pub mod sink;
pub mod state;
pub mod time;
pub mod timer;

pub use controller::Beard;
pub use format::{is_valid_format, FormatWhitelist};
pub use media::{MediaElement, MediaEvent, MediaEvents, SimulatedMedia};
pub use mount::Mount;
pub use progress::{compute_progress_percent, compute_seek_fraction, SeekRequest};
pub use reporter::{DisplayMessage, ErrorReporter, RevertPolicy};
pub use sink::{
    MemoryView, PlayControl, PointerSource, ProgressSink, SeekCursor, TextSink, TimeSink,
    TrackPointer, View,
};
pub use state::{ControlLabels, LoadRequest, PlaybackStatus, PlayerOptions, PlayerState};
pub use time::{format_seconds, format_time_display};
pub use timer::{Clock, ManualClock, SystemClock, TimerHandle, Timers};
