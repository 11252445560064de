//! Beard - an embeddable audio player core
//!
//! Play/pause toggling, elapsed/total time display, a seekable progress
//! track, and transient error messages that revert on their own. The core in
//! [`player`] talks to its host only through the media and sink traits, so
//! it runs the same under a terminal, a test harness, or any other binding.

pub mod config;
pub mod error;
pub mod player;
pub mod tui;

pub use config::Config;
pub use error::{ConfigError, PlayerError};
pub use player::Beard;
