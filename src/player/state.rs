//! Player state and the options a player is built with.

use std::time::Duration;

use super::format::FormatWhitelist;
use super::reporter::{RevertPolicy, DEFAULT_REVERT_DELAY};
use super::time::DEFAULT_LOADING_TEXT;

/// Transport state of a player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlaybackStatus {
    /// Initial state; also entered by `pause` and `load`
    #[default]
    Paused,
    Playing,
}

/// Everything the state machine tracks about one player.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerState {
    pub status: PlaybackStatus,
    pub current_source: Option<String>,
    pub current_time_seconds: f64,
    pub duration_seconds: Option<f64>,
}

impl PlayerState {
    pub fn is_playing(&self) -> bool {
        self.status == PlaybackStatus::Playing
    }
}

/// A request to switch to another track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub url: Option<String>,
    pub text: String,
}

impl LoadRequest {
    pub fn new(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            text: text.into(),
        }
    }
}

/// Play/pause control labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlLabels {
    /// Shown while paused
    pub play: String,
    /// Shown while playing
    pub pause: String,
}

impl Default for ControlLabels {
    fn default() -> Self {
        Self {
            play: "Play".to_string(),
            pause: "Pause".to_string(),
        }
    }
}

/// Tunables for a player instance.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerOptions {
    pub formats: FormatWhitelist,
    pub error_revert_delay: Duration,
    pub revert_policy: RevertPolicy,
    pub loading_text: String,
    /// `None` leaves the control unlabeled
    pub labels: Option<ControlLabels>,
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self {
            formats: FormatWhitelist::default(),
            error_revert_delay: DEFAULT_REVERT_DELAY,
            revert_policy: RevertPolicy::default(),
            loading_text: DEFAULT_LOADING_TEXT.to_string(),
            labels: Some(ControlLabels::default()),
        }
    }
}
