//! User configuration
//!
//! Read from `~/.config/beard/config.toml` (or an explicit path). Missing
//! files and missing fields fall back to defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::player::format::DEFAULT_FORMATS;
use crate::player::reporter::{RevertPolicy, DEFAULT_REVERT_DELAY};
use crate::player::state::{ControlLabels, PlayerOptions};
use crate::player::time::DEFAULT_LOADING_TEXT;
use crate::player::FormatWhitelist;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub player: PlayerConfig,
    pub ui: UiConfig,
}

/// `[player]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Playable file extensions, compared case-sensitively
    pub formats: Vec<String>,
    /// How long an error message stays before reverting
    pub error_revert_ms: u64,
    pub revert_policy: RevertPolicy,
    /// Time text shown until the duration is known
    pub loading_text: String,
    pub play_label: String,
    pub pause_label: String,
    pub show_labels: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        let labels = ControlLabels::default();
        Self {
            formats: DEFAULT_FORMATS.iter().map(|f| f.to_string()).collect(),
            error_revert_ms: DEFAULT_REVERT_DELAY.as_millis() as u64,
            revert_policy: RevertPolicy::default(),
            loading_text: DEFAULT_LOADING_TEXT.to_string(),
            play_label: labels.play,
            pause_label: labels.pause,
            show_labels: true,
        }
    }
}

/// `[ui]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// One of `default`, `classic`, `ocean`
    pub theme: String,
    /// Event poll interval of the terminal player
    pub tick_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            tick_ms: 50,
        }
    }
}

impl Config {
    /// Default config file location.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("beard").join("config.toml"))
    }

    /// Load from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`, using defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Options for a player built from this configuration.
    pub fn player_options(&self) -> PlayerOptions {
        let player = &self.player;
        PlayerOptions {
            formats: FormatWhitelist::new(player.formats.iter().cloned()),
            error_revert_delay: Duration::from_millis(player.error_revert_ms),
            revert_policy: player.revert_policy,
            loading_text: player.loading_text.clone(),
            labels: player.show_labels.then(|| ControlLabels {
                play: player.play_label.clone(),
                pause: player.pause_label.clone(),
            }),
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.ui.tick_ms.max(1))
    }
}
