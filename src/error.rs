//! Error types for the player core and configuration.

use std::path::PathBuf;

/// Errors raised by player operations.
///
/// These never escape the player: they are turned into transient status
/// text by the error reporter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayerError {
    #[error("Invalid audio url.")]
    InvalidSource { url: Option<String> },
}

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Could not determine the user config directory")]
    NoConfigDir,
}
