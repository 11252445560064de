//! CLI command handlers

pub mod config;
pub mod play;

use std::path::Path;

use anyhow::Result;
use beard::Config;

/// Load configuration from an explicit path or the default location.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    Ok(config)
}
