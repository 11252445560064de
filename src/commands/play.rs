//! Play command handler

use std::path::Path;

use anyhow::{bail, Result};
use tracing::warn;

use beard::player::{Beard, Mount, SimulatedMedia, SystemClock};
use beard::tui::{run_player, AppOptions, TerminalView, Theme};

use super::load_config;

/// Length assumed for the simulated track when none is given.
pub const DEFAULT_DURATION_SECS: f64 = 180.0;

/// Parse `--duration`: a positive, finite number of seconds.
pub fn parse_duration(value: &str) -> Result<f64, String> {
    let secs: f64 = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    if !secs.is_finite() || secs <= 0.0 {
        return Err(format!("duration must be a positive number of seconds, got {}", value));
    }
    Ok(secs)
}

/// Open a terminal player for `url`.
///
/// The URL is checked against the configured formats before the terminal is
/// taken over, so a bad URL fails fast with a plain error.
#[cfg(not(tarpaulin_include))]
pub fn handle(url: &str, text: Option<&str>, duration: f64, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let options = config.player_options();

    if !options.formats.is_valid(Some(url)) {
        bail!("Invalid audio url: {}", url);
    }

    let theme = Theme::by_name(&config.ui.theme).unwrap_or_else(|| {
        warn!(theme = %config.ui.theme, "unknown theme, using default");
        Theme::default()
    });
    let app = AppOptions {
        theme,
        tick: config.tick_interval(),
        title: "beard".to_string(),
    };

    let mount = Mount::new()
        .with_source(url)
        .with_default_text(text.unwrap_or(url));
    let mut player = Beard::initialize(
        &mount,
        SimulatedMedia::new(SystemClock, duration),
        TerminalView::new(),
        SystemClock,
        options,
    );

    run_player(&mut player, &app)
}
