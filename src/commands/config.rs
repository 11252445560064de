//! Config subcommands handler

use std::path::Path;

use anyhow::Result;
use beard::tui::Theme;
use beard::Config;

use super::load_config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(path: Option<&Path>) -> Result<()> {
    let config = load_config(path)?;
    let toml_str = config.to_toml()?;
    let theme = Theme::by_name(&config.ui.theme).unwrap_or_default();
    println!("{}", theme.primary_text(&toml_str));
    Ok(())
}

/// Print where the config file is read from.
#[cfg(not(tarpaulin_include))]
pub fn handle_path() -> Result<()> {
    let path = Config::config_path()?;
    println!("{}", path.display());
    Ok(())
}
