//! Beard CLI - play an audio URL in a terminal player

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "beard")]
#[command(version)]
#[command(about = "A small audio player with play/pause, time display, and seek")]
#[command(long_about = "A small audio player with play/pause, time display, and seek.

Playback is simulated at the given duration; the player checks the URL
against the configured formats and shows errors the way an embedded player
would.

Controls: space or click the control to play/pause, click the track to seek,
q or Esc to quit.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a terminal player for an audio URL
    Play {
        /// Track URL; must end in an allowed extension (mp3, ogg, mp4 by default)
        url: String,
        /// Status text shown next to the control (defaults to the URL)
        #[arg(short, long)]
        text: Option<String>,
        /// Track length in seconds
        #[arg(short, long, default_value_t = commands::play::DEFAULT_DURATION_SECS, value_parser = commands::play::parse_duration)]
        duration: f64,
        /// Read configuration from this file instead of the default location
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration
    Show {
        /// Read configuration from this file instead of the default location
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the default config file path
    Path,
}

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            url,
            text,
            duration,
            config,
        } => commands::play::handle(&url, text.as_deref(), duration, config.as_deref()),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show { config } => commands::config::handle_show(config.as_deref()),
            ConfigCommands::Path => commands::config::handle_path(),
        },
    }
}
