//! Shared test utilities

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

use beard::player::{
    Beard, ManualClock, MemoryView, Mount, PlayerOptions, SimulatedMedia,
};

/// Track length used by the simulated media in these tests.
pub const TRACK_SECS: f64 = 180.0;

pub type TestPlayer = Beard<SimulatedMedia<ManualClock>, MemoryView, ManualClock>;

/// Mount a headless player on a manual clock.
pub fn mount_player(mount: Mount, options: PlayerOptions) -> (TestPlayer, ManualClock) {
    let clock = ManualClock::new();
    let media = SimulatedMedia::new(clock.clone(), TRACK_SECS);
    let player = Beard::initialize(&mount, media, MemoryView::new(), clock.clone(), options);
    (player, clock)
}

/// Mounted on `track.mp3` with "Now playing", media already playable.
pub fn ready_player() -> (TestPlayer, ManualClock) {
    let mount = Mount::new()
        .with_source("track.mp3")
        .with_default_text("Now playing");
    let (mut player, clock) = mount_player(mount, PlayerOptions::default());
    player.pump();
    (player, clock)
}

/// Write `content` to a config file inside a fresh temp dir.
pub fn write_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

/// The beard binary, with color and user config kept out of the way.
pub fn beard_cmd() -> Command {
    let mut cmd = Command::cargo_bin("beard").expect("beard binary not built");
    cmd.env("NO_COLOR", "1");
    cmd
}
