//! Configuration files and their effect on the player

use std::time::Duration;

use beard::player::{LoadRequest, Mount, RevertPolicy};
use beard::{Config, ConfigError};

use crate::helpers::{mount_player, write_config};

#[test]
fn missing_file_yields_defaults() {
    let (dir, _path) = write_config("");
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn file_values_override_defaults() {
    let (_dir, path) = write_config(
        r#"
[player]
formats = ["flac"]
error_revert_ms = 1500
revert_policy = "overlap"
loading_text = "buffering"

[ui]
theme = "ocean"
"#,
    );

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.player.formats, vec!["flac"]);
    assert_eq!(config.player.error_revert_ms, 1500);
    assert_eq!(config.player.revert_policy, RevertPolicy::Overlap);
    assert_eq!(config.ui.theme, "ocean");
    assert_eq!(config.ui.tick_ms, 50);
}

#[test]
fn malformed_file_is_a_parse_error() {
    let (_dir, path) = write_config("[player\nformats = 3");
    let err = Config::load_from(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn configured_player_uses_file_settings() {
    let (_dir, path) = write_config(
        r#"
[player]
formats = ["flac"]
error_revert_ms = 1500
loading_text = "buffering"
show_labels = false
"#,
    );
    let options = Config::load_from(&path).unwrap().player_options();

    let (mut player, clock) = mount_player(
        Mount::new()
            .with_source("song.flac")
            .with_default_text("Ready"),
        options,
    );
    assert_eq!(player.view().time, "buffering");
    assert_eq!(player.view().label, None);

    player.load(LoadRequest::new("song.mp3", "Other"));
    assert_eq!(player.view().text, "Error: Invalid audio url.");

    clock.advance(Duration::from_millis(1500));
    player.tick();
    assert_eq!(player.view().text, "Ready");
}
