//! Integration tests for the beard CLI

use predicates::prelude::*;

use crate::helpers::{beard_cmd, write_config};

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_commands() {
    beard_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: beard"))
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn play_help_shows_arguments() {
    beard_cmd()
        .args(["play", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<URL>"))
        .stdout(predicate::str::contains("--duration"));
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn play_rejects_unsupported_url_before_opening_terminal() {
    let (dir, _path) = write_config("");
    let config = dir.path().join("absent.toml");

    beard_cmd()
        .args(["play", "bad.xyz", "--config"])
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid audio url"));
}

#[test]
fn play_respects_configured_formats() {
    let (_dir, path) = write_config("[player]\nformats = [\"flac\"]\n");

    beard_cmd()
        .args(["play", "track.mp3", "--config"])
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid audio url: track.mp3"));
}

#[test]
fn play_rejects_non_positive_duration() {
    beard_cmd()
        .args(["play", "track.mp3", "--duration", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("positive"));
}

#[test]
fn play_requires_url() {
    beard_cmd()
        .arg("play")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("<URL>"));
}

// ============================================================================
// Config Command Tests
// ============================================================================

#[test]
fn config_show_prints_effective_values() {
    let (_dir, path) = write_config("[player]\nerror_revert_ms = 1500\n");

    beard_cmd()
        .args(["config", "show", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("[player]"))
        .stdout(predicate::str::contains("error_revert_ms = 1500"))
        .stdout(predicate::str::contains("revert_policy = \"replace\""))
        .stdout(predicate::str::contains("[ui]"));
}

#[test]
fn config_show_reports_parse_errors() {
    let (_dir, path) = write_config("[player\n");

    beard_cmd()
        .args(["config", "show", "--config"])
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn config_path_ends_with_beard_config() {
    beard_cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}
