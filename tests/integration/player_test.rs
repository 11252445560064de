//! End-to-end playback scenarios on a headless view

use std::time::Duration;

use beard::player::{
    Clock, LoadRequest, MediaElement, Mount, PlayerOptions, TrackPointer,
};

use crate::helpers::{mount_player, ready_player};

// ============================================================================
// Loading and playback
// ============================================================================

#[test]
fn mount_shows_default_text_and_loading_time() {
    let mount = Mount::from_attributes([
        ("data-source", "track.mp3"),
        ("data-default", "Now playing"),
    ]);
    let (player, _clock) = mount_player(mount, PlayerOptions::default());

    assert_eq!(player.view().text, "Now playing");
    assert_eq!(player.view().time, "loading...");
    assert_eq!(player.current_source(), Some("track.mp3"));
    assert!(!player.is_playing());
}

#[test]
fn time_display_follows_playback() {
    let (mut player, clock) = ready_player();
    assert_eq!(player.view().time, "0:00 of 3:00");

    player.play();
    clock.advance(Duration::from_secs(30));
    player.pump();

    assert_eq!(player.view().time, "0:30 of 3:00");
    let progress = player.view().progress.unwrap_or_default();
    assert!((progress - 100.0 / 6.0).abs() < 1e-9);
}

#[test]
fn invalid_load_keeps_playing_and_reverts_message() {
    let (mut player, clock) = ready_player();
    player.play();

    player.load(LoadRequest::new("bad.xyz", "Other track"));

    assert!(player.is_playing());
    assert!(player.media().is_playing());
    assert_eq!(player.current_source(), Some("track.mp3"));
    assert_eq!(player.view().text, "Error: Invalid audio url.");

    clock.advance(Duration::from_millis(2999));
    player.pump();
    assert_eq!(player.view().text, "Error: Invalid audio url.");

    clock.advance(Duration::from_millis(1));
    player.pump();
    assert_eq!(player.view().text, "Now playing");
}

#[test]
fn valid_load_pauses_and_switches_source() {
    let (mut player, _clock) = ready_player();
    player.play();

    player.load(LoadRequest::new("next.ogg", "Next up"));

    assert!(!player.is_playing());
    assert_eq!(player.current_source(), Some("next.ogg"));
    assert_eq!(player.media().source(), Some("next.ogg"));
    assert_eq!(player.view().text, "Next up");
    assert_eq!(player.view().time, "loading...");

    player.pump();
    assert_eq!(player.view().time, "0:00 of 3:00");
}

#[test]
fn end_of_track_pauses_player() {
    let (mut player, clock) = ready_player();
    player.play();

    clock.advance(Duration::from_secs(200));
    player.pump();

    assert!(!player.is_playing());
    assert!(!player.view().playing);
    assert_eq!(player.view().time, "3:00 of 3:00");
    assert_eq!(player.view().progress, Some(100.0));
}

// ============================================================================
// Seeking
// ============================================================================

#[test]
fn pointer_seek_moves_time_and_progress() {
    let (mut player, _clock) = ready_player();

    assert!(player.seek_to_pointer(&TrackPointer::new(100.0, 400.0)));

    assert_eq!(player.state().current_time_seconds, 45.0);
    assert_eq!(player.view().time, "0:45 of 3:00");
    assert_eq!(player.view().progress, Some(25.0));
}

#[test]
fn seek_is_ignored_until_duration_known() {
    let (mut player, _clock) = mount_player(
        Mount::new().with_source("track.mp3"),
        PlayerOptions::default(),
    );

    assert!(!player.seek(0.5));
    assert_eq!(player.state().current_time_seconds, 0.0);
    assert_eq!(player.view().time, "loading...");
}

#[test]
fn seek_past_end_is_clamped() {
    let (mut player, _clock) = ready_player();

    assert!(player.seek(1.5));
    assert_eq!(player.state().current_time_seconds, 180.0);

    assert!(player.seek(-0.2));
    assert_eq!(player.state().current_time_seconds, 0.0);
}

#[test]
fn seek_during_playback_outlasts_pending_time_update() {
    let (mut player, clock) = ready_player();
    player.play();

    // Playback moved on but its notification has not been delivered yet
    clock.advance(Duration::from_secs(30));
    assert!(player.seek(0.5));
    player.pump();

    assert!(player.is_playing());
    assert_eq!(player.state().current_time_seconds, 90.0);
    assert_eq!(player.view().progress, Some(50.0));
    assert_eq!(player.view().time, "2:30 of 3:00");
}

// ============================================================================
// Multiple players
// ============================================================================

#[test]
fn players_are_independent() {
    let (mut first, first_clock) = ready_player();
    let (mut second, _second_clock) = ready_player();

    first.play();
    first.report_error("first only");
    first_clock.advance(Duration::from_secs(1));
    first.pump();
    second.pump();

    assert!(first.is_playing());
    assert_eq!(first.view().time, "0:01 of 3:00");
    assert!(!second.is_playing());
    assert_eq!(first.view().text, "Error: first only");
    assert_eq!(second.view().text, "Now playing");
    assert_eq!(second.view().time, "0:00 of 3:00");
    assert!(first.clock().now() > second.clock().now());
}
