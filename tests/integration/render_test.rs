//! Formatted time and the rendered terminal widget

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use beard::player::{format_seconds, Beard, ManualClock, Mount, PlayerOptions, SimulatedMedia};
use beard::tui::{PlayerWidget, TerminalView, Theme};

use crate::helpers::TRACK_SECS;

fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area;
    (area.y..area.y + area.height)
        .map(|y| {
            (area.x..area.x + area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn time_table() {
    let inputs: [(&str, f64); 13] = [
        ("0", 0.0),
        ("5", 5.0),
        ("59.4", 59.4),
        ("59.5", 59.5),
        ("60", 60.0),
        ("61", 61.0),
        ("90", 90.0),
        ("125", 125.0),
        ("150", 150.0),
        ("3599", 3599.0),
        ("3600", 3600.0),
        ("-1", -1.0),
        ("NaN", f64::NAN),
    ];
    let table = inputs
        .iter()
        .map(|(label, secs)| format!("{} -> {}", label, format_seconds(*secs)))
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!(table, @r"
    0 -> 0:00
    5 -> 0:05
    59.4 -> 0:59
    59.5 -> 1:00
    60 -> 1:00
    61 -> 1:01
    90 -> 2:30
    125 -> 2:05
    150 -> 3:30
    3599 -> 60:59
    3600 -> 60:00
    -1 -> 0:00
    NaN -> 0:00
    ");
}

#[test]
fn widget_after_seek() {
    let clock = ManualClock::new();
    let mut player = Beard::initialize(
        &Mount::new()
            .with_source("track.mp3")
            .with_default_text("Now playing"),
        SimulatedMedia::new(clock.clone(), TRACK_SECS),
        TerminalView::new(),
        clock,
        PlayerOptions::default(),
    );
    player.pump();
    player.seek(0.25);

    let theme = Theme::default();
    let area = Rect::new(0, 0, 30, 5);
    let mut buf = Buffer::empty(area);
    PlayerWidget::new(player.view(), &theme).render(area, &mut buf);

    insta::assert_snapshot!(buffer_text(&buf), @r"
    ┌ beard ─────────────────────┐
    │[ Play ]   Now playing      │
    │━━━━━━━─────────────────────│
    │                0:45 of 3:00│
    └────────────────────────────┘
    ");
}
