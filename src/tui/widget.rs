//! Player widget rendering and hit-testing.
//!
//! Layout inside the border:
//!
//! ```text
//! [ Play ]   status text
//! ━━━━━━━━━━━━━━━│─────────────
//!                  1:05 of 3:00
//! ```

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    widgets::{Block, Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::theme::Theme;
use super::view::TerminalView;
use crate::player::TrackPointer;

/// Columns reserved for the play/pause control.
pub const CONTROL_WIDTH: u16 = 10;

const FILLED: char = '━';
const EMPTY: char = '─';
const CURSOR: char = '│';

/// Screen areas of one player widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerLayout {
    pub control: Rect,
    pub text: Rect,
    pub track: Rect,
    pub time: Rect,
}

fn row(inner: Rect, offset: u16) -> Rect {
    if offset < inner.height {
        Rect::new(inner.x, inner.y + offset, inner.width, 1)
    } else {
        Rect::default()
    }
}

fn contains(area: Rect, column: u16, line: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && line >= area.y
        && line < area.y.saturating_add(area.height)
}

impl PlayerLayout {
    /// Compute areas for a widget drawn into `area` (border included).
    pub fn new(area: Rect) -> Self {
        let inner = Block::bordered().inner(area);
        let first = row(inner, 0);

        let control_width = CONTROL_WIDTH.min(first.width);
        let control = Rect::new(first.x, first.y, control_width, first.height);
        let text = Rect::new(
            first.x.saturating_add(control_width + 1),
            first.y,
            first.width.saturating_sub(control_width + 1),
            first.height,
        );

        Self {
            control,
            text,
            track: row(inner, 1),
            time: row(inner, 2),
        }
    }

    /// Whether a click at `(column, line)` hits the play/pause control.
    pub fn hits_control(&self, column: u16, line: u16) -> bool {
        contains(self.control, column, line)
    }

    /// Pointer position over the track, if `(column, line)` is on it.
    pub fn track_pointer(&self, column: u16, line: u16) -> Option<TrackPointer> {
        if !contains(self.track, column, line) {
            return None;
        }
        Some(TrackPointer::new(
            f64::from(column - self.track.x),
            f64::from(self.track.width),
        ))
    }
}

/// Build the track characters for a given progress.
///
/// Returns the characters and the number of filled positions. The cursor,
/// when inside the track, replaces the character under it.
pub fn build_track_chars(width: usize, percent: f64, cursor: Option<usize>) -> (Vec<char>, usize) {
    let ratio = if percent.is_finite() {
        (percent / 100.0).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (width as f64 * ratio) as usize;

    let mut track: Vec<char> = (0..width)
        .map(|i| if i < filled { FILLED } else { EMPTY })
        .collect();

    if let Some(col) = cursor {
        if col < width {
            track[col] = CURSOR;
        }
    }

    (track, filled)
}

/// Truncate `text` to `max` columns, ending with an ellipsis when cut.
pub fn fit_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::with_capacity(max);
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Renders a `TerminalView` as a bordered player.
pub struct PlayerWidget<'a> {
    view: &'a TerminalView,
    theme: &'a Theme,
    title: &'a str,
}

impl<'a> PlayerWidget<'a> {
    pub fn new(view: &'a TerminalView, theme: &'a Theme) -> Self {
        Self {
            view,
            theme,
            title: "beard",
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    fn control_label(&self) -> String {
        match &self.view.label {
            Some(label) => format!("[ {} ]", label),
            None if self.view.playing => "[ ⏸ ]".to_string(),
            None => "[ ▶ ]".to_string(),
        }
    }
}

impl Widget for PlayerWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = PlayerLayout::new(area);

        Block::bordered()
            .title(format!(" {} ", self.title))
            .border_style(self.theme.text_secondary_style())
            .render(area, buf);

        if layout.control.width > 0 {
            buf.set_stringn(
                layout.control.x,
                layout.control.y,
                self.control_label(),
                layout.control.width as usize,
                self.theme.accent_bold_style(),
            );
        }

        if layout.text.width > 0 {
            let style = if self.view.is_error() {
                self.theme.error_style()
            } else {
                self.theme.text_style()
            };
            let width = layout.text.width as usize;
            buf.set_stringn(
                layout.text.x,
                layout.text.y,
                fit_width(&self.view.text, width),
                width,
                style,
            );
        }

        if layout.track.width > 0 {
            let cursor = self
                .view
                .cursor
                .filter(|offset| *offset >= 0.0)
                .map(|offset| offset as usize);
            let (track, filled) =
                build_track_chars(layout.track.width as usize, self.view.progress, cursor);

            for (i, c) in track.into_iter().enumerate() {
                let style = if c == CURSOR {
                    self.theme.cursor_style()
                } else if i < filled {
                    self.theme.accent_style()
                } else {
                    self.theme.text_secondary_style()
                };
                buf[(layout.track.x + i as u16, layout.track.y)]
                    .set_char(c)
                    .set_style(style);
            }
        }

        if layout.time.width > 0 {
            Paragraph::new(self.view.time.as_str())
                .style(self.theme.text_style())
                .alignment(Alignment::Right)
                .render(layout.time, buf);
        }
    }
}
