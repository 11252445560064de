//! Terminal host loop for a single player.
//!
//! Owns the terminal for the duration of playback: raw mode, alternate
//! screen, and mouse capture are enabled on entry and always restored.

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use tracing::debug;

use super::theme::Theme;
use super::view::TerminalView;
use super::widget::{PlayerLayout, PlayerWidget};
use crate::player::{Beard, Clock, MediaElement, MediaEvents};

/// Height of the player widget, border included.
pub const PLAYER_HEIGHT: u16 = 5;

/// Result of processing an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

/// Settings for the terminal loop.
#[derive(Debug, Clone)]
pub struct AppOptions {
    pub theme: Theme,
    pub tick: Duration,
    pub title: String,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            tick: Duration::from_millis(50),
            title: "beard".to_string(),
        }
    }
}

/// Area the widget occupies inside the terminal.
pub fn player_area(frame: Rect) -> Rect {
    Rect::new(
        frame.x,
        frame.y,
        frame.width,
        PLAYER_HEIGHT.min(frame.height),
    )
}

/// Handle a keyboard event.
pub fn handle_key_event<M, C>(key: KeyEvent, player: &mut Beard<M, TerminalView, C>) -> InputResult
where
    M: MediaElement,
    C: Clock,
{
    if key.kind != KeyEventKind::Press {
        return InputResult::Continue;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,
        KeyCode::Char(' ') => {
            player.play();
            InputResult::Continue
        }
        _ => InputResult::Continue,
    }
}

/// Handle a mouse event.
///
/// Clicking the control toggles playback, moving over the track places the
/// seek cursor, and clicking the track seeks.
pub fn handle_mouse_event<M, C>(
    mouse: MouseEvent,
    layout: &PlayerLayout,
    player: &mut Beard<M, TerminalView, C>,
) -> InputResult
where
    M: MediaElement,
    C: Clock,
{
    let pointer = layout.track_pointer(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if layout.hits_control(mouse.column, mouse.row) {
                player.play();
            } else if let Some(pointer) = pointer {
                player.seek_to_pointer(&pointer);
            }
        }
        MouseEventKind::Moved => match pointer {
            Some(pointer) => player.place_seek_cursor(pointer.offset_x),
            None => player.view_mut().clear_cursor(),
        },
        _ => {}
    }

    InputResult::Continue
}

/// Dispatch any terminal event.
pub fn handle_event<M, C>(
    event: Event,
    layout: &PlayerLayout,
    player: &mut Beard<M, TerminalView, C>,
) -> InputResult
where
    M: MediaElement,
    C: Clock,
{
    match event {
        Event::Key(key) => handle_key_event(key, player),
        Event::Mouse(mouse) => handle_mouse_event(mouse, layout, player),
        _ => InputResult::Continue, // Resize is picked up by the next draw
    }
}

struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

/// Run the player until the user quits.
#[cfg(not(tarpaulin_include))]
pub fn run_player<M, C>(player: &mut Beard<M, TerminalView, C>, options: &AppOptions) -> Result<()>
where
    M: MediaElement + MediaEvents,
    C: Clock,
{
    let mut guard = TerminalGuard::enter()?;
    let mut layout = PlayerLayout::new(Rect::default());
    debug!("terminal player started");

    loop {
        player.pump();

        guard.terminal.draw(|frame| {
            let area = player_area(frame.area());
            layout = PlayerLayout::new(area);
            frame.render_widget(
                PlayerWidget::new(player.view(), &options.theme).title(&options.title),
                area,
            );
        })?;

        if !event::poll(options.tick)? {
            continue;
        }
        if handle_event(event::read()?, &layout, player) == InputResult::Quit {
            break;
        }
    }

    debug!("terminal player stopped");
    Ok(())
}
