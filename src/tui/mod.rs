//! Terminal presentation of the player
//!
//! Maps the player's sinks onto a ratatui widget and drives it from a
//! crossterm event loop.

pub mod app;
pub mod theme;
pub mod view;
pub mod widget;

pub use app::{run_player, AppOptions, InputResult};
pub use theme::Theme;
pub use view::TerminalView;
pub use widget::{PlayerLayout, PlayerWidget};
