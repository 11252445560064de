//! Integration tests for beard

mod helpers;

mod cli_test;
mod config_test;
mod player_test;
mod render_test;
