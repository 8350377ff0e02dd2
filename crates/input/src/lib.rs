//! Input mapping (front-end facing).
//!
//! Turns raw input into [`crate::types::Command`] values. Two sources are
//! supported: `crossterm` key events for the terminal front end and whole
//! lines of text for the plain console front end. Neither touches the game;
//! callers forward the commands to whoever owns it.

pub mod line;
pub mod map;

pub use tetrion_types as types;

pub use line::{parse_line, LineInput};
pub use map::{handle_key_event, should_quit};
