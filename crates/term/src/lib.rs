//! Terminal presentation.
//!
//! Everything here reads a [`core::GameSnapshot`] and never mutates a game:
//!
//! - [`text`]: the plain text view printed by the console front end
//! - [`game_view`]: lays a snapshot out into a styled [`FrameBuffer`]
//! - [`renderer`]: flushes framebuffers to a real terminal via `crossterm`
//!
//! `text` and `game_view` are pure and unit-tested; only `renderer` does I/O.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod text;

pub use tetrion_core as core;
pub use tetrion_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
pub use text::text_view;
