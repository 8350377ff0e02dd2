//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the game rules and state management. It has **no
//! dependencies** on UI, timers or I/O:
//!
//! - **Deterministic**: the same seed produces the same piece sequence
//! - **Testable**: every rule is a synchronous method on [`Game`]
//! - **Portable**: a terminal, a GUI or a test harness can drive it
//!
//! # Module Structure
//!
//! - [`board`]: 20x10 grid with bounds checks and line clearing
//! - [`piece`]: tetromino cell matrices, rotation and translation
//! - [`game`]: active/next/held pieces, movement, hold, lock sequence
//! - [`rng`]: seedable uniform shape selection
//! - [`snapshot`]: read-only state copy for renderers
//! - [`persist`]: the line-oriented text snapshot format
//!
//! # Game Rules
//!
//! - **No wall kicks**: a rotation that would collide is refused
//! - **Two-state pieces**: S, Z and I alternate counter-clockwise and
//!   clockwise turns; O, T, L and J always turn clockwise
//! - **Open ceiling**: rows above the grid are not walls
//! - **Instant lock**: a blocked DOWN move locks immediately
//! - **Hold**: once per spawn, re-enabled when a piece locks
//!
//! # Example
//!
//! ```
//! use tetrion_core::Game;
//! use tetrion_types::Command;
//!
//! let mut game = Game::with_seed(12345);
//!
//! game.apply(Command::MoveRight);
//! game.apply(Command::Rotate);
//! game.apply(Command::HardDrop);
//!
//! assert_eq!(game.board().filled_count(), 4);
//! ```

pub mod board;
pub mod game;
pub mod persist;
pub mod piece;
pub mod rng;
pub mod snapshot;

pub use tetrion_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game::{Game, Phase};
pub use persist::{FormatError, SavedGame};
pub use piece::Piece;
pub use rng::ShapeRng;
pub use snapshot::GameSnapshot;
