//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! by the engine, the input mapping, the terminal view and the runtime alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//!
//! Rows above the grid (negative indices) are a legal transient position for a
//! falling piece; only the sides and the floor are walls.
//!
//! # Examples
//!
//! ```
//! use tetrion_types::{Command, Direction, Shape, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! // Shapes round-trip through their snapshot character
//! let shape = Shape::from_char('T').unwrap();
//! assert_eq!(shape.as_char(), 'T');
//!
//! // Commands have stable names
//! assert_eq!(Command::from_str("hardDrop"), Some(Command::HardDrop));
//!
//! // Directions translate into (row, col) deltas
//! assert_eq!(Direction::Left.delta(), (0, -1));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: usize = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: usize = 20;

/// Default gravity interval: one automatic DOWN step every 500ms.
pub const GRAVITY_MS: u64 = 500;

/// Character used for an empty cell in the text snapshot.
pub const EMPTY_CHAR: char = ' ';

/// The seven tetromino shapes
///
/// The discriminant order matches the order shapes are drawn by the random
/// source, so a seeded game always produces the same sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    O,
    I,
    S,
    Z,
    J,
    L,
    T,
}

impl Shape {
    /// All shapes, in draw order.
    pub const ALL: [Shape; 7] = [
        Shape::O,
        Shape::I,
        Shape::S,
        Shape::Z,
        Shape::J,
        Shape::L,
        Shape::T,
    ];

    /// Parse a shape from its snapshot character (case-insensitive).
    ///
    /// ```
    /// use tetrion_types::Shape;
    ///
    /// assert_eq!(Shape::from_char('i'), Some(Shape::I));
    /// assert_eq!(Shape::from_char('O'), Some(Shape::O));
    /// assert_eq!(Shape::from_char('x'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'O' => Some(Shape::O),
            'I' => Some(Shape::I),
            'S' => Some(Shape::S),
            'Z' => Some(Shape::Z),
            'J' => Some(Shape::J),
            'L' => Some(Shape::L),
            'T' => Some(Shape::T),
            _ => None,
        }
    }

    /// Uppercase character used in snapshots and the text view.
    pub fn as_char(&self) -> char {
        match self {
            Shape::O => 'O',
            Shape::I => 'I',
            Shape::S => 'S',
            Shape::Z => 'Z',
            Shape::J => 'J',
            Shape::L => 'L',
            Shape::T => 'T',
        }
    }

    /// Whether the shape only has two distinct orientations.
    ///
    /// S, Z and I alternate counter-clockwise and clockwise turns so they
    /// flip between two states instead of walking through four.
    pub fn is_two_state(&self) -> bool {
        matches!(self, Shape::S | Shape::Z | Shape::I)
    }
}

/// Translation directions for a piece. There is no UP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Down,
    Left,
    Right,
}

impl Direction {
    /// `(row, col)` delta applied by a one-cell translation.
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Commands accepted from the input layer
///
/// Every command except [`Command::Save`] mutates game state; `Save` is
/// handled by whoever owns persistence. All commands are no-ops once the game
/// is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// One DOWN step (locks the piece when blocked)
    SoftDrop,
    /// Drop to the lowest legal row and lock
    HardDrop,
    /// Rotate (direction depends on the shape)
    Rotate,
    /// Hold the active piece, once per spawn
    Hold,
    /// Write a snapshot of the game
    Save,
}

impl Command {
    /// Parse a command from its name (case-insensitive, `_` ignored)
    ///
    /// ```
    /// use tetrion_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("SOFT_DROP"), Some(Command::SoftDrop));
    /// assert_eq!(Command::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('_', "").as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "softdrop" => Some(Command::SoftDrop),
            "harddrop" => Some(Command::HardDrop),
            "rotate" => Some(Command::Rotate),
            "hold" => Some(Command::Hold),
            "save" => Some(Command::Save),
            _ => None,
        }
    }

    /// camelCase name, the inverse of [`Command::from_str`]
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::HardDrop => "hardDrop",
            Command::Rotate => "rotate",
            Command::Hold => "hold",
            Command::Save => "save",
        }
    }
}

/// Result of a translation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The piece moved one cell.
    Moved,
    /// The move was refused; nothing changed.
    Blocked,
    /// A DOWN move was refused, so the piece was consolidated and the next
    /// piece spawned.
    Locked {
        /// Rows removed by this lock.
        lines_cleared: u32,
    },
}

impl MoveOutcome {
    pub fn is_locked(&self) -> bool {
        matches!(self, MoveOutcome::Locked { .. })
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Shape)`: Cell filled by a consolidated piece of that shape
pub type Cell = Option<Shape>;

/// Snapshot character for a cell.
pub fn cell_char(cell: Cell) -> char {
    cell.map_or(EMPTY_CHAR, |shape| shape.as_char())
}
