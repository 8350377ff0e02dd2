//! Game module - the complete game state
//!
//! Ties the board, the active/next/held pieces and the random source together
//! and implements movement, rotation, hold, locking and line clears.
//!
//! A game is in one of two phases. While **falling**, commands move the
//! active piece. A DOWN move that is blocked runs the lock sequence in one
//! step: consolidate, clear lines, promote the next piece, spawn a new next
//! piece. If the promoted piece already overlaps the stack the game enters
//! **game over**, after which every command is a no-op.

use tracing::{debug, info};

use crate::board::Board;
use crate::persist::{FormatError, SavedGame};
use crate::piece::Piece;
use crate::rng::ShapeRng;
use crate::snapshot::GameSnapshot;
use crate::types::{Command, Direction, MoveOutcome, Shape};

/// Lifecycle phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Falling,
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    active: Piece,
    next: Piece,
    held: Option<Shape>,
    /// Set by a hold, cleared only by consolidation.
    hold_used: bool,
    lines_cleared: u32,
    game_over: bool,
    rng: ShapeRng,
}

impl Game {
    /// Fresh game: empty board and two random pieces.
    pub fn new(mut rng: ShapeRng) -> Self {
        let active = Piece::random(&mut rng);
        let next = Piece::random(&mut rng);
        Self {
            board: Board::new(),
            active,
            next,
            held: None,
            hold_used: false,
            lines_cleared: 0,
            game_over: false,
            rng,
        }
    }

    /// Fresh game with a deterministic piece sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(ShapeRng::new(seed))
    }

    /// Rebuild a game from a saved snapshot.
    ///
    /// Active and next pieces are spawned fresh since the snapshot keeps only
    /// their shapes. A restored game whose active piece already overlaps the
    /// stack starts in game over.
    pub fn restore(saved: SavedGame, rng: ShapeRng) -> Self {
        let mut game = Self {
            board: saved.board,
            active: Piece::spawn(saved.active),
            next: Piece::spawn(saved.next),
            held: None,
            hold_used: false,
            lines_cleared: saved.lines_cleared,
            game_over: false,
            rng,
        };
        if game.has_conflict(&game.active) {
            info!(lines_cleared = game.lines_cleared, "restored game is already over");
            game.game_over = true;
        }
        game
    }

    /// Parse the text snapshot format and restore from it.
    pub fn deserialize(source: &str, rng: ShapeRng) -> Result<Self, FormatError> {
        SavedGame::parse(source).map(|saved| Self::restore(saved, rng))
    }

    /// Render the text snapshot format.
    ///
    /// Held piece, offsets and rotation are not part of the format.
    pub fn serialize(&self) -> String {
        self.to_saved().to_text()
    }

    pub fn to_saved(&self) -> SavedGame {
        SavedGame {
            lines_cleared: self.lines_cleared,
            active: self.active.shape(),
            next: self.next.shape(),
            board: self.board.clone(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn held(&self) -> Option<Shape> {
        self.held
    }

    pub fn can_hold(&self) -> bool {
        !self.hold_used && !self.game_over
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else {
            Phase::Falling
        }
    }

    /// Whether `piece` overlaps a wall, the floor or a filled cell.
    ///
    /// Cells above the grid are never a conflict.
    pub fn has_conflict(&self, piece: &Piece) -> bool {
        piece
            .cells()
            .any(|(row, col)| !self.board.is_open(row, col))
    }

    /// The active piece moved down as far as it can go, without mutating.
    pub fn shadow(&self) -> Piece {
        let mut shadow = self.active;
        loop {
            let mut trial = shadow;
            trial.translate(Direction::Down);
            if self.has_conflict(&trial) {
                return shadow;
            }
            shadow = trial;
        }
    }

    /// Lowest legal row offset for the active piece in its current column
    /// and orientation.
    pub fn shadow_row(&self) -> i8 {
        self.shadow().row()
    }

    /// Translate the active piece one cell.
    ///
    /// A blocked DOWN move locks the piece instead of failing.
    pub fn move_piece(&mut self, direction: Direction) -> MoveOutcome {
        if self.game_over {
            return MoveOutcome::Blocked;
        }

        let mut trial = self.active;
        trial.translate(direction);
        if !self.has_conflict(&trial) {
            self.active = trial;
            return MoveOutcome::Moved;
        }

        match direction {
            Direction::Down => MoveOutcome::Locked {
                lines_cleared: self.lock_piece(),
            },
            Direction::Left | Direction::Right => MoveOutcome::Blocked,
        }
    }

    /// Gravity step. Same as a DOWN move.
    pub fn tick(&mut self) -> MoveOutcome {
        self.move_piece(Direction::Down)
    }

    /// Move the active piece to its shadow row and lock it there.
    pub fn hard_drop(&mut self) -> MoveOutcome {
        if self.game_over {
            return MoveOutcome::Blocked;
        }
        let row = self.shadow_row();
        self.active.set_row(row);
        self.move_piece(Direction::Down)
    }

    /// Rotate the active piece if the rotated position is free.
    ///
    /// There are no wall kicks: a rotation into a wall or the stack is simply
    /// refused.
    pub fn rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }

        let mut trial = self.active;
        trial.rotate();
        if self.has_conflict(&trial) {
            return false;
        }
        self.active = trial;
        true
    }

    /// Swap the active piece with the held one, once per spawn.
    ///
    /// With nothing held the active shape is stored and the next piece is
    /// promoted. Otherwise the two shapes trade places. The installed piece
    /// always starts at its spawn position and orientation, and is not
    /// checked against the stack.
    pub fn hold(&mut self) -> bool {
        if self.game_over || self.hold_used {
            return false;
        }

        let current = self.active.shape();
        match self.held.replace(current) {
            Some(held) => self.active = Piece::spawn(held),
            None => self.promote_next(),
        }
        self.hold_used = true;
        debug!(held = ?current, active = ?self.active.shape(), "hold");
        true
    }

    /// Apply a command from the input layer.
    ///
    /// Returns whether the game state changed. [`Command::Save`] is left to
    /// the owner of persistence and always returns false here.
    pub fn apply(&mut self, command: Command) -> bool {
        if self.game_over {
            return false;
        }

        match command {
            Command::MoveLeft => self.move_piece(Direction::Left) == MoveOutcome::Moved,
            Command::MoveRight => self.move_piece(Direction::Right) == MoveOutcome::Moved,
            Command::SoftDrop => self.move_piece(Direction::Down) != MoveOutcome::Blocked,
            Command::HardDrop => self.hard_drop().is_locked(),
            Command::Rotate => self.rotate(),
            Command::Hold => self.hold(),
            Command::Save => false,
        }
    }

    /// Lock sequence: consolidate, clear lines, spawn.
    ///
    /// Returns the number of lines cleared.
    fn lock_piece(&mut self) -> u32 {
        let shape = self.active.shape();
        self.consolidate();
        let lines = self.clear_lines();
        self.promote_next();

        debug!(?shape, lines, total = self.lines_cleared, "piece locked");

        if self.has_conflict(&self.active) {
            self.game_over = true;
            info!(lines_cleared = self.lines_cleared, "game over");
        }
        lines
    }

    /// Write the active piece into the board and re-enable hold.
    pub(crate) fn consolidate(&mut self) {
        let shape = self.active.shape();
        let written = self.board.fill_cells(self.active.cells(), shape);
        if written < self.active.filled_count() {
            debug!(?shape, written, "cells above the grid discarded");
        }
        self.hold_used = false;
    }

    /// Remove every full row and count it.
    pub fn clear_lines(&mut self) -> u32 {
        let cleared = self.board.clear_full_rows().len() as u32;
        self.lines_cleared = self.lines_cleared.saturating_add(cleared);
        cleared
    }

    fn promote_next(&mut self) {
        self.active = self.next;
        self.next = Piece::random(&mut self.rng);
    }

    /// Copy of everything the presentation layer needs.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::from_piece(self.active);
        self.snapshot_into(&mut s);
        s
    }

    /// Refresh an existing snapshot in place.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid = self.board.to_grid();
        out.active = self.active;
        out.shadow = self.shadow();
        out.next = self.next.shape();
        out.held = self.held;
        out.can_hold = self.can_hold();
        out.lines_cleared = self.lines_cleared;
        out.game_over = self.game_over;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(ShapeRng::default())
    }
}
