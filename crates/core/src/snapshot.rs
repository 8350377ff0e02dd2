use crate::piece::Piece;
use crate::types::{Cell, Shape, BOARD_HEIGHT, BOARD_WIDTH};

/// Read-only copy of the game state for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub grid: [[Cell; BOARD_WIDTH]; BOARD_HEIGHT],
    pub active: Piece,
    /// Active piece at its lowest legal row.
    pub shadow: Piece,
    pub next: Shape,
    pub held: Option<Shape>,
    pub can_hold: bool,
    pub lines_cleared: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Empty-board snapshot around a single piece.
    pub fn from_piece(active: Piece) -> Self {
        Self {
            grid: [[None; BOARD_WIDTH]; BOARD_HEIGHT],
            active,
            shadow: active,
            next: active.shape(),
            held: None,
            can_hold: true,
            lines_cleared: 0,
            game_over: false,
        }
    }

    pub fn shadow_row(&self) -> i8 {
        self.shadow.row()
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }

    /// Grid with the active piece drawn in. Cells above the grid are dropped.
    pub fn composed_grid(&self) -> [[Cell; BOARD_WIDTH]; BOARD_HEIGHT] {
        let mut grid = self.grid;
        for (row, col) in self.active.cells() {
            if (0..BOARD_HEIGHT as i8).contains(&row) && (0..BOARD_WIDTH as i8).contains(&col) {
                grid[row as usize][col as usize] = Some(self.active.shape());
            }
        }
        grid
    }
}
