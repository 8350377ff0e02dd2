//! Board module - manages the game grid
//!
//! The board is a 20x10 grid where each cell is empty or holds the shape of
//! the piece that was consolidated there.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates are `(row, col)`: row 0..19 top to bottom, col 0..9 left to right.

use arrayvec::ArrayVec;

use crate::types::{Cell, Shape, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = BOARD_WIDTH * BOARD_HEIGHT;

/// The game board - 20 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (row, col)
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if Self::is_out_of_bounds(row, col) {
            return None;
        }
        Some((row as usize) * BOARD_WIDTH + (col as usize))
    }

    pub fn width(&self) -> usize {
        BOARD_WIDTH
    }

    pub fn height(&self) -> usize {
        BOARD_HEIGHT
    }

    /// Whether `(row, col)` lies outside the grid on any side, including above it.
    pub fn is_out_of_bounds(row: i8, col: i8) -> bool {
        row < 0 || row >= BOARD_HEIGHT as i8 || col < 0 || col >= BOARD_WIDTH as i8
    }

    /// Get cell at (row, col). Returns None if out of bounds.
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col). Returns false if out of bounds.
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Whether a falling piece may occupy `(row, col)`.
    ///
    /// The sides and the floor are walls. Rows above the grid are open so a
    /// piece can spawn or rotate partially above the visible area.
    pub fn is_open(&self, row: i8, col: i8) -> bool {
        if col < 0 || col >= BOARD_WIDTH as i8 || row >= BOARD_HEIGHT as i8 {
            return false;
        }
        row < 0 || !self.is_occupied(row, col)
    }

    /// Borrow one row of cells.
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * BOARD_WIDTH;
        &self.cells[start..start + BOARD_WIDTH]
    }

    /// Iterate over all rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(BOARD_WIDTH)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= BOARD_HEIGHT {
            return false;
        }
        self.row(row).iter().all(|cell| cell.is_some())
    }

    /// Clear all full rows and return the row indices that were cleared
    /// (pre-clear indices, bottom to top).
    ///
    /// Surviving rows keep their order and settle at the bottom; the freed
    /// rows at the top are emptied. A single pass handles any mix of
    /// adjacent and separated full rows.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, BOARD_HEIGHT> {
        let mut cleared_rows = ArrayVec::new();
        let mut write_row = BOARD_HEIGHT;

        // Scan from bottom to top
        for read_row in (0..BOARD_HEIGHT).rev() {
            if self.is_row_full(read_row) {
                cleared_rows.push(read_row);
            } else {
                // Not full: move it down to the write position
                write_row -= 1;
                if write_row != read_row {
                    let src = read_row * BOARD_WIDTH;
                    let dst = write_row * BOARD_WIDTH;
                    self.cells.copy_within(src..src + BOARD_WIDTH, dst);
                }
            }
        }

        // Clear the remaining rows at the top
        for cell in &mut self.cells[..write_row * BOARD_WIDTH] {
            *cell = None;
        }

        cleared_rows
    }

    /// Write `shape` into every listed cell.
    ///
    /// Cells outside the grid have no slot and are skipped; the number of
    /// cells actually written is returned.
    pub fn fill_cells(&mut self, cells: impl IntoIterator<Item = (i8, i8)>, shape: Shape) -> usize {
        cells
            .into_iter()
            .filter(|&(row, col)| self.set(row, col, Some(shape)))
            .count()
    }

    /// Count of filled cells on the whole board.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells = [None; BOARD_SIZE];
    }

    /// Copy the board into a row-major 2D array.
    pub fn to_grid(&self) -> [[Cell; BOARD_WIDTH]; BOARD_HEIGHT] {
        let mut grid = [[None; BOARD_WIDTH]; BOARD_HEIGHT];
        for (dst, src) in grid.iter_mut().zip(self.rows()) {
            dst.copy_from_slice(src);
        }
        grid
    }

    /// Build a board from a row-major 2D array.
    pub fn from_grid(grid: &[[Cell; BOARD_WIDTH]; BOARD_HEIGHT]) -> Self {
        let mut board = Self::new();
        for (row, cells) in grid.iter().enumerate() {
            let start = row * BOARD_WIDTH;
            board.cells[start..start + BOARD_WIDTH].copy_from_slice(cells);
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(0, 9), Some(9));
        assert_eq!(Board::index(1, 0), Some(10));
        assert_eq!(Board::index(19, 9), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(0, 10), None);
        assert_eq!(Board::index(20, 0), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();

        board.set(0, 0, Some(Shape::I));
        board.set(10, 5, Some(Shape::T));

        assert_eq!(board.get(0, 0), Some(Some(Shape::I)));
        assert_eq!(board.get(10, 5), Some(Some(Shape::T)));

        assert_eq!(board.cells[0], Some(Shape::I));
        assert_eq!(board.cells[10 * 10 + 5], Some(Shape::T));
    }

    #[test]
    fn test_is_open_above_grid() {
        let board = Board::new();
        assert!(board.is_open(-1, 0));
        assert!(board.is_open(-3, 9));
        assert!(!board.is_open(-1, -1));
        assert!(!board.is_open(-1, 10));
        assert!(!board.is_open(20, 4));
    }

    #[test]
    fn test_fill_cells_skips_rows_above_grid() {
        let mut board = Board::new();
        let written = board.fill_cells([(-1, 4), (0, 4), (0, 5), (1, 5)], Shape::S);
        assert_eq!(written, 3);
        assert_eq!(board.filled_count(), 3);
    }

    #[test]
    fn test_grid_roundtrip() {
        let mut grid = [[None; BOARD_WIDTH]; BOARD_HEIGHT];
        grid[5][3] = Some(Shape::O);
        grid[10][7] = Some(Shape::L);

        let board = Board::from_grid(&grid);
        assert_eq!(board.get(5, 3), Some(Some(Shape::O)));
        assert_eq!(board.to_grid(), grid);
    }
}
