//! Piece module - tetromino cell matrices and rotation
//!
//! A piece is a square boolean matrix (2x2 for O, 4x4 for I, 3x3 otherwise)
//! positioned on the board by the row/column of its top-left corner.
//! Rotation rewrites the matrix in place; translation only moves the offsets.
//! Neither checks the board: that is [`crate::Game`]'s job.

use crate::rng::ShapeRng;
use crate::types::{Direction, Shape};

/// Largest matrix side (the I piece).
pub const MAX_SIDE: usize = 4;

/// Square cell matrix, stored in a fixed 4x4 array.
pub type CellMatrix = [[bool; MAX_SIDE]; MAX_SIDE];

/// Spawn position `(row, col)` for the O piece.
pub const O_SPAWN: (i8, i8) = (0, 4);

/// Spawn position `(row, col)` for every other piece. The row is above the
/// grid because their top matrix row is empty.
pub const SPAWN: (i8, i8) = (-1, 3);

const fn matrix(rows: [[u8; MAX_SIDE]; MAX_SIDE]) -> CellMatrix {
    let mut out = [[false; MAX_SIDE]; MAX_SIDE];
    let mut r = 0;
    while r < MAX_SIDE {
        let mut c = 0;
        while c < MAX_SIDE {
            out[r][c] = rows[r][c] == 1;
            c += 1;
        }
        r += 1;
    }
    out
}

const O_CELLS: CellMatrix = matrix([[1, 1, 0, 0], [1, 1, 0, 0], [0; 4], [0; 4]]);
const I_CELLS: CellMatrix = matrix([[0; 4], [1, 1, 1, 1], [0; 4], [0; 4]]);
const S_CELLS: CellMatrix = matrix([[0; 4], [0, 1, 1, 0], [1, 1, 0, 0], [0; 4]]);
const Z_CELLS: CellMatrix = matrix([[0; 4], [1, 1, 0, 0], [0, 1, 1, 0], [0; 4]]);
const J_CELLS: CellMatrix = matrix([[0; 4], [1, 1, 1, 0], [0, 0, 1, 0], [0; 4]]);
const L_CELLS: CellMatrix = matrix([[0; 4], [1, 1, 1, 0], [1, 0, 0, 0], [0; 4]]);
const T_CELLS: CellMatrix = matrix([[0; 4], [1, 1, 1, 0], [0, 1, 0, 0], [0; 4]]);

/// Canonical spawn matrix and its side length.
pub fn spawn_cells(shape: Shape) -> (CellMatrix, usize) {
    match shape {
        Shape::O => (O_CELLS, 2),
        Shape::I => (I_CELLS, 4),
        Shape::S => (S_CELLS, 3),
        Shape::Z => (Z_CELLS, 3),
        Shape::J => (J_CELLS, 3),
        Shape::L => (L_CELLS, 3),
        Shape::T => (T_CELLS, 3),
    }
}

/// A tetromino with its current orientation and board position.
///
/// `Piece` is `Copy`: trial moves work on a copy and are committed by
/// assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    shape: Shape,
    cells: CellMatrix,
    side: usize,
    row: i8,
    col: i8,
    /// Next two-state rotation is clockwise. Only S, Z and I read it.
    clockwise_next: bool,
}

impl Piece {
    /// Create a piece of `shape` in its spawn orientation and position.
    pub fn spawn(shape: Shape) -> Self {
        let (cells, side) = spawn_cells(shape);
        let (row, col) = match shape {
            Shape::O => O_SPAWN,
            _ => SPAWN,
        };
        Self {
            shape,
            cells,
            side,
            row,
            col,
            clockwise_next: false,
        }
    }

    /// Spawn a piece of a shape drawn from `rng`.
    pub fn random(rng: &mut ShapeRng) -> Self {
        Self::spawn(rng.next_shape())
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Side length of the cell matrix.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Row offset of the matrix's top-left corner.
    pub fn row(&self) -> i8 {
        self.row
    }

    /// Column offset of the matrix's top-left corner.
    pub fn col(&self) -> i8 {
        self.col
    }

    pub fn clockwise_next(&self) -> bool {
        self.clockwise_next
    }

    /// Whether local cell `(r, c)` is occupied. Out-of-matrix cells are empty.
    pub fn is_filled(&self, r: usize, c: usize) -> bool {
        r < self.side && c < self.side && self.cells[r][c]
    }

    /// Rows of the matrix, `side` cells each.
    pub fn matrix(&self) -> impl Iterator<Item = &[bool]> + '_ {
        let side = self.side;
        self.cells[..side].iter().map(move |row| &row[..side])
    }

    /// Absolute `(row, col)` of every occupied cell, top to bottom.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let side = self.side;
        (0..side).flat_map(move |r| {
            (0..side)
                .filter(move |&c| self.cells[r][c])
                .map(move |c| (self.row + r as i8, self.col + c as i8))
        })
    }

    /// Number of occupied cells. Always 4.
    pub fn filled_count(&self) -> usize {
        self.cells().count()
    }

    /// Move one cell. No bounds checking.
    pub fn translate(&mut self, direction: Direction) {
        let (dr, dc) = direction.delta();
        self.row += dr;
        self.col += dc;
    }

    /// Place the matrix's top-left corner at `row`.
    pub fn set_row(&mut self, row: i8) {
        self.row = row;
    }

    /// Rotate according to the shape's rule.
    ///
    /// O, T, L and J always turn clockwise. S, Z and I alternate, starting
    /// counter-clockwise, so two calls always restore the spawn matrix.
    pub fn rotate(&mut self) {
        if !self.shape.is_two_state() {
            self.rotate_clockwise();
        } else if self.clockwise_next {
            self.rotate_clockwise();
            self.clockwise_next = false;
        } else {
            self.rotate_counter_clockwise();
            self.clockwise_next = true;
        }
    }

    /// Transpose, then mirror columns.
    pub fn rotate_clockwise(&mut self) {
        let n = self.side;
        let mut rotated = [[false; MAX_SIDE]; MAX_SIDE];
        for (r, row) in rotated.iter_mut().enumerate().take(n) {
            for (c, cell) in row.iter_mut().enumerate().take(n) {
                *cell = self.cells[n - 1 - c][r];
            }
        }
        self.cells = rotated;
    }

    /// Transpose, then mirror rows.
    pub fn rotate_counter_clockwise(&mut self) {
        let n = self.side;
        let mut rotated = [[false; MAX_SIDE]; MAX_SIDE];
        for (r, row) in rotated.iter_mut().enumerate().take(n) {
            for (c, cell) in row.iter_mut().enumerate().take(n) {
                *cell = self.cells[c][n - 1 - r];
            }
        }
        self.cells = rotated;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_positions() {
        let o = Piece::spawn(Shape::O);
        assert_eq!((o.row(), o.col()), (0, 4));
        assert_eq!(o.side(), 2);

        let i = Piece::spawn(Shape::I);
        assert_eq!((i.row(), i.col()), (-1, 3));
        assert_eq!(i.side(), 4);

        let t = Piece::spawn(Shape::T);
        assert_eq!((t.row(), t.col()), (-1, 3));
        assert_eq!(t.side(), 3);
    }

    #[test]
    fn test_spawned_cells_are_inside_grid() {
        for shape in Shape::ALL {
            let piece = Piece::spawn(shape);
            assert!(
                piece.cells().all(|(r, _)| r >= 0),
                "{:?} spawns with a cell above the grid",
                shape
            );
        }
    }

    #[test]
    fn test_t_cells() {
        let t = Piece::spawn(Shape::T);
        let cells: Vec<_> = t.cells().collect();
        assert_eq!(cells, vec![(0, 3), (0, 4), (0, 5), (1, 4)]);
    }

    #[test]
    fn test_clockwise_t() {
        let mut t = Piece::spawn(Shape::T);
        t.rotate_clockwise();
        // 0 1 0
        // 1 1 0
        // 0 1 0
        let rows: Vec<Vec<bool>> = t.matrix().map(|r| r.to_vec()).collect();
        assert_eq!(
            rows,
            vec![
                vec![false, true, false],
                vec![true, true, false],
                vec![false, true, false],
            ]
        );
    }

    #[test]
    fn test_counter_clockwise_undoes_clockwise() {
        for shape in Shape::ALL {
            let spawned = Piece::spawn(shape);
            let mut piece = spawned;
            piece.rotate_clockwise();
            piece.rotate_counter_clockwise();
            assert_eq!(piece, spawned);
        }
    }

    #[test]
    fn test_translate() {
        let mut piece = Piece::spawn(Shape::L);
        piece.translate(Direction::Down);
        piece.translate(Direction::Left);
        assert_eq!((piece.row(), piece.col()), (0, 2));
        piece.translate(Direction::Right);
        piece.translate(Direction::Right);
        assert_eq!((piece.row(), piece.col()), (0, 4));
    }

    #[test]
    fn test_copy_is_independent() {
        let original = Piece::spawn(Shape::S);
        let mut trial = original;
        trial.rotate();
        trial.translate(Direction::Down);
        assert_ne!(trial, original);
        assert_eq!(original, Piece::spawn(Shape::S));
        assert!(trial.clockwise_next());
        assert!(!original.clockwise_next());
    }
}
