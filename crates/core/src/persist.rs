//! Persist module - the text snapshot format
//!
//! ```text
//! <lines cleared>
//! <active shape char>
//! <next shape char>
//! <20 rows of exactly 10 chars, ' ' = empty>
//! ```
//!
//! Only shapes are stored for the active and next pieces; their position,
//! rotation and the held piece are lost. There is no version header.

use thiserror::Error;

use crate::board::Board;
use crate::types::{cell_char, Shape, BOARD_HEIGHT, BOARD_WIDTH, EMPTY_CHAR};

/// Malformed snapshot text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Input ended before a header line
    #[error("snapshot is missing the {0} line")]
    MissingHeader(&'static str),

    /// Line count is not a non-negative integer
    #[error("invalid line count: {0:?}")]
    InvalidLineCount(String),

    /// Header line is not a single shape character
    #[error("invalid {field} shape: {found:?}")]
    InvalidShape {
        /// Which header line
        field: &'static str,
        /// Offending text
        found: String,
    },

    /// Wrong number of grid rows
    #[error("expected {expected} grid rows, found {found}")]
    RowCount { expected: usize, found: usize },

    /// Grid row of the wrong width
    #[error("grid row {row} has {found} cells, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Grid character that is neither a space nor a shape
    #[error("invalid cell {found:?} at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, found: char },
}

/// Everything the text format stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedGame {
    pub lines_cleared: u32,
    pub active: Shape,
    pub next: Shape,
    pub board: Board,
}

impl SavedGame {
    /// Render the snapshot, one `\n`-terminated line per field and row.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(16 + BOARD_HEIGHT * (BOARD_WIDTH + 1));
        out.push_str(&self.lines_cleared.to_string());
        out.push('\n');
        out.push(self.active.as_char());
        out.push('\n');
        out.push(self.next.as_char());
        out.push('\n');
        for row in self.board.rows() {
            out.extend(row.iter().map(|&cell| cell_char(cell)));
            out.push('\n');
        }
        out
    }

    /// Parse snapshot text. `\r\n` line endings are accepted.
    pub fn parse(source: &str) -> Result<Self, FormatError> {
        let mut lines = source.lines();

        let count = lines.next().ok_or(FormatError::MissingHeader("line count"))?;
        let lines_cleared = count
            .trim()
            .parse::<u32>()
            .map_err(|_| FormatError::InvalidLineCount(count.to_string()))?;

        let active = parse_shape(lines.next(), "active")?;
        let next = parse_shape(lines.next(), "next")?;

        let mut rows: Vec<&str> = lines.collect();
        // Trailing blank lines after the grid are tolerated
        while rows.len() > BOARD_HEIGHT && rows.last().is_some_and(|l| l.is_empty()) {
            rows.pop();
        }
        if rows.len() != BOARD_HEIGHT {
            return Err(FormatError::RowCount {
                expected: BOARD_HEIGHT,
                found: rows.len(),
            });
        }

        let mut board = Board::new();
        for (row, line) in rows.iter().enumerate() {
            let width = line.chars().count();
            if width != BOARD_WIDTH {
                return Err(FormatError::RowWidth {
                    row,
                    expected: BOARD_WIDTH,
                    found: width,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let cell = match ch {
                    EMPTY_CHAR => None,
                    other => Some(Shape::from_char(other).ok_or(FormatError::InvalidCell {
                        row,
                        col,
                        found: other,
                    })?),
                };
                board.set(row as i8, col as i8, cell);
            }
        }

        Ok(Self {
            lines_cleared,
            active,
            next,
            board,
        })
    }
}

fn parse_shape(line: Option<&str>, field: &'static str) -> Result<Shape, FormatError> {
    let line = line.ok_or(FormatError::MissingHeader(field))?;
    let trimmed = line.trim();
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Shape::from_char(c),
        _ => None,
    }
    .ok_or_else(|| FormatError::InvalidShape {
        field,
        found: line.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_rows() -> String {
        format!("{}\n", " ".repeat(BOARD_WIDTH)).repeat(BOARD_HEIGHT)
    }

    #[test]
    fn test_parse_empty_board() {
        let text = format!("7\nT\nI\n{}", blank_rows());
        let saved = SavedGame::parse(&text).unwrap();
        assert_eq!(saved.lines_cleared, 7);
        assert_eq!(saved.active, Shape::T);
        assert_eq!(saved.next, Shape::I);
        assert_eq!(saved.board, Board::new());
    }

    #[test]
    fn test_to_text_layout() {
        let mut board = Board::new();
        board.set(19, 0, Some(Shape::L));
        let saved = SavedGame {
            lines_cleared: 3,
            active: Shape::S,
            next: Shape::Z,
            board,
        };
        let text = saved.to_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3 + BOARD_HEIGHT);
        assert_eq!(lines[0], "3");
        assert_eq!(lines[1], "S");
        assert_eq!(lines[2], "Z");
        assert_eq!(lines[22], "L         ");
    }

    #[test]
    fn test_crlf_accepted() {
        let text = format!("0\r\nO\r\nJ\r\n{}", blank_rows().replace('\n', "\r\n"));
        assert!(SavedGame::parse(&text).is_ok());
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(
            SavedGame::parse("5\nT\n"),
            Err(FormatError::MissingHeader("next"))
        );
        assert_eq!(
            SavedGame::parse(""),
            Err(FormatError::MissingHeader("line count"))
        );
    }

    #[test]
    fn test_multi_char_shape_line_rejected() {
        let text = format!("0\nTT\nI\n{}", blank_rows());
        assert!(matches!(
            SavedGame::parse(&text),
            Err(FormatError::InvalidShape { field: "active", .. })
        ));
    }
}
