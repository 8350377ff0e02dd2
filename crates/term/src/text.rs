//! Plain text view for line-mode play.
//!
//! ```text
//!
//! Lines cleared: 0
//! Next piece: T  Stored piece: I
//! | - - - - - - - - - - |
//! |                     |
//! ...
//! | - - - - - - - - - - |
//! ```
//!
//! Every grid cell takes two columns: a separating space, then the shape
//! character (or a space when empty). The active piece is drawn into the
//! grid; the shadow is not shown in this view.

use std::fmt::Write;

use crate::core::GameSnapshot;
use crate::types::{cell_char, BOARD_HEIGHT, BOARD_WIDTH};

/// Horizontal border line, without its newline.
pub fn border_line() -> String {
    let mut line = String::with_capacity(2 * BOARD_WIDTH + 3);
    line.push('|');
    for _ in 0..BOARD_WIDTH {
        line.push_str(" -");
    }
    line.push_str(" |");
    line
}

/// Render the full text view, starting with a blank line.
pub fn text_view(snap: &GameSnapshot) -> String {
    let mut out = String::with_capacity((BOARD_HEIGHT + 6) * (2 * BOARD_WIDTH + 4));

    // Writing into a String cannot fail.
    let _ = writeln!(out, "\nLines cleared: {}", snap.lines_cleared);
    let _ = write!(out, "Next piece: {}", snap.next.as_char());
    if let Some(held) = snap.held {
        let _ = write!(out, "  Stored piece: {}", held.as_char());
    }
    out.push('\n');

    let border = border_line();
    out.push_str(&border);
    out.push('\n');
    for row in snap.composed_grid() {
        out.push('|');
        for cell in row {
            out.push(' ');
            out.push(cell_char(cell));
        }
        out.push_str(" |\n");
    }
    out.push_str(&border);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Game, Piece};
    use crate::types::Shape;

    #[test]
    fn test_header_and_border() {
        let snap = GameSnapshot::from_piece(Piece::spawn(Shape::T));
        let text = text_view(&snap);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "Lines cleared: 0");
        assert_eq!(lines[2], "Next piece: T");
        assert_eq!(lines[3], "| - - - - - - - - - - |");
        assert_eq!(lines.len(), 4 + BOARD_HEIGHT + 1);
        assert_eq!(lines[lines.len() - 1], lines[3]);
    }

    #[test]
    fn test_stored_piece_is_shown() {
        let mut snap = Game::with_seed(3).snapshot();
        snap.held = Some(Shape::I);
        let text = text_view(&snap);
        assert!(text.contains("  Stored piece: I\n"));
    }

    #[test]
    fn test_active_piece_overlaid() {
        // T at spawn: its flat side sits on grid row 0 since row -1 is empty
        let snap = GameSnapshot::from_piece(Piece::spawn(Shape::T));
        let text = text_view(&snap);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[4], "|       T T T         |");
        assert_eq!(lines[5], "|         T           |");
    }
}
