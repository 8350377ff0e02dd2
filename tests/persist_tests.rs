//! Persist tests - the text snapshot format

use tetrion::core::{Board, FormatError, Game, SavedGame, ShapeRng};
use tetrion::types::{Shape, BOARD_HEIGHT, BOARD_WIDTH};

fn blank_row() -> String {
    " ".repeat(BOARD_WIDTH)
}

fn snapshot_text(header: &str, rows: &[String]) -> String {
    let mut text = String::from(header);
    for row in rows {
        text.push_str(row);
        text.push('\n');
    }
    text
}

fn blank_rows(n: usize) -> Vec<String> {
    vec![blank_row(); n]
}

#[test]
fn test_parse_board_contents() {
    let mut rows = blank_rows(BOARD_HEIGHT);
    rows[19] = "IIII  OO L".to_string();
    rows[18] = "        LL".to_string();
    let saved = SavedGame::parse(&snapshot_text("12\nS\nZ\n", &rows)).unwrap();

    assert_eq!(saved.lines_cleared, 12);
    assert_eq!(saved.active, Shape::S);
    assert_eq!(saved.next, Shape::Z);
    assert_eq!(saved.board.filled_count(), 9);
    assert_eq!(saved.board.get(19, 0), Some(Some(Shape::I)));
    assert_eq!(saved.board.get(19, 4), Some(None));
    assert_eq!(saved.board.get(19, 6), Some(Some(Shape::O)));
    assert_eq!(saved.board.get(18, 9), Some(Some(Shape::L)));
}

#[test]
fn test_text_round_trip() {
    let mut board = Board::new();
    board.set(19, 0, Some(Shape::T));
    board.set(19, 1, Some(Shape::T));
    board.set(12, 7, Some(Shape::J));
    let saved = SavedGame {
        lines_cleared: 40,
        active: Shape::O,
        next: Shape::L,
        board,
    };
    assert_eq!(SavedGame::parse(&saved.to_text()), Ok(saved));
}

#[test]
fn test_serialized_game_layout() {
    let game = Game::with_seed(5);
    let text = game.serialize();
    let lines: Vec<&str> = text.lines().collect();

    assert!(text.ends_with('\n'));
    assert_eq!(lines.len(), 3 + BOARD_HEIGHT);
    assert_eq!(lines[0], "0");
    assert_eq!(lines[1], game.active().shape().as_char().to_string());
    assert_eq!(lines[2], game.next().shape().as_char().to_string());
    assert!(lines[3..].iter().all(|row| *row == blank_row()));
}

#[test]
fn test_lowercase_shapes_accepted() {
    let mut rows = blank_rows(BOARD_HEIGHT);
    rows[0] = "t         ".to_string();
    let saved = SavedGame::parse(&snapshot_text("0\nj\nl\n", &rows)).unwrap();
    assert_eq!(saved.active, Shape::J);
    assert_eq!(saved.next, Shape::L);
    assert_eq!(saved.board.get(0, 0), Some(Some(Shape::T)));
}

#[test]
fn test_trailing_blank_line_tolerated() {
    let text = snapshot_text("0\nT\nI\n", &blank_rows(BOARD_HEIGHT)) + "\n";
    assert!(SavedGame::parse(&text).is_ok());
}

#[test]
fn test_bad_line_count() {
    let text = snapshot_text("many\nT\nI\n", &blank_rows(BOARD_HEIGHT));
    assert_eq!(
        SavedGame::parse(&text),
        Err(FormatError::InvalidLineCount("many".to_string()))
    );

    let text = snapshot_text("-3\nT\nI\n", &blank_rows(BOARD_HEIGHT));
    assert!(matches!(
        SavedGame::parse(&text),
        Err(FormatError::InvalidLineCount(_))
    ));
}

#[test]
fn test_unknown_shape_char() {
    let text = snapshot_text("0\nT\nX\n", &blank_rows(BOARD_HEIGHT));
    assert_eq!(
        SavedGame::parse(&text),
        Err(FormatError::InvalidShape {
            field: "next",
            found: "X".to_string(),
        })
    );
}

#[test]
fn test_wrong_row_count() {
    let text = snapshot_text("0\nT\nI\n", &blank_rows(BOARD_HEIGHT - 1));
    assert_eq!(
        SavedGame::parse(&text),
        Err(FormatError::RowCount {
            expected: BOARD_HEIGHT,
            found: BOARD_HEIGHT - 1,
        })
    );

    let text = snapshot_text("0\nT\nI\n", &blank_rows(BOARD_HEIGHT + 1));
    assert!(matches!(
        SavedGame::parse(&text),
        Err(FormatError::RowCount { found: 21, .. })
    ));
}

#[test]
fn test_wrong_row_width() {
    let mut rows = blank_rows(BOARD_HEIGHT);
    rows[5] = "TTT".to_string();
    assert_eq!(
        SavedGame::parse(&snapshot_text("0\nT\nI\n", &rows)),
        Err(FormatError::RowWidth {
            row: 5,
            expected: BOARD_WIDTH,
            found: 3,
        })
    );
}

#[test]
fn test_unknown_grid_char() {
    let mut rows = blank_rows(BOARD_HEIGHT);
    rows[19] = "   #      ".to_string();
    assert_eq!(
        SavedGame::parse(&snapshot_text("0\nT\nI\n", &rows)),
        Err(FormatError::InvalidCell {
            row: 19,
            col: 3,
            found: '#',
        })
    );
}

#[test]
fn test_format_errors_display() {
    let err = FormatError::RowWidth {
        row: 2,
        expected: 10,
        found: 7,
    };
    assert_eq!(err.to_string(), "grid row 2 has 7 cells, expected 10");
}

#[test]
fn test_deserialize_keeps_rng() {
    let text = Game::with_seed(9).serialize();
    let mut a = Game::deserialize(&text, ShapeRng::new(3)).unwrap();
    let mut b = Game::deserialize(&text, ShapeRng::new(3)).unwrap();
    for _ in 0..5 {
        a.hard_drop();
        b.hard_drop();
        assert_eq!(a.next().shape(), b.next().shape());
    }
}
