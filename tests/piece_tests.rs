//! Piece tests - matrices, rotation rules and translation

use tetrion::core::Piece;
use tetrion::types::{Direction, Shape};

fn cells(piece: &Piece) -> Vec<(i8, i8)> {
    piece.cells().collect()
}

#[test]
fn test_every_shape_has_four_cells_after_rotations() {
    for shape in Shape::ALL {
        let mut piece = Piece::spawn(shape);
        for turn in 0..8 {
            assert_eq!(piece.filled_count(), 4, "{shape:?} after {turn} turns");
            piece.rotate();
        }
    }
}

#[test]
fn test_o_rotation_never_changes_cells() {
    let mut o = Piece::spawn(Shape::O);
    let before = cells(&o);
    for _ in 0..5 {
        o.rotate();
        assert_eq!(cells(&o), before);
    }
}

#[test]
fn test_two_state_pieces_restore_after_two_and_four_turns() {
    for shape in [Shape::I, Shape::S, Shape::Z] {
        let mut piece = Piece::spawn(shape);
        let spawn = cells(&piece);

        piece.rotate();
        assert_ne!(cells(&piece), spawn, "{shape:?} first turn");
        piece.rotate();
        assert_eq!(cells(&piece), spawn, "{shape:?} two turns");
        piece.rotate();
        piece.rotate();
        assert_eq!(cells(&piece), spawn, "{shape:?} four turns");
    }
}

#[test]
fn test_two_state_parity_flips_on_every_call() {
    let mut s = Piece::spawn(Shape::S);
    assert!(!s.clockwise_next());
    for expected in [true, false, true, false] {
        s.rotate();
        assert_eq!(s.clockwise_next(), expected);
    }
}

#[test]
fn test_first_two_state_turn_is_counter_clockwise() {
    let mut ccw = Piece::spawn(Shape::I);
    ccw.rotate_counter_clockwise();

    let mut i = Piece::spawn(Shape::I);
    i.rotate();
    assert_eq!(cells(&i), cells(&ccw));

    // Vertical I sits in matrix column 1
    assert_eq!(cells(&i), vec![(-1, 4), (0, 4), (1, 4), (2, 4)]);
}

#[test]
fn test_four_state_pieces_turn_clockwise() {
    for shape in [Shape::T, Shape::J, Shape::L] {
        let mut piece = Piece::spawn(shape);
        let mut cw = piece;
        cw.rotate_clockwise();

        piece.rotate();
        assert_eq!(cells(&piece), cells(&cw), "{shape:?}");
        assert!(!piece.clockwise_next(), "{shape:?} has no parity");

        piece.rotate();
        piece.rotate();
        piece.rotate();
        assert_eq!(cells(&piece), cells(&Piece::spawn(shape)), "{shape:?}");
    }
}

#[test]
fn test_t_clockwise_points_left() {
    let mut t = Piece::spawn(Shape::T);
    t.rotate();
    let rows: Vec<Vec<bool>> = t.matrix().map(|row| row.to_vec()).collect();
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
fn test_matrix_sides() {
    assert_eq!(Piece::spawn(Shape::O).side(), 2);
    assert_eq!(Piece::spawn(Shape::I).side(), 4);
    for shape in [Shape::S, Shape::Z, Shape::J, Shape::L, Shape::T] {
        assert_eq!(Piece::spawn(shape).side(), 3);
    }
}

#[test]
fn test_translate_moves_every_cell() {
    let mut l = Piece::spawn(Shape::L);
    let before = cells(&l);

    l.translate(Direction::Down);
    l.translate(Direction::Right);
    l.translate(Direction::Right);

    let expected: Vec<(i8, i8)> = before.iter().map(|&(r, c)| (r + 1, c + 2)).collect();
    assert_eq!(cells(&l), expected);
}

#[test]
fn test_copy_keeps_parity_and_is_independent() {
    let mut z = Piece::spawn(Shape::Z);
    z.rotate();

    let mut copy = z;
    assert_eq!(copy.clockwise_next(), z.clockwise_next());

    copy.rotate();
    copy.translate(Direction::Left);
    assert_ne!(copy, z);
    assert!(z.clockwise_next());
}
