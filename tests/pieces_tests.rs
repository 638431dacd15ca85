//! Piece tests: templates, spawn positions and clockwise rotation

use tui_tetromino::core::{spawn_position, Piece, ShapeMatrix};
use tui_tetromino::types::PieceKind;

fn blocks(piece: &Piece) -> Vec<(i8, i8)> {
    piece.blocks().collect()
}

// ============== Template Tests ==============

#[test]
fn test_template_blocks_at_origin() {
    let cases: [(usize, &[(i8, i8)]); 7] = [
        (0, &[(0, 0), (1, 0), (2, 0), (3, 0)]),
        (1, &[(0, 0), (0, 1), (1, 1), (2, 1)]),
        (2, &[(2, 0), (0, 1), (1, 1), (2, 1)]),
        (3, &[(0, 0), (1, 0), (0, 1), (1, 1)]),
        (4, &[(1, 0), (2, 0), (0, 1), (1, 1)]),
        (5, &[(1, 0), (0, 1), (1, 1), (2, 1)]),
        (6, &[(0, 0), (1, 0), (1, 1), (2, 1)]),
    ];
    for (index, expected) in cases {
        let piece = Piece::from_index(index, 0, 0);
        assert_eq!(blocks(&piece), expected, "template {}", index);
    }
}

#[test]
fn test_template_order_and_colors() {
    let kinds: Vec<_> = (0..7).map(|i| Piece::from_index(i, 0, 0).kind()).collect();
    assert_eq!(kinds, PieceKind::ALL.to_vec());

    let piece = Piece::from_index(5, 0, 0);
    assert_eq!(piece.color(), PieceKind::T);
    assert_eq!(PieceKind::T.color(), (128, 0, 128));
}

#[test]
fn test_blocks_follow_position() {
    let piece = Piece::from_index(3, 4, 7);
    assert_eq!(blocks(&piece), vec![(4, 7), (5, 7), (4, 8), (5, 8)]);
}

#[test]
fn test_coordinates_saturate_near_i8_limits() {
    let piece = Piece::from_index(0, 126, 0);
    assert_eq!(blocks(&piece), vec![(126, 0), (127, 0), (127, 0), (127, 0)]);

    let moved = Piece::from_index(3, 0, 0).shifted(i8::MAX, i8::MIN);
    assert_eq!((moved.x, moved.y), (i8::MAX, i8::MIN));
}

#[test]
#[should_panic]
fn test_invalid_index_panics() {
    let _ = Piece::from_index(7, 0, 0);
}

#[test]
fn test_spawn_positions() {
    assert_eq!(spawn_position(PieceKind::I), (3, 0));
    assert_eq!(spawn_position(PieceKind::O), (4, 0));
    for kind in [PieceKind::J, PieceKind::L, PieceKind::S, PieceKind::T, PieceKind::Z] {
        assert_eq!(spawn_position(kind), (4, 0));
    }
    let spawned = Piece::spawn(PieceKind::I);
    assert_eq!((spawned.x, spawned.y), (3, 0));
}

// ============== Rotation Tests ==============

#[test]
fn test_rotation_swaps_dimensions() {
    for kind in PieceKind::ALL {
        let shape = ShapeMatrix::template(kind);
        let rotated = shape.rotate();
        assert_eq!(rotated.rows(), shape.cols());
        assert_eq!(rotated.cols(), shape.rows());
    }
}

#[test]
fn test_four_rotations_return_to_template() {
    for kind in PieceKind::ALL {
        let shape = ShapeMatrix::template(kind);
        let back = shape.rotate().rotate().rotate().rotate();
        assert_eq!(back, shape, "{:?}", kind);
    }
}

#[test]
fn test_i_rotates_to_vertical() {
    let piece = Piece::from_index(0, 0, 0).rotated();
    assert_eq!(blocks(&piece), vec![(0, 0), (0, 1), (0, 2), (0, 3)]);
}

#[test]
fn test_t_rotates_clockwise() {
    // 010      10
    // 111  ->  11
    //          10
    let rotated = Piece::from_index(5, 0, 0).rotated();
    assert_eq!(rotated.shape().rows(), 3);
    assert_eq!(rotated.shape().cols(), 2);
    assert_eq!(blocks(&rotated), vec![(0, 0), (0, 1), (1, 1), (0, 2)]);
}

#[test]
fn test_l_rotates_clockwise() {
    // 001      10
    // 111  ->  10
    //          11
    let rotated = Piece::from_index(2, 0, 0).rotated();
    assert_eq!(blocks(&rotated), vec![(0, 0), (0, 1), (0, 2), (1, 2)]);
}

#[test]
fn test_o_rotation_is_identity() {
    let piece = Piece::from_index(3, 2, 2);
    assert_eq!(piece.rotated(), piece);
}

#[test]
fn test_rotate_is_pure() {
    let piece = Piece::from_index(6, 1, 1);
    let before = piece;
    let _ = piece.rotate();
    assert_eq!(piece, before);
}
