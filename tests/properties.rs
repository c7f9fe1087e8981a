//! Property tests for the board, the validity check, and rotation

use falling_blocks::core::{is_valid_move, shape_def, Board, Piece};
use falling_blocks::types::{Cell, Color, ShapeKind};
use proptest::prelude::*;

const ROWS: usize = 8;
const COLS: usize = 6;

fn arb_color() -> impl Strategy<Value = Color> {
    prop::sample::select(Color::ALL.to_vec())
}

fn arb_kind() -> impl Strategy<Value = ShapeKind> {
    prop::sample::select(ShapeKind::ALL.to_vec())
}

/// Random ROWS x COLS board contents, row-major
fn arb_cells() -> impl Strategy<Value = Vec<Cell>> {
    prop::collection::vec(prop::option::weighted(0.4, arb_color()), ROWS * COLS)
}

fn board_from(cells: &[Cell]) -> Board {
    let mut board = Board::new(ROWS, COLS);
    for (i, cell) in cells.iter().enumerate() {
        if let Some(color) = cell {
            board.set(i / COLS, i % COLS, *color).unwrap();
        }
    }
    board
}

proptest! {
    #[test]
    fn prop_row_full_iff_every_cell_filled(cells in arb_cells()) {
        let board = board_from(&cells);
        for row in 0..ROWS {
            let expected = cells[row * COLS..(row + 1) * COLS].iter().all(Option::is_some);
            prop_assert_eq!(board.is_row_full(row), expected);
        }
    }

    #[test]
    fn prop_clear_row_shifts_rows_above(
        cells in arb_cells(),
        target in 0..ROWS,
        fill in arb_color(),
    ) {
        let mut cells = cells;
        for col in 0..COLS {
            cells[target * COLS + col] = Some(fill);
        }
        let mut board = board_from(&cells);
        let before = board.clone();
        let others: usize = (0..ROWS)
            .filter(|&r| r != target)
            .map(|r| before.row(r).iter().filter(|c| c.is_some()).count())
            .sum();

        prop_assert!(board.clear_row(target));

        prop_assert!(board.row(0).iter().all(Option::is_none));
        for row in 1..=target {
            prop_assert_eq!(board.row(row), before.row(row - 1));
        }
        for row in target + 1..ROWS {
            prop_assert_eq!(board.row(row), before.row(row));
        }
        prop_assert_eq!(board.filled_count(), others);
    }

    #[test]
    fn prop_validity_matches_definition(
        cells in arb_cells(),
        kind in arb_kind(),
        turns in 0usize..4,
        x in -4i32..(COLS as i32 + 2),
        y in -4i32..(ROWS as i32 + 2),
    ) {
        let board = board_from(&cells);
        let mut piece = Piece::spawn(kind, COLS);
        for _ in 0..turns {
            piece = piece.rotated();
        }
        piece.x = x;
        piece.y = y;

        let expected = piece.cells().all(|(cx, cy)| {
            if cx < 0 || cx >= COLS as i32 || cy >= ROWS as i32 {
                return false;
            }
            // Rows above the board are never checked for overlap.
            cy < 0 || cells[cy as usize * COLS + cx as usize].is_none()
        });
        prop_assert_eq!(is_valid_move(&piece, &board), expected);
    }

    #[test]
    fn prop_four_rotations_are_identity(kind in arb_kind()) {
        let matrix = shape_def(kind).matrix;
        let back = matrix.rotate().rotate().rotate().rotate();
        prop_assert_eq!(back, matrix);
    }
}

#[test]
fn test_square_is_rotation_symmetric() {
    let o = shape_def(ShapeKind::O).matrix;
    assert_eq!(o.rotate(), o);
    for kind in [ShapeKind::T, ShapeKind::L, ShapeKind::J] {
        let m = shape_def(kind).matrix;
        assert_ne!(m.rotate(), m, "{:?}", kind);
    }
}
