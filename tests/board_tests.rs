//! Board tests

use falling_blocks::core::{Board, BoardError};
use falling_blocks::types::{Color, BOARD_COLS, BOARD_ROWS};

fn fill_row(board: &mut Board, row: usize, color: Color) {
    for col in 0..board.cols() {
        board.set(row, col, color).unwrap();
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new(BOARD_ROWS, BOARD_COLS);
    assert_eq!(board.rows(), 20);
    assert_eq!(board.cols(), 10);
    assert_eq!(board.filled_count(), 0);

    for row in 0..BOARD_ROWS {
        for col in 0..BOARD_COLS {
            assert_eq!(board.get(row, col), Ok(None));
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new(BOARD_ROWS, BOARD_COLS);
    assert_eq!(
        board.get(BOARD_ROWS, 0),
        Err(BoardError::OutOfBounds { row: 20, col: 0 })
    );
    assert_eq!(
        board.get(0, BOARD_COLS),
        Err(BoardError::OutOfBounds { row: 0, col: 10 })
    );
}

#[test]
fn test_board_set_twice_is_rejected() {
    let mut board = Board::new(BOARD_ROWS, BOARD_COLS);
    board.set(5, 5, Color::Green).unwrap();
    let err = board.set(5, 5, Color::Red).unwrap_err();
    assert_eq!(err, BoardError::Occupied { row: 5, col: 5 });
    assert_eq!(err.code(), "occupied");
    assert_eq!(board.get(5, 5), Ok(Some(Color::Green)));
}

#[test]
fn test_is_occupied_outside_is_false() {
    let mut board = Board::new(4, 4);
    fill_row(&mut board, 0, Color::Cyan);
    assert!(board.is_occupied(0, 0));
    assert!(!board.is_occupied(-1, 0));
    assert!(!board.is_occupied(0, -1));
    assert!(!board.is_occupied(4, 0));
    assert!(!board.is_occupied(0, 4));
}

#[test]
fn test_clear_bottom_row() {
    let mut board = Board::new(BOARD_ROWS, BOARD_COLS);
    fill_row(&mut board, 19, Color::Cyan);
    board.set(18, 0, Color::Red).unwrap();

    assert_eq!(board.clear_full_rows(), 1);
    assert_eq!(board.get(19, 0), Ok(Some(Color::Red)));
    assert_eq!(board.filled_count(), 1);
    assert!(board.row(0).iter().all(Option::is_none));
}

#[test]
fn test_clear_four_rows() {
    let mut board = Board::new(BOARD_ROWS, BOARD_COLS);
    for row in 16..20 {
        fill_row(&mut board, row, Color::Cyan);
    }
    board.set(15, 9, Color::Purple).unwrap();

    assert_eq!(board.clear_full_rows(), 4);
    assert_eq!(board.filled_count(), 1);
    assert_eq!(board.get(19, 9), Ok(Some(Color::Purple)));
}

#[test]
fn test_clear_adjacent_rows_rechecks_same_index() {
    // Two full rows stacked: after the lower one is cleared the upper one
    // drops into its index and must be cleared as well.
    let mut board = Board::new(6, 4);
    fill_row(&mut board, 4, Color::Blue);
    fill_row(&mut board, 5, Color::Blue);
    board.set(3, 1, Color::Yellow).unwrap();

    assert_eq!(board.clear_full_rows(), 2);
    assert_eq!(board.get(5, 1), Ok(Some(Color::Yellow)));
    assert_eq!(board.filled_count(), 1);
}

#[test]
fn test_no_full_rows() {
    let mut board = Board::new(BOARD_ROWS, BOARD_COLS);
    for col in 0..BOARD_COLS - 1 {
        board.set(19, col, Color::Orange).unwrap();
    }
    assert!(!board.is_row_full(19));
    assert_eq!(board.clear_full_rows(), 0);
    assert_eq!(board.filled_count(), BOARD_COLS - 1);
}
