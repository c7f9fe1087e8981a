//! Collision and bounds check gating every piece mutation

use crate::board::Board;
use crate::piece::Piece;

/// Check whether `piece` may occupy its current position on `board`.
///
/// A filled cell at absolute `(x, y)` is rejected when `x` is outside
/// `[0, cols)`, when `y >= rows`, or when it overlaps a filled board cell.
/// Rows above the board (`y < 0`) are accepted and never compared against the
/// board.
pub fn is_valid_move(piece: &Piece, board: &Board) -> bool {
    let cols = board.cols() as i32;
    let rows = board.rows() as i32;

    piece
        .cells()
        .all(|(x, y)| x >= 0 && x < cols && y < rows && !board.is_occupied(x, y))
}
