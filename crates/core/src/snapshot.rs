//! Read-only copies of the game state for renderers and observers.

use crate::shapes::{shape_def, ShapeMatrix};
use crate::types::{Cell, Color, ShapeKind};
use crate::Piece;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: ShapeKind,
    pub matrix: ShapeMatrix,
    pub color: Color,
    pub x: i32,
    pub y: i32,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            matrix: value.matrix,
            color: value.color,
            x: value.x,
            y: value.y,
        }
    }
}

impl Default for ActiveSnapshot {
    fn default() -> Self {
        let def = shape_def(ShapeKind::I);
        Self {
            kind: def.kind,
            matrix: def.matrix,
            color: def.color,
            x: 0,
            y: 0,
        }
    }
}

impl ActiveSnapshot {
    /// Whether the active piece covers absolute `(row, col)`
    pub fn covers(&self, row: usize, col: usize) -> bool {
        let r = row as i32 - self.y;
        let c = col as i32 - self.x;
        r >= 0 && c >= 0 && self.matrix.is_filled(r as usize, c as usize)
    }
}

/// One consistent frame of game state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Row-major board cells, without the active piece
    pub board: Vec<Cell>,
    pub active: ActiveSnapshot,
    pub score: u32,
    pub lines: u32,
    pub pieces_placed: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Settled cell at `(row, col)`; `None` outside the board
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.board[row * self.cols + col]
    }

    /// Cell at `(row, col)` with the active piece drawn over the board
    pub fn cell_with_active(&self, row: usize, col: usize) -> Cell {
        if row < self.rows && col < self.cols && self.active.covers(row, col) {
            return Some(self.active.color);
        }
        self.cell(row, col)
    }
}
