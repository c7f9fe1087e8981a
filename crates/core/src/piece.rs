//! The active falling piece

use crate::shapes::{shape_def, ShapeMatrix};
use crate::types::{Color, ShapeKind};

/// Active falling piece
///
/// The matrix is owned by value: once rotated it no longer equals the catalog
/// entry, and the color travels with the piece instead of being looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    pub matrix: ShapeMatrix,
    pub color: Color,
    /// Column of the matrix's top-left cell
    pub x: i32,
    /// Row of the matrix's top-left cell
    pub y: i32,
}

impl Piece {
    /// Create a piece of `kind` centered horizontally on a board `cols` wide,
    /// at the top row.
    pub fn spawn(kind: ShapeKind, cols: usize) -> Self {
        let def = shape_def(kind);
        let x = (cols / 2) as i32 - (def.matrix.width() / 2) as i32;
        Self {
            kind,
            matrix: def.matrix,
            color: def.color,
            x,
            y: 0,
        }
    }

    /// Absolute `(x, y)` of every filled cell
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.matrix
            .filled()
            .map(move |(r, c)| (self.x + c as i32, self.y + r as i32))
    }

    /// Same piece shifted by `(dx, dy)`
    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same piece with its matrix rotated, at the same anchor
    pub fn rotated(&self) -> Self {
        Self {
            matrix: self.matrix.rotate(),
            ..*self
        }
    }
}
