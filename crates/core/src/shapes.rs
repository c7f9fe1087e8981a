//! Shapes module - the tetromino catalog and the rotation transform
//!
//! Each catalog entry is a small boolean matrix plus the color its pieces are
//! drawn with. Rotation produces a new matrix and never touches the catalog.

use crate::types::{Color, ShapeKind, SHAPE_COUNT};

/// Largest side of any shape matrix
pub const MAX_SHAPE_SIDE: usize = 4;

/// A boolean shape matrix of at most 4x4 cells.
///
/// Cells outside `height x width` are always false, so derived equality
/// compares only the live area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    height: u8,
    width: u8,
    cells: [[bool; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE],
}

impl ShapeMatrix {
    /// Build a matrix from rows of 0/1 values.
    ///
    /// # Panics
    ///
    /// Panics (at compile time for catalog constants) if a side is 0 or larger than 4.
    pub const fn from_rows<const R: usize, const C: usize>(rows: [[u8; C]; R]) -> Self {
        assert!(R > 0 && R <= MAX_SHAPE_SIDE && C > 0 && C <= MAX_SHAPE_SIDE);

        let mut cells = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        let mut r = 0;
        while r < R {
            let mut c = 0;
            while c < C {
                cells[r][c] = rows[r][c] != 0;
                c += 1;
            }
            r += 1;
        }

        Self {
            height: R as u8,
            width: C as u8,
            cells,
        }
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.height as usize
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.width as usize
    }

    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.height() && col < self.width() && self.cells[row][col]
    }

    /// `(row, col)` of every filled cell, top to bottom, left to right
    pub fn filled(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.height()).flat_map(move |r| {
            (0..self.width())
                .filter(move |&c| self.cells[r][c])
                .map(move |c| (r, c))
        })
    }

    /// Quarter-turn: transpose, then reverse the row order.
    ///
    /// Dimensions swap, so a 2x3 matrix becomes 3x2.
    pub fn rotate(&self) -> Self {
        let old_w = self.width();
        let mut cells = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        for (i, row) in cells.iter_mut().enumerate().take(old_w) {
            for (j, cell) in row.iter_mut().enumerate().take(self.height()) {
                *cell = self.cells[j][old_w - 1 - i];
            }
        }

        Self {
            height: self.width,
            width: self.height,
            cells,
        }
    }

    /// Rows as `#`/`.` strings, handy in assertions and logs
    pub fn to_strings(&self) -> Vec<String> {
        (0..self.height())
            .map(|r| {
                (0..self.width())
                    .map(|c| if self.cells[r][c] { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }
}

/// One catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeDef {
    pub kind: ShapeKind,
    pub color: Color,
    pub matrix: ShapeMatrix,
}

/// The seven tetrominoes; index order matches `ShapeKind::ALL` and `Color::ALL`.
pub const CATALOG: [ShapeDef; SHAPE_COUNT] = [
    ShapeDef {
        kind: ShapeKind::I,
        color: Color::Cyan,
        matrix: ShapeMatrix::from_rows([[1, 1, 1, 1]]),
    },
    ShapeDef {
        kind: ShapeKind::O,
        color: Color::Blue,
        matrix: ShapeMatrix::from_rows([[1, 1], [1, 1]]),
    },
    ShapeDef {
        kind: ShapeKind::T,
        color: Color::Orange,
        matrix: ShapeMatrix::from_rows([[0, 1, 0], [1, 1, 1]]),
    },
    ShapeDef {
        kind: ShapeKind::S,
        color: Color::Yellow,
        matrix: ShapeMatrix::from_rows([[1, 1, 0], [0, 1, 1]]),
    },
    ShapeDef {
        kind: ShapeKind::Z,
        color: Color::Green,
        matrix: ShapeMatrix::from_rows([[0, 1, 1], [1, 1, 0]]),
    },
    ShapeDef {
        kind: ShapeKind::L,
        color: Color::Purple,
        matrix: ShapeMatrix::from_rows([[1, 0, 0], [1, 1, 1]]),
    },
    ShapeDef {
        kind: ShapeKind::J,
        color: Color::Red,
        matrix: ShapeMatrix::from_rows([[0, 0, 1], [1, 1, 1]]),
    },
];

/// Look up the catalog entry for a shape kind
pub fn shape_def(kind: ShapeKind) -> &'static ShapeDef {
    &CATALOG[kind.index()]
}
