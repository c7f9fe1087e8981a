//! Board module - the grid of settled cells
//!
//! The board is a fixed `rows x cols` grid where each cell is empty or holds a
//! color. Cells are stored in one flat row-major vector.
//! Coordinates: `row` grows downward from 0 (top), `col` grows rightward from 0.
//! Piece coordinates use `(x, y)` = `(col, row)` as signed values so that
//! tentative positions left of or above the grid can be expressed.

use std::fmt;

use crate::types::{Cell, Color};

/// Errors from direct cell access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// `(row, col)` lies outside the grid
    OutOfBounds { row: usize, col: usize },
    /// Tried to fill a cell that is already filled
    Occupied { row: usize, col: usize },
}

impl BoardError {
    pub fn code(self) -> &'static str {
        match self {
            BoardError::OutOfBounds { .. } => "out_of_bounds",
            BoardError::Occupied { .. } => "occupied",
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "cell ({}, {}) is outside the board", row, col)
            }
            BoardError::Occupied { row, col } => {
                write!(f, "cell ({}, {}) is already filled", row, col)
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Row-major cells (row * cols + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "board dimensions must be non-zero");
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Read the cell at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.index(row, col)
            .map(|idx| self.cells[idx])
            .ok_or(BoardError::OutOfBounds { row, col })
    }

    /// Fill the empty cell at `(row, col)` with `color`
    pub fn set(&mut self, row: usize, col: usize, color: Color) -> Result<(), BoardError> {
        let idx = self
            .index(row, col)
            .ok_or(BoardError::OutOfBounds { row, col })?;
        if self.cells[idx].is_some() {
            return Err(BoardError::Occupied { row, col });
        }
        self.cells[idx] = Some(color);
        Ok(())
    }

    /// Whether `(x, y)` is inside the grid and filled.
    ///
    /// Positions outside the grid report `false`; bounds are the validity
    /// checker's concern.
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        match self.index(y as usize, x as usize) {
            Some(idx) => self.cells[idx].is_some(),
            None => false,
        }
    }

    /// Check if every cell in `row` is filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= self.rows {
            return false;
        }
        self.row(row).iter().all(|cell| cell.is_some())
    }

    /// Remove `row`, shift every row above it down by one and insert an empty
    /// row at the top. Returns false if `row` is outside the grid.
    pub fn clear_row(&mut self, row: usize) -> bool {
        if row >= self.rows {
            return false;
        }

        let width = self.cols;
        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..row * width, width);
        self.cells[..width].fill(None);

        true
    }

    /// Clear every full row, scanning from the bottom up, and return how many
    /// rows were removed.
    ///
    /// After a clear the rows above have shifted into the cleared index, so the
    /// same index is checked again before moving up.
    pub fn clear_full_rows(&mut self) -> u32 {
        let mut cleared = 0;
        let mut row = self.rows;

        while row > 0 {
            if self.is_row_full(row - 1) {
                self.clear_row(row - 1);
                cleared += 1;
            } else {
                row -= 1;
            }
        }

        cleared
    }

    /// Cells of one row
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of filled cells on the whole board
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::types::BOARD_ROWS, crate::types::BOARD_COLS)
    }
}
