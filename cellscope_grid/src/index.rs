// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Address of a single cell: zero-based `row` and `col`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct CellIndex {
    /// Zero-based row, counted from the top.
    pub row: usize,
    /// Zero-based column, counted from the left.
    pub col: usize,
}

impl CellIndex {
    /// Creates a cell index.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for CellIndex {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Dimensions of a grid in cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct GridSize {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
}

impl GridSize {
    /// Creates a grid size.
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Total number of cells.
    #[must_use]
    pub const fn area(self) -> usize {
        self.rows * self.cols
    }

    /// Returns `true` if either dimension is zero.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Returns `true` if `cell` lies inside `[0, rows) × [0, cols)`.
    #[must_use]
    pub const fn contains(self, cell: CellIndex) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Row-major offset of `cell`, or `None` when it is out of bounds.
    #[must_use]
    pub const fn offset_of(self, cell: CellIndex) -> Option<usize> {
        if self.contains(cell) {
            Some(cell.row * self.cols + cell.col)
        } else {
            None
        }
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}
