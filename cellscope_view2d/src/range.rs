// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use cellscope_grid::CellIndex;

/// Half-open block of cells `[rows.start, rows.end) × [cols.start, cols.end)`.
///
/// Produced by [`crate::GridViewport::visible_cell_range`]. Iteration is
/// row-major.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct CellRange {
    /// Visible rows.
    pub rows: Range<usize>,
    /// Visible columns.
    pub cols: Range<usize>,
}

impl CellRange {
    /// Creates a range; inverted bounds are collapsed to empty.
    #[must_use]
    pub fn new(rows: Range<usize>, cols: Range<usize>) -> Self {
        Self {
            rows: rows.start..rows.end.max(rows.start),
            cols: cols.start..cols.end.max(cols.start),
        }
    }

    /// Returns `true` if the range covers no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.cols.is_empty()
    }

    /// Number of cells covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len() * self.cols.len()
    }

    /// Returns `true` if `cell` falls inside the range.
    #[must_use]
    pub fn contains(&self, cell: CellIndex) -> bool {
        self.rows.contains(&cell.row) && self.cols.contains(&cell.col)
    }

    /// Iterates the covered cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = CellIndex> + '_ {
        let cols = self.cols.clone();
        self.rows
            .clone()
            .flat_map(move |row| cols.clone().map(move |col| CellIndex::new(row, col)))
    }
}
