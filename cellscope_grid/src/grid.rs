// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec;
use alloc::vec::Vec;

use rand::Rng;

use crate::error::GridError;
use crate::index::{CellIndex, GridSize};

/// A fixed-size, row-major matrix of boolean cells.
///
/// The dimensions are chosen at construction and never change. All access is
/// bounds-checked; there is no way to obtain mutable access to the backing
/// storage, so every mutation goes through a method that can maintain the
/// revision counter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellGrid {
    size: GridSize,
    cells: Vec<bool>,
    revision: u64,
}

impl CellGrid {
    /// Creates a grid of `size` with every cell `false`.
    ///
    /// Returns [`GridError::Empty`] if either dimension is zero.
    pub fn new(size: GridSize) -> Result<Self, GridError> {
        if size.is_empty() {
            return Err(GridError::Empty { size });
        }
        Ok(Self {
            size,
            cells: vec![false; size.area()],
            revision: 0,
        })
    }

    /// Creates a grid from a row-major buffer of `size.rows * size.cols` cells.
    pub fn from_vec(size: GridSize, cells: Vec<bool>) -> Result<Self, GridError> {
        if size.is_empty() {
            return Err(GridError::Empty { size });
        }
        if cells.len() != size.area() {
            return Err(GridError::LengthMismatch {
                expected: size.area(),
                found: cells.len(),
            });
        }
        Ok(Self {
            size,
            cells,
            revision: 0,
        })
    }

    /// Creates a grid from nested rows.
    ///
    /// Every row must have the same, non-zero length and there must be at least
    /// one row.
    ///
    /// ```rust
    /// use cellscope_grid::{CellGrid, CellIndex, GridError};
    ///
    /// let grid = CellGrid::from_rows([[false, true], [true, false]]).unwrap();
    /// assert_eq!(grid.get(CellIndex::new(0, 1)), Some(true));
    ///
    /// let ragged = CellGrid::from_rows([&[false, true][..], &[true][..]]);
    /// assert!(matches!(ragged, Err(GridError::Ragged { row: 1, .. })));
    /// ```
    pub fn from_rows<I, R>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[bool]>,
    {
        let mut cells = Vec::new();
        let mut cols = None;
        let mut row_count = 0;
        for (row, values) in rows.into_iter().enumerate() {
            let values = values.as_ref();
            let expected = *cols.get_or_insert(values.len());
            if values.len() != expected {
                return Err(GridError::Ragged {
                    row,
                    expected,
                    found: values.len(),
                });
            }
            cells.extend_from_slice(values);
            row_count += 1;
        }
        Self::from_vec(GridSize::new(row_count, cols.unwrap_or(0)), cells)
    }

    /// Returns the grid dimensions.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.size.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.size.cols
    }

    /// Returns `true` if `cell` is inside the grid.
    #[must_use]
    pub fn contains(&self, cell: CellIndex) -> bool {
        self.size.contains(cell)
    }

    /// Reads a cell, or `None` when `cell` is outside the grid.
    #[must_use]
    pub fn get(&self, cell: CellIndex) -> Option<bool> {
        self.size.offset_of(cell).map(|i| self.cells[i])
    }

    /// Writes a cell and returns whether its value changed.
    pub fn set(&mut self, cell: CellIndex, value: bool) -> Result<bool, GridError> {
        let i = self.offset_or_err(cell)?;
        if self.cells[i] == value {
            return Ok(false);
        }
        self.cells[i] = value;
        self.bump_revision();
        Ok(true)
    }

    /// Flips a cell and returns its new value.
    pub fn toggle(&mut self, cell: CellIndex) -> Result<bool, GridError> {
        let i = self.offset_or_err(cell)?;
        let value = !self.cells[i];
        self.cells[i] = value;
        self.bump_revision();
        Ok(value)
    }

    /// Sets every cell to `false`.
    pub fn clear(&mut self) {
        if !self.cells.contains(&true) {
            return;
        }
        self.cells.fill(false);
        self.bump_revision();
    }

    /// Sets every cell to an independent, uniformly random boolean.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in &mut self.cells {
            *cell = rng.random();
        }
        self.bump_revision();
    }

    /// Returns the cells of `row`, or `None` if the row does not exist.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[bool]> {
        if row >= self.size.rows {
            return None;
        }
        let start = row * self.size.cols;
        Some(&self.cells[start..start + self.size.cols])
    }

    /// Returns all cells in row-major order.
    #[must_use]
    pub fn as_slice(&self) -> &[bool] {
        &self.cells
    }

    /// Number of `true` cells.
    #[must_use]
    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Returns the current revision counter.
    ///
    /// The counter starts at zero and is bumped by every mutation that changes
    /// at least one cell. Writes that leave the contents untouched (setting a
    /// cell to its current value, clearing an already clear grid) do not bump
    /// it.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn offset_or_err(&self, cell: CellIndex) -> Result<usize, GridError> {
        self.size.offset_of(cell).ok_or(GridError::OutOfBounds {
            cell,
            size: self.size,
        })
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
