// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::index::{CellIndex, GridSize};

/// Error returned by grid construction and bounds-checked writes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The grid would have zero rows or zero columns.
    Empty {
        /// Requested size.
        size: GridSize,
    },
    /// A row's length differs from the first row's length.
    Ragged {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// A flat cell buffer does not match the requested size.
    LengthMismatch {
        /// `rows * cols` of the requested size.
        expected: usize,
        /// Length of the supplied buffer.
        found: usize,
    },
    /// A cell index lies outside the grid.
    OutOfBounds {
        /// The rejected index.
        cell: CellIndex,
        /// Size of the grid.
        size: GridSize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { size } => {
                write!(f, "grid must have at least one row and column, got {size}")
            }
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} cells, expected {expected}"),
            Self::LengthMismatch { expected, found } => {
                write!(f, "cell buffer has {found} cells, expected {expected}")
            }
            Self::OutOfBounds { cell, size } => {
                write!(f, "cell {cell} is outside the {size} grid")
            }
        }
    }
}

impl core::error::Error for GridError {}
