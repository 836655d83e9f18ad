// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=cellscope_grid --heading-base-level=0

//! Cellscope Grid: a fixed-size boolean cell matrix.
//!
//! [`CellGrid`] owns a rectangular, row-major matrix of `bool` cells addressed
//! by [`CellIndex`]. Its dimensions ([`GridSize`]) are fixed at construction and
//! never change afterwards. The type is pure data:
//!
//! - Bounds-checked reads ([`CellGrid::get`]) return `None` outside the grid.
//! - Bounds-checked writes ([`CellGrid::set`], [`CellGrid::toggle`]) return a
//!   [`GridError::OutOfBounds`] that callers may ignore or propagate.
//! - Whole-grid operations ([`CellGrid::clear`], [`CellGrid::randomize`]) replace
//!   any need to reach into the backing storage.
//!
//! Malformed input (zero dimensions, ragged rows) is rejected at construction.
//!
//! ## Minimal example
//!
//! ```rust
//! use cellscope_grid::{CellGrid, CellIndex, GridSize};
//!
//! let mut grid = CellGrid::new(GridSize::new(4, 4)).unwrap();
//! let cell = CellIndex::new(0, 0);
//!
//! assert_eq!(grid.toggle(cell), Ok(true));
//! assert_eq!(grid.get(cell), Some(true));
//!
//! // Outside the grid reads are `None`.
//! assert_eq!(grid.get(CellIndex::new(4, 0)), None);
//!
//! grid.clear();
//! assert_eq!(grid.count_alive(), 0);
//! ```
//!
//! ## Revisions
//!
//! Every mutation that actually changes the contents bumps a revision counter
//! ([`CellGrid::revision`]). Renderers and caches can compare revisions instead
//! of the full contents to decide whether anything needs to be redrawn.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod grid;
mod index;

pub use error::GridError;
pub use grid::CellGrid;
pub use index::{CellIndex, GridSize};
