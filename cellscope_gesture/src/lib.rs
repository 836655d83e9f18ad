// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=cellscope_gesture --heading-base-level=0

//! Cellscope Gesture: pointer and keyboard state machine for grid views.
//!
//! This crate turns raw, toolkit-neutral input into edits of a
//! [`CellGrid`](cellscope_grid::CellGrid) or target changes on a
//! [`GridViewport`](cellscope_view2d::GridViewport). Hosts wire their native
//! listeners to a handful of plain methods on [`GestureController`]:
//!
//! | Input | Effect |
//! |---|---|
//! | primary press | toggle the cell under the pointer |
//! | secondary press / release | begin / end a pan drag |
//! | auxiliary press / release | begin / end a paint drag |
//! | move while panning | add the pointer delta to the offset target |
//! | move while painting | force the cell under the pointer on |
//! | wheel | zoom in (negative rotation) or out |
//! | arrows / WASD | nudge the offset target |
//! | Home, panel resize | fit the grid to the panel |
//! | `R` / `F` | clear / randomize the grid |
//!
//! Pan and paint drags are mutually exclusive: [`drag::DragState`] holds at
//! most one active [`drag::DragMode`].
//!
//! ## Minimal example
//!
//! ```rust
//! use cellscope_gesture::{Changes, GestureController, PointerButton};
//! use cellscope_grid::{CellGrid, CellIndex, GridSize};
//! use cellscope_view2d::{DEFAULT_CELL_SIZE, GridViewport};
//! use kurbo::Point;
//!
//! let mut grid = CellGrid::new(GridSize::new(4, 4)).unwrap();
//! let view = GridViewport::new(grid.size(), DEFAULT_CELL_SIZE);
//! let mut gestures = GestureController::default();
//!
//! let changes = gestures.on_pointer_down(
//!     PointerButton::Primary,
//!     Point::new(10.0, 10.0),
//!     &mut grid,
//!     &view,
//! );
//! assert_eq!(changes, Changes::GRID);
//! assert_eq!(grid.get(CellIndex::new(0, 0)), Some(true));
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events for toggles, drag transitions, and
//!   resizes.
//!
//! This crate is `no_std` compatible.

#![no_std]

mod controller;
pub mod drag;
mod input;

pub use controller::{GestureConfig, GestureController};
pub use input::{Changes, Key, KeyAction, PointerButton};
