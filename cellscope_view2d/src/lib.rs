// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=cellscope_view2d --heading-base-level=0

//! Cellscope View 2D: an animated viewport over a cell grid.
//!
//! This crate provides a small, headless model of a pan/zoom view onto a
//! fixed-size grid of square cells. It focuses on:
//! - Eased camera state: every animated quantity is an [`Animated`] pair of
//!   *current* and *target* values.
//! - Coordinate conversion between screen points and cell indices.
//! - Fitting the whole grid into the host panel.
//! - Visible-range culling: which cells intersect the panel right now.
//!
//! It does **not** own the grid contents, draw anything, or run a timer.
//! Callers are expected to:
//! - Mutate targets from input handlers ([`GridViewport::set_target_pan`],
//!   [`GridViewport::set_target_zoom`], [`GridViewport::reset_to_fit`]).
//! - Call [`GridViewport::tick`] at a fixed rate to ease current values toward
//!   the targets, redrawing afterwards.
//! - Draw cells from [`GridViewport::visible_cell_range`] in local coordinates
//!   and apply [`GridViewport::transform`].
//!
//! ## Minimal example
//!
//! ```rust
//! use cellscope_grid::{CellIndex, GridSize};
//! use cellscope_view2d::{DEFAULT_CELL_SIZE, GridViewport};
//! use kurbo::{Point, Size};
//!
//! let mut view = GridViewport::new(GridSize::new(10, 10), DEFAULT_CELL_SIZE);
//! view.set_panel_size(Size::new(600.0, 600.0));
//!
//! // The 500x500 grid fits the 600x600 panel at 1.2x.
//! view.reset_to_fit();
//! assert!((view.target_scale() - 1.2).abs() < 1e-12);
//!
//! // Hit testing uses what is on screen now, not where the view is heading.
//! assert_eq!(view.screen_to_grid(Point::new(10.0, 10.0)), Some(CellIndex::new(0, 0)));
//!
//! for _ in 0..100 {
//!     view.tick(0.1);
//! }
//! assert!((view.scale() - 1.2).abs() < 1e-3);
//! ```
//!
//! ## Design notes
//!
//! - Zoom is uniform and applied before translation:
//!   `screen = offset + local * scale`.
//! - Only the *target* scale is constrained. It stays strictly above a floor
//!   ([`DEFAULT_MIN_SCALE`] unless configured); the current scale is never
//!   clamped mid-flight.
//! - Easing is exponential: each tick closes a fixed fraction of the remaining
//!   distance.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod animated;
mod modes;
mod range;
mod viewport;

pub use animated::Animated;
pub use modes::FitMode;
pub use range::CellRange;
pub use viewport::{DEFAULT_CELL_SIZE, DEFAULT_MIN_SCALE, GridViewport, GridViewportDebugInfo};
