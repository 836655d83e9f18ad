// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=cellscope --heading-base-level=0

//! Cellscope: a headless, animated pan/zoom viewer for boolean cell grids.
//!
//! [`GridViewer`] ties together the Cellscope building blocks:
//!
//! - [`cellscope_grid`]: the fixed-size cell matrix.
//! - [`cellscope_view2d`]: the animated viewport and coordinate conversions.
//! - [`cellscope_gesture`]: mouse, wheel, and keyboard interpretation.
//! - [`cellscope_timing`]: the fixed-rate animation clock.
//! - [`cellscope_render`]: draw commands for the visible cells.
//!
//! The host owns the window, the event loop, and the rasterizer. It forwards
//! input and elapsed time to the viewer, and whenever a redraw is pending it
//! pulls draw commands and paints them under [`FrameInfo::transform`].
//!
//! ## Input
//!
//! | Input | Effect |
//! | --- | --- |
//! | Primary click | Toggle the cell under the pointer |
//! | Secondary drag | Pan the view |
//! | Auxiliary drag | Turn cells on under the pointer |
//! | Wheel | Zoom in (rotation < 0) or out |
//! | Arrows / WASD | Pan by a fixed step |
//! | Home | Fit the grid to the panel |
//! | `R` / `F` | Clear / randomize the grid |
//!
//! ## Example
//!
//! ```rust
//! use core::time::Duration;
//! use cellscope::{GridViewer, PointerButton, RecordingSink, ViewerConfig};
//! use cellscope_grid::{CellIndex, GridSize};
//! use kurbo::{Point, Size};
//!
//! let mut viewer = GridViewer::with_size(GridSize::new(10, 10), ViewerConfig::default()).unwrap();
//! viewer.on_resize(Size::new(600.0, 600.0));
//!
//! // Let the fit animation play out.
//! for _ in 0..200 {
//!     viewer.advance(Duration::from_millis(16));
//! }
//! assert!((viewer.viewport().scale() - 1.2).abs() < 1e-3);
//!
//! // At scale 1.2, each cell is 60 units wide.
//! viewer.on_pointer_down(PointerButton::Primary, Point::new(65.0, 5.0));
//! assert_eq!(viewer.grid().get(CellIndex::new(0, 1)), Some(true));
//!
//! let mut sink = RecordingSink::default();
//! assert_eq!(viewer.render(&mut sink), 100);
//! ```
//!
//! ## Features
//!
//! - `std` (default): build dependencies with the standard library.
//! - `libm`: floating-point support for `no_std` targets.
//! - `serde`: `Serialize`/`Deserialize` for [`ViewerConfig`].
//! - `tracing`: emit `tracing` events for viewer and gesture activity.
//!
//! This crate is `no_std` and uses `alloc` through its dependencies.

#![no_std]

mod config;
mod viewer;

pub use cellscope_gesture::{Changes, GestureConfig, Key, PointerButton};
pub use cellscope_render::{
    CellDraw, CellSink, Color, FrameInfo, Palette, RecordedFrame, RecordingSink, VisibleCells,
};
pub use cellscope_view2d::FitMode;
pub use config::{DEFAULT_SMOOTHING, ViewerConfig};
pub use viewer::GridViewer;
