// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=cellscope_render --heading-base-level=0

//! Cellscope Render: backend-agnostic draw commands for visible cells.
//!
//! This crate decides *what* to draw for a grid view and leaves *how* to the
//! host's rasterizer. Given a [`CellGrid`], a [`GridViewport`], and the host
//! panel size, it produces one [`CellDraw`] per cell that intersects the panel:
//!
//! - `rect` is in grid-local (pre-transform) coordinates, one cell size wide.
//! - `fill` is the palette's alive or dead color; `border` is the palette's
//!   border color.
//! - Cells are emitted row-major over
//!   [`GridViewport::visible_cell_range`]; nothing off-panel is emitted.
//!
//! The host applies [`FrameInfo::transform`] (translate by the offset after
//! scaling) before filling and stroking each rectangle.
//!
//! # Sinks
//!
//! Hosts can pull commands from [`visible_cells`] directly, or implement
//! [`CellSink`] and call [`render`]. [`RecordingSink`] records frames for tests
//! and debugging.
//!
//! ```rust
//! use cellscope_grid::{CellGrid, CellIndex, GridSize};
//! use cellscope_render::{Palette, RecordingSink, render};
//! use cellscope_view2d::{DEFAULT_CELL_SIZE, GridViewport};
//! use kurbo::Size;
//!
//! let mut grid = CellGrid::new(GridSize::new(100, 100)).unwrap();
//! grid.set(CellIndex::new(0, 0), true).unwrap();
//! let view = GridViewport::new(grid.size(), DEFAULT_CELL_SIZE);
//!
//! let mut sink = RecordingSink::default();
//! let drawn = render(&grid, &view, Size::new(120.0, 60.0), &Palette::default(), &mut sink);
//!
//! // 3 columns x 2 rows intersect a 120x60 panel at 50 units per cell.
//! assert_eq!(drawn, 6);
//! assert!(sink.last_frame().unwrap().cells[0].alive);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod recording;

use alloc::vec::Vec;

use cellscope_grid::{CellGrid, CellIndex};
use cellscope_view2d::{CellRange, GridViewport};
use kurbo::{Affine, Rect, Size};

pub use peniko::Color;
pub use recording::{RecordedFrame, RecordingSink};

/// Colors used for cells.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    /// Fill for `true` cells.
    pub alive: Color,
    /// Fill for `false` cells.
    pub dead: Color,
    /// Stroke around every cell.
    pub border: Color,
}

impl Palette {
    /// Fill color for a cell value.
    #[must_use]
    pub fn fill_for(&self, alive: bool) -> Color {
        if alive { self.alive } else { self.dead }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            alive: Color::BLACK,
            dead: Color::WHITE,
            border: Color::BLACK,
        }
    }
}

/// Draw command for one cell.
#[derive(Clone, Copy, Debug)]
pub struct CellDraw {
    /// The cell being drawn.
    pub cell: CellIndex,
    /// Cell bounds in grid-local coordinates.
    pub rect: Rect,
    /// Cell value.
    pub alive: bool,
    /// Fill color.
    pub fill: Color,
    /// Border color.
    pub border: Color,
}

/// Per-frame state shared by every command in the frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameInfo {
    /// Local → screen transform to apply to every [`CellDraw::rect`].
    pub transform: Affine,
    /// Cells emitted this frame.
    pub range: CellRange,
}

/// Receiver of cell draw commands, implemented by host rasterizers.
pub trait CellSink {
    /// Called once before the frame's cells.
    fn begin_frame(&mut self, frame: &FrameInfo) {
        let _ = frame;
    }

    /// Called once per visible cell, row-major.
    fn draw_cell(&mut self, draw: &CellDraw);

    /// Called once after the frame's cells.
    fn end_frame(&mut self) {}
}

impl CellSink for Vec<CellDraw> {
    fn draw_cell(&mut self, draw: &CellDraw) {
        self.push(*draw);
    }
}

/// Frame state for the current view of a `panel`-sized region.
#[must_use]
pub fn frame_info(view: &GridViewport, panel: Size) -> FrameInfo {
    FrameInfo {
        transform: view.transform(),
        range: view.visible_cell_range(panel),
    }
}

/// Iterates draw commands for exactly the cells visible in `panel`.
///
/// `grid` and `view` are expected to describe the same grid size; cells the
/// grid does not contain are drawn as dead.
#[must_use]
pub fn visible_cells<'a>(
    grid: &'a CellGrid,
    view: &GridViewport,
    panel: Size,
    palette: &Palette,
) -> VisibleCells<'a> {
    debug_assert_eq!(
        grid.size(),
        view.grid_size(),
        "viewport was built for a different grid"
    );
    VisibleCells::new(grid, view, view.visible_cell_range(panel), *palette)
}

/// Drives `sink` through one frame and returns the number of cells drawn.
pub fn render<S: CellSink + ?Sized>(
    grid: &CellGrid,
    view: &GridViewport,
    panel: Size,
    palette: &Palette,
    sink: &mut S,
) -> usize {
    let frame = frame_info(view, panel);
    sink.begin_frame(&frame);
    let mut drawn = 0;
    for draw in VisibleCells::new(grid, view, frame.range.clone(), *palette) {
        sink.draw_cell(&draw);
        drawn += 1;
    }
    sink.end_frame();
    drawn
}

/// Row-major iterator over the draw commands of a [`CellRange`].
#[derive(Clone, Debug)]
pub struct VisibleCells<'a> {
    grid: &'a CellGrid,
    cell_size: f64,
    palette: Palette,
    range: CellRange,
    next: Option<CellIndex>,
}

impl<'a> VisibleCells<'a> {
    fn new(grid: &'a CellGrid, view: &GridViewport, range: CellRange, palette: Palette) -> Self {
        let next = (!range.is_empty()).then(|| CellIndex::new(range.rows.start, range.cols.start));
        Self {
            grid,
            cell_size: view.cell_size(),
            palette,
            range,
            next,
        }
    }

    /// The range being iterated.
    #[must_use]
    pub fn range(&self) -> &CellRange {
        &self.range
    }

    fn remaining(&self) -> usize {
        match self.next {
            Some(cell) => {
                let width = self.range.cols.len();
                (self.range.rows.end - cell.row) * width - (cell.col - self.range.cols.start)
            }
            None => 0,
        }
    }
}

impl Iterator for VisibleCells<'_> {
    type Item = CellDraw;

    fn next(&mut self) -> Option<CellDraw> {
        let cell = self.next?;
        self.next = if cell.col + 1 < self.range.cols.end {
            Some(CellIndex::new(cell.row, cell.col + 1))
        } else if cell.row + 1 < self.range.rows.end {
            Some(CellIndex::new(cell.row + 1, self.range.cols.start))
        } else {
            None
        };

        let alive = self.grid.get(cell).unwrap_or(false);
        let x0 = cell.col as f64 * self.cell_size;
        let y0 = cell.row as f64 * self.cell_size;
        Some(CellDraw {
            cell,
            rect: Rect::new(x0, y0, x0 + self.cell_size, y0 + self.cell_size),
            alive,
            fill: self.palette.fill_for(alive),
            border: self.palette.border,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for VisibleCells<'_> {}
