// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Cellscope demos.
//!
//! - [`init_tracing`] installs a `tracing-subscriber` formatter filtered by
//!   `RUST_LOG`.
//! - [`AsciiCanvas`] is a [`CellSink`] that rasterizes a frame into text, so
//!   the demos can show what a host would paint without a window.

use std::fmt;

use cellscope::{CellDraw, CellSink, FrameInfo};
use kurbo::{Affine, Point, Size};
use tracing_subscriber::EnvFilter;

/// Installs a formatting subscriber.
///
/// `RUST_LOG` takes precedence; without it, Cellscope crates log at `debug`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,cellscope=debug,cellscope_gesture=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

/// Text raster of one frame.
///
/// Each character stands for a `cell_px`-sized block of the panel and shows
/// the cell covering the block's center: `#` for alive, `.` for dead, and a
/// space where no cell was drawn.
#[derive(Clone, Debug)]
pub struct AsciiCanvas {
    columns: usize,
    lines: usize,
    cell_px: Size,
    transform: Affine,
    chars: Vec<char>,
}

impl AsciiCanvas {
    /// Creates a canvas covering `panel`, with one character per `cell_px`.
    pub fn new(panel: Size, cell_px: Size) -> Self {
        let columns = blocks(panel.width, cell_px.width);
        let lines = blocks(panel.height, cell_px.height);
        Self {
            columns,
            lines,
            cell_px,
            transform: Affine::IDENTITY,
            chars: vec![' '; columns * lines],
        }
    }

    fn block_center(&self, column: usize, line: usize) -> Point {
        Point::new(
            (column as f64 + 0.5) * self.cell_px.width,
            (line as f64 + 0.5) * self.cell_px.height,
        )
    }
}

fn blocks(extent: f64, block: f64) -> usize {
    if extent > 0.0 && block > 0.0 {
        (extent / block).ceil() as usize
    } else {
        0
    }
}

impl CellSink for AsciiCanvas {
    fn begin_frame(&mut self, frame: &FrameInfo) {
        self.transform = frame.transform;
        self.chars.fill(' ');
    }

    fn draw_cell(&mut self, draw: &CellDraw) {
        let rect = self.transform.transform_rect_bbox(draw.rect);
        let glyph = if draw.alive { '#' } else { '.' };
        for line in 0..self.lines {
            for column in 0..self.columns {
                let center = self.block_center(column, line);
                if rect.contains(center) {
                    self.chars[line * self.columns + column] = glyph;
                }
            }
        }
    }
}

impl fmt::Display for AsciiCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.chars.chunks(self.columns.max(1)) {
            let line: String = row.iter().collect();
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
