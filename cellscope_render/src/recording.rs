// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`CellSink`] that records what it was asked to draw.
//!
//! It does **not** rasterize. It exists for tests and debugging that want to
//! assert on emitted commands and the frame state they were emitted under.

use alloc::vec::Vec;

use crate::{CellDraw, CellSink, FrameInfo};

/// One recorded frame.
#[derive(Clone, Debug)]
pub struct RecordedFrame {
    /// State passed to [`CellSink::begin_frame`].
    pub info: FrameInfo,
    /// Commands in the order they were received.
    pub cells: Vec<CellDraw>,
    /// Whether [`CellSink::end_frame`] was called.
    pub finished: bool,
}

impl RecordedFrame {
    /// Returns the command for `(row, col)`, if it was drawn.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&CellDraw> {
        self.cells
            .iter()
            .find(|d| d.cell.row == row && d.cell.col == col)
    }

    /// Number of commands drawn as alive.
    #[must_use]
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|d| d.alive).count()
    }
}

/// Records every frame it receives.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    frames: Vec<RecordedFrame>,
    orphans: usize,
}

impl RecordingSink {
    /// Returns the recorded frames, oldest first.
    pub fn frames(&self) -> &[RecordedFrame] {
        &self.frames
    }

    /// Returns the most recent frame.
    pub fn last_frame(&self) -> Option<&RecordedFrame> {
        self.frames.last()
    }

    /// Commands received outside of any frame. Always zero when driven by
    /// [`crate::render`].
    pub fn orphan_commands(&self) -> usize {
        self.orphans
    }

    /// Drops all recorded frames.
    pub fn clear(&mut self) {
        self.frames.clear();
        self.orphans = 0;
    }
}

impl CellSink for RecordingSink {
    fn begin_frame(&mut self, frame: &FrameInfo) {
        self.frames.push(RecordedFrame {
            info: frame.clone(),
            cells: Vec::with_capacity(frame.range.len()),
            finished: false,
        });
    }

    fn draw_cell(&mut self, draw: &CellDraw) {
        match self.frames.last_mut() {
            Some(frame) if !frame.finished => frame.cells.push(*draw),
            _ => self.orphans += 1,
        }
    }

    fn end_frame(&mut self) {
        if let Some(frame) = self.frames.last_mut() {
            frame.finished = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use cellscope_grid::{CellGrid, CellIndex, GridSize};
    use cellscope_view2d::{DEFAULT_CELL_SIZE, GridViewport};
    use kurbo::{Affine, Rect, Size};

    use super::RecordingSink;
    use crate::{CellDraw, CellSink, Color, Palette, render};

    #[test]
    fn records_one_finished_frame_per_render() {
        let grid = CellGrid::new(GridSize::new(3, 3)).unwrap();
        let view = GridViewport::new(grid.size(), DEFAULT_CELL_SIZE);
        let mut sink = RecordingSink::default();

        render(&grid, &view, Size::new(60.0, 60.0), &Palette::default(), &mut sink);
        render(&grid, &view, Size::new(30.0, 30.0), &Palette::default(), &mut sink);

        assert_eq!(sink.frames().len(), 2);
        assert!(sink.frames().iter().all(|f| f.finished));
        assert_eq!(sink.frames()[0].cells.len(), 4);
        assert_eq!(sink.last_frame().unwrap().cells.len(), 1);
        assert_eq!(sink.last_frame().unwrap().info.transform, Affine::IDENTITY);
        assert_eq!(sink.orphan_commands(), 0);

        sink.clear();
        assert!(sink.last_frame().is_none());
    }

    #[test]
    fn commands_outside_a_frame_are_counted() {
        let mut sink = RecordingSink::default();
        let draw = CellDraw {
            cell: CellIndex::new(0, 0),
            rect: Rect::new(0.0, 0.0, 1.0, 1.0),
            alive: false,
            fill: Color::WHITE,
            border: Color::BLACK,
        };
        sink.draw_cell(&draw);
        assert_eq!(sink.orphan_commands(), 1);
        assert!(sink.frames().is_empty());
    }
}
