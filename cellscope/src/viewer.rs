// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use cellscope_gesture::{Changes, GestureController, Key, PointerButton};
use cellscope_grid::{CellGrid, GridError, GridSize};
use cellscope_render::{CellSink, FrameInfo, Palette, VisibleCells};
use cellscope_timing::{ClockState, FrameClock};
use cellscope_view2d::GridViewport;
use kurbo::{Point, Size};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::ViewerConfig;

/// Settling tolerance used by [`GridViewer::is_animating`].
const SETTLE_EPSILON: f64 = 1e-3;

/// A grid, its animated viewport, and the input and timing that drive them.
///
/// The viewer is headless: the host feeds it input events and elapsed time,
/// asks whether a redraw is due, and pulls draw commands when it paints.
#[derive(Clone, Debug)]
pub struct GridViewer {
    grid: CellGrid,
    view: GridViewport,
    gestures: GestureController,
    clock: FrameClock,
    palette: Palette,
    smoothing: f64,
    rng: SmallRng,
    redraw: bool,
}

impl GridViewer {
    /// Wraps `grid` in a viewer at identity scale and zero offset.
    ///
    /// The panel size is unknown until the first [`GridViewer::on_resize`].
    /// A redraw is pending from the start.
    #[must_use]
    pub fn new(grid: CellGrid, config: ViewerConfig) -> Self {
        let mut view = GridViewport::new(grid.size(), config.cell_size)
            .with_min_scale(config.min_scale);
        view.set_fit_mode(config.fit_mode);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            rows = grid.rows(),
            cols = grid.cols(),
            cell_size = view.cell_size(),
            "grid viewer created"
        );
        Self {
            grid,
            view,
            gestures: GestureController::new(config.gestures()),
            clock: FrameClock::new(config.tick_period),
            palette: config.palette,
            smoothing: config.effective_smoothing(),
            rng: SmallRng::seed_from_u64(config.seed),
            redraw: true,
        }
    }

    /// Creates a viewer over an all-`false` grid of `size`.
    pub fn with_size(size: GridSize, config: ViewerConfig) -> Result<Self, GridError> {
        Ok(Self::new(CellGrid::new(size)?, config))
    }

    /// The grid being viewed.
    #[must_use]
    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    /// Edits the grid directly. A redraw is requested if the contents change.
    pub fn edit_grid<T>(&mut self, edit: impl FnOnce(&mut CellGrid) -> T) -> T {
        let before = self.grid.revision();
        let out = edit(&mut self.grid);
        if self.grid.revision() != before {
            self.redraw = true;
        }
        out
    }

    /// The animated viewport.
    #[must_use]
    pub fn viewport(&self) -> &GridViewport {
        &self.view
    }

    /// The gesture controller.
    #[must_use]
    pub fn gestures(&self) -> &GestureController {
        &self.gestures
    }

    /// The animation clock.
    #[must_use]
    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Colors used when rendering.
    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Replaces the palette and requests a redraw.
    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
        self.redraw = true;
    }

    /// Forwards a button press to the gesture controller.
    pub fn on_pointer_down(&mut self, button: PointerButton, pos: Point) -> Changes {
        let changes = self
            .gestures
            .on_pointer_down(button, pos, &mut self.grid, &self.view);
        self.note(changes)
    }

    /// Forwards a button release to the gesture controller.
    pub fn on_pointer_up(&mut self, button: PointerButton) -> Changes {
        let changes = self.gestures.on_pointer_up(button);
        self.note(changes)
    }

    /// Forwards pointer motion to the gesture controller.
    pub fn on_pointer_move(&mut self, pos: Point) -> Changes {
        let changes = self
            .gestures
            .on_pointer_move(pos, &mut self.grid, &mut self.view);
        self.note(changes)
    }

    /// Forwards a wheel rotation to the gesture controller.
    pub fn on_wheel(&mut self, rotation: f64) -> Changes {
        let changes = self.gestures.on_wheel(rotation, &mut self.view);
        self.note(changes)
    }

    /// Forwards a key press to the gesture controller.
    pub fn on_key(&mut self, key: Key) -> Changes {
        let changes = self
            .gestures
            .on_key(key, &mut self.grid, &mut self.view, &mut self.rng);
        self.note(changes)
    }

    /// Records a new panel size and refits the view.
    pub fn on_resize(&mut self, size: Size) -> Changes {
        let changes = self.gestures.on_resize(size, &mut self.view);
        self.note(changes)
    }

    /// Abandons any drag in progress.
    pub fn cancel_gesture(&mut self) -> Changes {
        let changes = self.gestures.cancel();
        self.note(changes)
    }

    /// Accounts for `elapsed` host time.
    ///
    /// Each clock tick that falls due advances the viewport animation by the
    /// configured smoothing factor and requests a redraw. Returns whether a
    /// redraw is pending.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        let ticks = self.clock.advance(elapsed);
        for _ in 0..ticks {
            self.view.tick(self.smoothing);
        }
        if ticks > 0 {
            self.redraw = true;
            #[cfg(feature = "tracing")]
            tracing::trace!(
                ticks,
                scale = self.view.scale(),
                target_scale = self.view.target_scale(),
                "animation advanced"
            );
        }
        self.redraw
    }

    /// Returns `true` if a redraw is pending.
    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        self.redraw
    }

    /// Requests a redraw.
    pub fn request_redraw(&mut self) {
        self.redraw = true;
    }

    /// Clears and returns the pending-redraw flag.
    pub fn take_redraw(&mut self) -> bool {
        core::mem::take(&mut self.redraw)
    }

    /// Returns `true` while the current view is still moving toward its
    /// targets.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.view.is_settled(SETTLE_EPSILON)
    }

    /// Transform and visible range for a paint at the current panel size.
    #[must_use]
    pub fn frame(&self) -> FrameInfo {
        cellscope_render::frame_info(&self.view, self.view.panel_size())
    }

    /// Draw commands for the cells visible in the current panel.
    #[must_use]
    pub fn visible_cells(&self) -> VisibleCells<'_> {
        cellscope_render::visible_cells(
            &self.grid,
            &self.view,
            self.view.panel_size(),
            &self.palette,
        )
    }

    /// Paints the current panel into `sink` and returns the number of cells
    /// drawn.
    pub fn render<S: CellSink + ?Sized>(&self, sink: &mut S) -> usize {
        cellscope_render::render(
            &self.grid,
            &self.view,
            self.view.panel_size(),
            &self.palette,
            sink,
        )
    }

    /// Suspends the animation clock.
    pub fn pause(&mut self) {
        self.clock.pause();
    }

    /// Resumes the animation clock.
    pub fn resume(&mut self) {
        self.clock.resume();
    }

    /// Stops the animation clock for good. Input is still accepted, but the
    /// view no longer animates.
    pub fn shutdown(&mut self) {
        self.clock.stop();
        #[cfg(feature = "tracing")]
        tracing::debug!(total_ticks = self.clock.total_ticks(), "grid viewer shut down");
    }

    /// Returns `true` after [`GridViewer::shutdown`].
    #[must_use]
    pub fn is_shut_down(&self) -> bool {
        self.clock.state() == ClockState::Stopped
    }

    fn note(&mut self, changes: Changes) -> Changes {
        if !changes.is_empty() {
            self.redraw = true;
        }
        changes
    }
}
