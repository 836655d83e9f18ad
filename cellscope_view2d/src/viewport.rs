// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use cellscope_grid::{CellIndex, GridSize};
use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::animated::Animated;
use crate::modes::FitMode;
use crate::range::CellRange;

/// Edge length of one cell, in screen units, at scale `1.0`.
pub const DEFAULT_CELL_SIZE: f64 = 50.0;

/// Default floor for the target scale. Targets never reach or go below it.
pub const DEFAULT_MIN_SCALE: f64 = 0.1;

/// Animated viewport over a fixed-size cell grid.
///
/// Grid content lives in a *local* coordinate space where cell `(row, col)`
/// covers `[col * cell_size, (col + 1) * cell_size) × [row * cell_size, (row + 1) * cell_size)`.
/// The viewport maps local coordinates to screen coordinates by scaling and
/// then translating:
///
/// `screen = offset + local * scale`
///
/// Scale and offset are [`Animated`]: input handlers move the *targets* and
/// [`GridViewport::tick`] eases the *current* values toward them. All queries
/// (hit testing, culling, the exported transform) use the current values, so
/// they always describe what is on screen right now.
#[derive(Clone, Debug)]
pub struct GridViewport {
    grid_size: GridSize,
    cell_size: f64,
    panel: Size,
    scale: Animated,
    offset_x: Animated,
    offset_y: Animated,
    min_scale: f64,
    fit_mode: FitMode,
    local_to_screen: Affine,
}

impl GridViewport {
    /// Creates an identity viewport (scale `1.0`, zero offset) over a grid of
    /// `grid_size` cells, each `cell_size` screen units wide at scale `1.0`.
    ///
    /// The panel size starts at zero; hosts report it with
    /// [`GridViewport::set_panel_size`].
    #[must_use]
    pub fn new(grid_size: GridSize, cell_size: f64) -> Self {
        debug_assert!(
            cell_size.is_finite() && cell_size > 0.0,
            "cell size must be positive and finite, got {cell_size}"
        );
        let cell_size = if cell_size.is_finite() && cell_size > 0.0 {
            cell_size
        } else {
            DEFAULT_CELL_SIZE
        };
        Self {
            grid_size,
            cell_size,
            panel: Size::ZERO,
            scale: Animated::new(1.0),
            offset_x: Animated::new(0.0),
            offset_y: Animated::new(0.0),
            min_scale: DEFAULT_MIN_SCALE,
            fit_mode: FitMode::default(),
            local_to_screen: Affine::IDENTITY,
        }
    }

    /// Replaces the target-scale floor.
    ///
    /// The floor only constrains later adjustments; it does not move the
    /// current target.
    #[must_use]
    pub fn with_min_scale(mut self, min_scale: f64) -> Self {
        debug_assert!(
            min_scale.is_finite() && min_scale > 0.0,
            "scale floor must be positive and finite, got {min_scale}"
        );
        if min_scale.is_finite() && min_scale > 0.0 {
            self.min_scale = min_scale;
        }
        self
    }

    /// Grid dimensions this viewport was built for.
    #[must_use]
    pub fn grid_size(&self) -> GridSize {
        self.grid_size
    }

    /// Cell edge length at scale `1.0`.
    #[must_use]
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Size of the whole grid in local coordinates.
    #[must_use]
    pub fn grid_pixel_size(&self) -> Size {
        Size::new(
            self.grid_size.cols as f64 * self.cell_size,
            self.grid_size.rows as f64 * self.cell_size,
        )
    }

    /// Last panel size reported by the host.
    #[must_use]
    pub fn panel_size(&self) -> Size {
        self.panel
    }

    /// Records the host panel size and returns whether it changed.
    ///
    /// Negative and NaN extents are treated as zero. This does not refit the
    /// view; call [`GridViewport::reset_to_fit`] for that.
    pub fn set_panel_size(&mut self, size: Size) -> bool {
        let size = Size::new(size.width.max(0.0), size.height.max(0.0));
        if size == self.panel {
            return false;
        }
        self.panel = size;
        true
    }

    /// Target-scale floor.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Sets how [`GridViewport::reset_to_fit`] positions the grid.
    pub fn set_fit_mode(&mut self, mode: FitMode) {
        self.fit_mode = mode;
    }

    /// Returns the current fit mode.
    #[must_use]
    pub fn fit_mode(&self) -> FitMode {
        self.fit_mode
    }

    /// Current (rendered) scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale.current()
    }

    /// Scale the view is easing toward.
    #[must_use]
    pub fn target_scale(&self) -> f64 {
        self.scale.target()
    }

    /// Current (rendered) offset in screen units.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.offset_x.current(), self.offset_y.current())
    }

    /// Offset the view is easing toward.
    #[must_use]
    pub fn target_offset(&self) -> Vec2 {
        Vec2::new(self.offset_x.target(), self.offset_y.target())
    }

    /// Current local → screen transform: scale, then translate by the offset.
    ///
    /// Hosts apply this to the rectangles produced in local coordinates.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.local_to_screen
    }

    /// Transform the view will settle at once the animation completes.
    #[must_use]
    pub fn target_transform(&self) -> Affine {
        Affine::translate(self.target_offset()) * Affine::scale(self.scale.target())
    }

    /// Converts a screen point into local (pre-transform) coordinates using the
    /// current scale and offset.
    #[must_use]
    pub fn screen_to_local(&self, screen: Point) -> Point {
        let scale = self.scale.current();
        Point::new(
            (screen.x - self.offset_x.current()) / scale,
            (screen.y - self.offset_y.current()) / scale,
        )
    }

    /// Converts a local point into screen coordinates using the current
    /// transform.
    #[must_use]
    pub fn local_to_screen(&self, local: Point) -> Point {
        self.local_to_screen * local
    }

    /// Returns the cell under a screen point, or `None` outside the grid.
    ///
    /// Uses the current transform, so a click mid-animation hits the cell the
    /// user is looking at rather than where the view is heading.
    #[must_use]
    pub fn screen_to_grid(&self, screen: Point) -> Option<CellIndex> {
        let local = self.screen_to_local(screen);
        let col = libm::floor(local.x / self.cell_size);
        let row = libm::floor(local.y / self.cell_size);
        if !(col.is_finite() && row.is_finite()) || col < 0.0 || row < 0.0 {
            return None;
        }
        if col >= self.grid_size.cols as f64 || row >= self.grid_size.rows as f64 {
            return None;
        }
        Some(CellIndex::new(
            clamp_index(row, self.grid_size.rows),
            clamp_index(col, self.grid_size.cols),
        ))
    }

    /// Screen position of the center of `cell` under the current transform.
    ///
    /// The center is used so that `screen_to_grid(grid_to_screen(cell))`
    /// returns `cell` without depending on how edges round.
    #[must_use]
    pub fn grid_to_screen(&self, cell: CellIndex) -> Point {
        self.local_to_screen(self.cell_rect(cell).center())
    }

    /// Local-space rectangle covered by `cell`.
    #[must_use]
    pub fn cell_rect(&self, cell: CellIndex) -> Rect {
        let x0 = cell.col as f64 * self.cell_size;
        let y0 = cell.row as f64 * self.cell_size;
        Rect::new(x0, y0, x0 + self.cell_size, y0 + self.cell_size)
    }

    /// Screen-space rectangle covered by `cell` under the current transform.
    #[must_use]
    pub fn cell_screen_rect(&self, cell: CellIndex) -> Rect {
        self.local_to_screen.transform_rect_bbox(self.cell_rect(cell))
    }

    /// Cells that intersect a `panel`-sized screen region anchored at the
    /// origin, under the current transform.
    ///
    /// The returned ranges are half-open and always lie within
    /// `[0, rows] × [0, cols]`. Offsets may be negative and the scale may be
    /// below one; either way the visible region is mapped back into local
    /// space before being clamped to the grid.
    #[must_use]
    pub fn visible_cell_range(&self, panel: Size) -> CellRange {
        let scale = self.scale.current();
        if !(scale.is_finite() && scale > 0.0) || panel.width <= 0.0 || panel.height <= 0.0 {
            return CellRange::default();
        }
        let top_left = self.screen_to_local(Point::ZERO);
        let bottom_right = self.screen_to_local(Point::new(panel.width, panel.height));
        let cs = self.cell_size;
        let GridSize { rows, cols } = self.grid_size;

        CellRange::new(
            clamp_index(libm::floor(top_left.y / cs), rows)
                ..clamp_index(libm::ceil(bottom_right.y / cs), rows),
            clamp_index(libm::floor(top_left.x / cs), cols)
                ..clamp_index(libm::ceil(bottom_right.x / cs), cols),
        )
    }

    /// Largest scale at which `content` fits inside `panel`, preserving aspect
    /// ratio: `min(panel.width / content.width, panel.height / content.height)`.
    ///
    /// Degenerate content extents are treated as the smallest positive value.
    /// A zero-sized panel yields `0.0`, which no target accepts.
    #[must_use]
    pub fn fit_scale(panel: Size, content: Size) -> f64 {
        let sx = panel.width / content.width.max(f64::MIN_POSITIVE);
        let sy = panel.height / content.height.max(f64::MIN_POSITIVE);
        sx.min(sy)
    }

    /// Retargets the view so the whole grid fits the panel.
    ///
    /// The target scale becomes [`GridViewport::fit_scale`] of the panel and
    /// grid sizes; the offset target follows the [`FitMode`]. If the fit scale
    /// would not stay above the floor (for example while the panel is
    /// collapsed), the current target scale is kept. Returns whether the fit
    /// scale was accepted.
    pub fn reset_to_fit(&mut self) -> bool {
        let grid = self.grid_pixel_size();
        let fitted = Self::fit_scale(self.panel, grid);
        let accepted = self.accepts_scale(fitted);
        if accepted {
            self.scale.set_target(fitted);
        }
        let scale = self.scale.target();
        let offset = match self.fit_mode {
            FitMode::AlignMin => Vec2::ZERO,
            FitMode::Center => Vec2::new(
                (self.panel.width - grid.width * scale) * 0.5,
                (self.panel.height - grid.height * scale) * 0.5,
            ),
        };
        self.offset_x.set_target(offset.x);
        self.offset_y.set_target(offset.y);
        accepted
    }

    /// Adds `delta` to the target scale (positive zooms in).
    ///
    /// The adjustment is applied only if the result is finite and strictly
    /// above [`GridViewport::min_scale`]; otherwise the target is unchanged.
    /// Returns whether the target moved.
    pub fn set_target_zoom(&mut self, delta: f64) -> bool {
        let candidate = self.scale.target() + delta;
        if delta == 0.0 || !self.accepts_scale(candidate) {
            return false;
        }
        self.scale.set_target(candidate);
        true
    }

    /// Adds `delta` to the target offset.
    pub fn set_target_pan(&mut self, delta: Vec2) {
        if !(delta.x.is_finite() && delta.y.is_finite()) {
            return;
        }
        self.offset_x.set_target(self.offset_x.target() + delta.x);
        self.offset_y.set_target(self.offset_y.target() + delta.y);
    }

    /// Advances scale and offset `factor` of the way toward their targets.
    ///
    /// This is the only method that moves the current values (besides
    /// [`GridViewport::snap_to_target`]).
    pub fn tick(&mut self, factor: f64) {
        self.scale.tick(factor);
        self.offset_x.tick(factor);
        self.offset_y.tick(factor);
        self.rebuild_transform();
    }

    /// Jumps the current values to the targets, skipping the animation.
    pub fn snap_to_target(&mut self) {
        self.scale.snap();
        self.offset_x.snap();
        self.offset_y.snap();
        self.rebuild_transform();
    }

    /// Returns `true` when scale and both offsets are within `epsilon` of
    /// their targets.
    #[must_use]
    pub fn is_settled(&self, epsilon: f64) -> bool {
        self.scale.is_settled(epsilon)
            && self.offset_x.is_settled(epsilon)
            && self.offset_y.is_settled(epsilon)
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> GridViewportDebugInfo {
        GridViewportDebugInfo {
            grid_size: self.grid_size,
            cell_size: self.cell_size,
            panel: self.panel,
            scale: self.scale,
            offset_x: self.offset_x,
            offset_y: self.offset_y,
            min_scale: self.min_scale,
            fit_mode: self.fit_mode,
            visible: self.visible_cell_range(self.panel),
        }
    }

    fn accepts_scale(&self, scale: f64) -> bool {
        scale.is_finite() && scale > self.min_scale
    }

    fn rebuild_transform(&mut self) {
        // Local → screen: scale, then translate by the offset.
        self.local_to_screen = Affine::translate(self.offset()) * Affine::scale(self.scale.current());
    }
}

/// Debug snapshot of a [`GridViewport`] state.
#[derive(Clone, Debug)]
pub struct GridViewportDebugInfo {
    /// Grid dimensions.
    pub grid_size: GridSize,
    /// Cell edge length at scale `1.0`.
    pub cell_size: f64,
    /// Last reported panel size.
    pub panel: Size,
    /// Current and target scale.
    pub scale: Animated,
    /// Current and target horizontal offset.
    pub offset_x: Animated,
    /// Current and target vertical offset.
    pub offset_y: Animated,
    /// Target-scale floor.
    pub min_scale: f64,
    /// Fit mode used by [`GridViewport::reset_to_fit`].
    pub fit_mode: FitMode,
    /// Cells visible in the last reported panel.
    pub visible: CellRange,
}

/// Converts a floored/ceiled coordinate into an index in `[0, max]`.
#[expect(
    clippy::cast_possible_truncation,
    reason = "value is clamped into [0, max] before the cast"
)]
fn clamp_index(value: f64, max: usize) -> usize {
    if value.is_nan() || value <= 0.0 {
        0
    } else if value >= max as f64 {
        max
    } else {
        value as usize
    }
}
