// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use cellscope_gesture::GestureConfig;
use cellscope_render::Palette;
use cellscope_timing::DEFAULT_PERIOD;
use cellscope_view2d::{DEFAULT_CELL_SIZE, DEFAULT_MIN_SCALE, FitMode};

/// Default fraction of the remaining distance covered per animation tick.
pub const DEFAULT_SMOOTHING: f64 = 0.1;

/// Tunables for a [`crate::GridViewer`].
///
/// With the `serde` feature the numeric fields (and the tick period) can be
/// loaded from any serde format; missing fields take their defaults. The fit
/// mode and palette are not serialized.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewerConfig {
    /// Cell edge length at scale `1.0`.
    pub cell_size: f64,
    /// Fraction of the remaining distance covered per tick, in `(0, 1]`.
    pub smoothing: f64,
    /// Target-scale change per wheel notch.
    pub zoom_step: f64,
    /// Target-offset change per directional key press.
    pub move_amount: f64,
    /// Target-scale floor.
    pub min_scale: f64,
    /// Animation tick period.
    pub tick_period: Duration,
    /// How a refit positions the grid.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub fit_mode: FitMode,
    /// Seed for the randomize action.
    pub seed: u64,
    /// Cell colors.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub palette: Palette,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        let gestures = GestureConfig::default();
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            smoothing: DEFAULT_SMOOTHING,
            zoom_step: gestures.zoom_step,
            move_amount: gestures.move_amount,
            min_scale: DEFAULT_MIN_SCALE,
            tick_period: DEFAULT_PERIOD,
            fit_mode: FitMode::AlignMin,
            seed: 0,
            palette: Palette::default(),
        }
    }
}

impl ViewerConfig {
    /// Sets the cell edge length.
    #[must_use]
    pub fn with_cell_size(mut self, cell_size: f64) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Sets the per-tick smoothing factor.
    #[must_use]
    pub fn with_smoothing(mut self, smoothing: f64) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// Sets the wheel zoom step.
    #[must_use]
    pub fn with_zoom_step(mut self, zoom_step: f64) -> Self {
        self.zoom_step = zoom_step;
        self
    }

    /// Sets the keyboard pan step.
    #[must_use]
    pub fn with_move_amount(mut self, move_amount: f64) -> Self {
        self.move_amount = move_amount;
        self
    }

    /// Sets the target-scale floor.
    #[must_use]
    pub fn with_min_scale(mut self, min_scale: f64) -> Self {
        self.min_scale = min_scale;
        self
    }

    /// Sets the animation tick period.
    #[must_use]
    pub fn with_tick_period(mut self, tick_period: Duration) -> Self {
        self.tick_period = tick_period;
        self
    }

    /// Sets the fit mode.
    #[must_use]
    pub fn with_fit_mode(mut self, fit_mode: FitMode) -> Self {
        self.fit_mode = fit_mode;
        self
    }

    /// Sets the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the palette.
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Step sizes for the gesture controller.
    #[must_use]
    pub fn gestures(&self) -> GestureConfig {
        GestureConfig {
            zoom_step: self.zoom_step,
            move_amount: self.move_amount,
        }
    }

    /// Smoothing clamped to `(0, 1]`; out-of-range values use the default.
    pub(crate) fn effective_smoothing(&self) -> f64 {
        debug_assert!(
            self.smoothing > 0.0 && self.smoothing <= 1.0,
            "smoothing must be in (0, 1], got {}",
            self.smoothing
        );
        if self.smoothing > 0.0 && self.smoothing <= 1.0 {
            self.smoothing
        } else {
            DEFAULT_SMOOTHING
        }
    }
}
