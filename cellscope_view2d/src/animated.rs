// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A scalar that eases from its current value toward a target.
///
/// Each [`Animated::tick`] closes a fixed fraction of the remaining distance,
/// which gives exponential convergence: the current value approaches the target
/// quickly at first and then settles, but never overshoots.
///
/// ```rust
/// use cellscope_view2d::Animated;
///
/// let mut zoom = Animated::new(1.0);
/// zoom.set_target(2.0);
/// zoom.tick(0.5);
/// assert_eq!(zoom.current(), 1.5);
/// zoom.tick(0.5);
/// assert_eq!(zoom.current(), 1.75);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Animated {
    current: f64,
    target: f64,
}

impl Animated {
    /// Creates a settled value: current and target are both `value`.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self {
            current: value,
            target: value,
        }
    }

    /// The value as currently rendered.
    #[must_use]
    pub const fn current(&self) -> f64 {
        self.current
    }

    /// The value being eased toward.
    #[must_use]
    pub const fn target(&self) -> f64 {
        self.target
    }

    /// Sets the target without touching the current value.
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Jumps the current value to the target.
    pub fn snap(&mut self) {
        self.current = self.target;
    }

    /// Moves `current` by `factor` of the remaining distance to `target`.
    ///
    /// `factor` is clamped into `[0, 1]`; `1` jumps straight to the target and
    /// `0` leaves the value untouched. Non-finite factors are ignored.
    pub fn tick(&mut self, factor: f64) {
        if !factor.is_finite() {
            return;
        }
        let factor = factor.clamp(0.0, 1.0);
        self.current += (self.target - self.current) * factor;
    }

    /// Returns `true` once current is within `epsilon` of target.
    #[must_use]
    pub fn is_settled(&self, epsilon: f64) -> bool {
        (self.target - self.current).abs() <= epsilon
    }
}

impl Default for Animated {
    fn default() -> Self {
        Self::new(0.0)
    }
}
