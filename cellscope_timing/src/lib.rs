// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=cellscope_timing --heading-base-level=0

//! Cellscope Timing: a host-agnostic fixed-rate frame clock.
//!
//! [`FrameClock`] turns irregular host time reports into a steady stream of
//! fixed-period ticks (16 ms, roughly 60 Hz, by default). It owns no timer and
//! never sleeps; the host calls [`FrameClock::advance`] with the time elapsed
//! since its last call (from a periodic timer, an animation-frame callback, or
//! a test) and runs one animation step per returned tick.
//!
//! ```rust
//! use core::time::Duration;
//! use cellscope_timing::FrameClock;
//!
//! let mut clock = FrameClock::default();
//!
//! // 40 ms elapsed: two 16 ms ticks are due, 8 ms carry over.
//! assert_eq!(clock.advance(Duration::from_millis(40)), 2);
//! // Another 8 ms completes the third tick.
//! assert_eq!(clock.advance(Duration::from_millis(8)), 1);
//! ```
//!
//! A host that stalls (a backgrounded tab, a debugger pause) would otherwise
//! receive a burst of catch-up ticks. The clock caps the ticks returned by one
//! call at [`FrameClock::max_catch_up`] and drops the rest of the backlog.
//!
//! The clock can be paused and resumed; [`FrameClock::stop`] is terminal and is
//! meant for teardown.
//!
//! This crate is `no_std`.

#![no_std]

use core::time::Duration;

/// Default tick period: 16 ms.
pub const DEFAULT_PERIOD: Duration = Duration::from_millis(16);

/// Default cap on ticks returned from a single [`FrameClock::advance`] call.
pub const DEFAULT_MAX_CATCH_UP: u32 = 4;

/// Lifecycle of a [`FrameClock`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum ClockState {
    /// Ticks are produced as time advances.
    #[default]
    Running,
    /// Time reports are ignored until [`FrameClock::resume`].
    Paused,
    /// Torn down; never ticks again.
    Stopped,
}

/// Fixed-period tick source driven by host-reported elapsed time.
#[derive(Clone, Debug)]
pub struct FrameClock {
    period: Duration,
    accumulated: Duration,
    max_catch_up: u32,
    state: ClockState,
    total_ticks: u64,
}

impl FrameClock {
    /// Creates a running clock ticking every `period`.
    ///
    /// A zero period falls back to [`DEFAULT_PERIOD`].
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self {
            period: if period.is_zero() {
                DEFAULT_PERIOD
            } else {
                period
            },
            accumulated: Duration::ZERO,
            max_catch_up: DEFAULT_MAX_CATCH_UP,
            state: ClockState::Running,
            total_ticks: 0,
        }
    }

    /// Sets the cap on ticks returned by one [`FrameClock::advance`] call.
    ///
    /// Values below one are raised to one.
    #[must_use]
    pub fn with_max_catch_up(mut self, max_catch_up: u32) -> Self {
        self.max_catch_up = max_catch_up.max(1);
        self
    }

    /// Tick period.
    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Cap on ticks returned by one [`FrameClock::advance`] call.
    #[must_use]
    pub fn max_catch_up(&self) -> u32 {
        self.max_catch_up
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> ClockState {
        self.state
    }

    /// Returns `true` while the clock produces ticks.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == ClockState::Running
    }

    /// Total ticks produced since construction.
    #[must_use]
    pub fn total_ticks(&self) -> u64 {
        self.total_ticks
    }

    /// Accounts for `elapsed` host time and returns how many ticks fell due.
    ///
    /// Time that does not complete a tick is carried into the next call. At
    /// most [`FrameClock::max_catch_up`] ticks are returned; any backlog beyond
    /// that is discarded. Paused and stopped clocks return zero and accumulate
    /// nothing.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if self.state != ClockState::Running {
            return 0;
        }
        self.accumulated = self.accumulated.saturating_add(elapsed);

        let mut due = 0;
        while self.accumulated >= self.period {
            if due == self.max_catch_up {
                self.accumulated = Duration::ZERO;
                break;
            }
            self.accumulated -= self.period;
            due += 1;
        }
        self.total_ticks += u64::from(due);
        due
    }

    /// Time remaining until the next tick, or `None` when not running.
    ///
    /// Hosts that schedule one-shot timers can use this as the delay.
    #[must_use]
    pub fn until_next_tick(&self) -> Option<Duration> {
        self.is_running()
            .then(|| self.period.saturating_sub(self.accumulated))
    }

    /// Suspends ticking. Time reported while paused is ignored.
    pub fn pause(&mut self) {
        if self.state == ClockState::Running {
            self.state = ClockState::Paused;
        }
    }

    /// Resumes a paused clock. Has no effect on a stopped clock.
    pub fn resume(&mut self) {
        if self.state == ClockState::Paused {
            self.state = ClockState::Running;
            self.accumulated = Duration::ZERO;
        }
    }

    /// Stops the clock permanently.
    pub fn stop(&mut self) {
        self.state = ClockState::Stopped;
        self.accumulated = Duration::ZERO;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(DEFAULT_PERIOD)
    }
}
