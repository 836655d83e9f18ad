// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state: which drag gesture is active and where the pointer was last seen.
//!
//! ## Usage
//!
//! 1) Begin a drag with [`DragState::start`], naming the [`DragMode`].
//! 2) On each move event, call [`DragState::update`] to get the mode and the
//!    movement delta since the last update.
//! 3) End the drag with [`DragState::end`]; only the matching mode ends it.
//!
//! A single optional mode makes panning and painting mutually exclusive:
//! starting one replaces the other.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use cellscope_gesture::drag::{DragMode, DragState};
//!
//! let mut drag = DragState::default();
//!
//! drag.start(DragMode::Pan, Point::new(10.0, 20.0));
//! assert!(drag.is_panning());
//!
//! let moved = drag.update(Point::new(15.0, 25.0));
//! assert_eq!(moved, Some((DragMode::Pan, Vec2::new(5.0, 5.0))));
//!
//! // Releasing the paint button does not end a pan.
//! assert!(!drag.end(DragMode::Paint));
//! assert!(drag.end(DragMode::Pan));
//! assert!(!drag.is_dragging());
//! ```

use kurbo::{Point, Vec2};

/// Kind of drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragMode {
    /// Moving the view: pointer deltas become pan offsets.
    Pan,
    /// Forcing cells under the pointer on.
    Paint,
}

/// Tracks the active drag gesture, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    active: Option<ActiveDrag>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ActiveDrag {
    mode: DragMode,
    start_pos: Point,
    last_pos: Point,
}

impl DragState {
    /// Begins a drag of `mode` at `pos`, replacing any drag in progress.
    pub fn start(&mut self, mode: DragMode, pos: Point) {
        self.active = Some(ActiveDrag {
            mode,
            start_pos: pos,
            last_pos: pos,
        });
    }

    /// Records a new pointer position.
    ///
    /// Returns the active mode and the movement since the previous position,
    /// or `None` when no drag is active.
    pub fn update(&mut self, pos: Point) -> Option<(DragMode, Vec2)> {
        let active = self.active.as_mut()?;
        let delta = pos - active.last_pos;
        active.last_pos = pos;
        Some((active.mode, delta))
    }

    /// Ends the drag if it is of `mode`; returns whether it ended.
    pub fn end(&mut self, mode: DragMode) -> bool {
        if self.mode() == Some(mode) {
            self.active = None;
            true
        } else {
            false
        }
    }

    /// Ends whatever drag is active.
    pub fn cancel(&mut self) {
        self.active = None;
    }

    /// The active drag mode.
    #[must_use]
    pub fn mode(&self) -> Option<DragMode> {
        self.active.map(|a| a.mode)
    }

    /// Returns `true` while any drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Returns `true` while a pan drag is active.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.mode() == Some(DragMode::Pan)
    }

    /// Returns `true` while a paint drag is active.
    #[must_use]
    pub fn is_painting(&self) -> bool {
        self.mode() == Some(DragMode::Paint)
    }

    /// Last recorded pointer position of the active drag.
    #[must_use]
    pub fn last_pos(&self) -> Option<Point> {
        self.active.map(|a| a.last_pos)
    }

    /// Offset from the drag's start position to `current_pos`.
    #[must_use]
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.active.map(|a| current_pos - a.start_pos)
    }
}
