// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Toolkit-neutral input vocabulary.
//!
//! Hosts translate their native events into these types before handing them
//! to [`crate::GestureController`].

use bitflags::bitflags;

/// Pointer button, named by role rather than physical position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Usually the left button. Toggles the cell under the pointer.
    Primary,
    /// Usually the right button. Drags the view.
    Secondary,
    /// Usually the middle button. Paints cells on while dragging.
    Auxiliary,
}

/// Keys the controller understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Home.
    Home,
    /// A printable character.
    Character(char),
}

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Move the content right (view pans left): left arrow or `A`.
    PanLeft,
    /// Move the content left: right arrow or `D`.
    PanRight,
    /// Move the content down: up arrow or `W`.
    PanUp,
    /// Move the content up: down arrow or `S`.
    PanDown,
    /// Fit the grid to the panel: Home.
    Reset,
    /// Turn every cell off: `R`.
    Clear,
    /// Fill the grid randomly: `F`.
    Randomize,
}

impl KeyAction {
    /// Maps a key to its action; letters are case-insensitive.
    #[must_use]
    pub fn from_key(key: Key) -> Option<Self> {
        Some(match key {
            Key::ArrowLeft => Self::PanLeft,
            Key::ArrowRight => Self::PanRight,
            Key::ArrowUp => Self::PanUp,
            Key::ArrowDown => Self::PanDown,
            Key::Home => Self::Reset,
            Key::Character(c) => match c.to_ascii_lowercase() {
                'a' => Self::PanLeft,
                'd' => Self::PanRight,
                'w' => Self::PanUp,
                's' => Self::PanDown,
                'r' => Self::Clear,
                'f' => Self::Randomize,
                _ => return None,
            },
        })
    }
}

bitflags! {
    /// What an input event changed.
    ///
    /// Hosts typically redraw when the set is non-empty.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Changes: u8 {
        /// Grid contents changed.
        const GRID = 1 << 0;
        /// A viewport target moved (or the panel was resized).
        const VIEW = 1 << 1;
        /// A drag gesture began or ended.
        const DRAG = 1 << 2;
    }
}
