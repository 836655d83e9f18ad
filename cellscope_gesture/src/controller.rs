// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use cellscope_grid::CellGrid;
use cellscope_view2d::GridViewport;
use kurbo::{Point, Size, Vec2};
use rand::Rng;

use crate::drag::{DragMode, DragState};
use crate::input::{Changes, Key, KeyAction, PointerButton};

/// Step sizes used by the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    /// Target-scale change per wheel notch.
    pub zoom_step: f64,
    /// Target-offset change per directional key press, in screen units.
    pub move_amount: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            zoom_step: 0.1,
            move_amount: 20.0,
        }
    }
}

/// Interprets pointer and keyboard input as grid edits or viewport moves.
///
/// The controller owns only transient gesture state. Every handler borrows
/// the grid and/or viewport it acts on and returns the [`Changes`] it made.
/// Pointer positions are resolved through the viewport's *current* transform.
#[derive(Debug, Clone, Default)]
pub struct GestureController {
    config: GestureConfig,
    drag: DragState,
}

impl GestureController {
    /// Creates an idle controller.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            drag: DragState::default(),
        }
    }

    /// Step sizes in use.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Current drag state.
    #[must_use]
    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    /// Returns `true` while the secondary button drags the view.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.drag.is_panning()
    }

    /// Returns `true` while the auxiliary button paints cells.
    #[must_use]
    pub fn is_painting(&self) -> bool {
        self.drag.is_painting()
    }

    /// Handles a button press at screen position `pos`.
    ///
    /// - Primary toggles the cell under the pointer; outside the grid nothing
    ///   happens.
    /// - Secondary begins a pan.
    /// - Auxiliary begins a paint stroke.
    pub fn on_pointer_down(
        &mut self,
        button: PointerButton,
        pos: Point,
        grid: &mut CellGrid,
        view: &GridViewport,
    ) -> Changes {
        match button {
            PointerButton::Primary => {
                let Some(cell) = view.screen_to_grid(pos) else {
                    return Changes::empty();
                };
                match grid.toggle(cell) {
                    Ok(_value) => {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(
                            row = cell.row,
                            col = cell.col,
                            value = _value,
                            "toggled cell"
                        );
                        Changes::GRID
                    }
                    Err(_) => Changes::empty(),
                }
            }
            PointerButton::Secondary => self.begin_drag(DragMode::Pan, pos),
            PointerButton::Auxiliary => self.begin_drag(DragMode::Paint, pos),
        }
    }

    /// Handles a button release. Only the button that owns the active drag
    /// ends it.
    pub fn on_pointer_up(&mut self, button: PointerButton) -> Changes {
        let mode = match button {
            PointerButton::Primary => return Changes::empty(),
            PointerButton::Secondary => DragMode::Pan,
            PointerButton::Auxiliary => DragMode::Paint,
        };
        if self.drag.end(mode) {
            #[cfg(feature = "tracing")]
            tracing::trace!(?mode, "drag ended");
            Changes::DRAG
        } else {
            Changes::empty()
        }
    }

    /// Handles pointer motion.
    ///
    /// While panning, the movement since the last position is added to the
    /// view's offset target. While painting, the cell under the pointer is
    /// forced on.
    pub fn on_pointer_move(
        &mut self,
        pos: Point,
        grid: &mut CellGrid,
        view: &mut GridViewport,
    ) -> Changes {
        match self.drag.update(pos) {
            Some((DragMode::Pan, delta)) => {
                if delta == Vec2::ZERO {
                    return Changes::empty();
                }
                view.set_target_pan(delta);
                Changes::VIEW
            }
            Some((DragMode::Paint, _)) => match view.screen_to_grid(pos) {
                Some(cell) if grid.set(cell, true) == Ok(true) => Changes::GRID,
                _ => Changes::empty(),
            },
            None => Changes::empty(),
        }
    }

    /// Handles a wheel rotation: negative zooms in, anything else zooms out.
    pub fn on_wheel(&mut self, rotation: f64, view: &mut GridViewport) -> Changes {
        if !rotation.is_finite() {
            return Changes::empty();
        }
        let delta = if rotation < 0.0 {
            self.config.zoom_step
        } else {
            -self.config.zoom_step
        };
        if view.set_target_zoom(delta) {
            Changes::VIEW
        } else {
            Changes::empty()
        }
    }

    /// Handles a key press.
    ///
    /// Directional keys nudge the offset target by
    /// [`GestureConfig::move_amount`], Home refits the view, `R` clears the
    /// grid and `F` fills it from `rng`. Unmapped keys are ignored.
    pub fn on_key<R: Rng + ?Sized>(
        &mut self,
        key: Key,
        grid: &mut CellGrid,
        view: &mut GridViewport,
        rng: &mut R,
    ) -> Changes {
        let Some(action) = KeyAction::from_key(key) else {
            return Changes::empty();
        };
        let step = self.config.move_amount;
        match action {
            KeyAction::PanLeft => Self::pan(view, Vec2::new(step, 0.0)),
            KeyAction::PanRight => Self::pan(view, Vec2::new(-step, 0.0)),
            KeyAction::PanUp => Self::pan(view, Vec2::new(0.0, step)),
            KeyAction::PanDown => Self::pan(view, Vec2::new(0.0, -step)),
            KeyAction::Reset => {
                view.reset_to_fit();
                Changes::VIEW
            }
            KeyAction::Clear => {
                let before = grid.revision();
                grid.clear();
                if grid.revision() == before {
                    Changes::empty()
                } else {
                    Changes::GRID
                }
            }
            KeyAction::Randomize => {
                grid.randomize(rng);
                Changes::GRID
            }
        }
    }

    /// Handles a panel resize: records the new size and refits the view.
    pub fn on_resize(&mut self, size: Size, view: &mut GridViewport) -> Changes {
        view.set_panel_size(size);
        view.reset_to_fit();
        #[cfg(feature = "tracing")]
        tracing::debug!(
            width = size.width,
            height = size.height,
            target_scale = view.target_scale(),
            "panel resized"
        );
        Changes::VIEW
    }

    /// Abandons any drag, for example when the host loses pointer capture.
    pub fn cancel(&mut self) -> Changes {
        if self.drag.is_dragging() {
            self.drag.cancel();
            Changes::DRAG
        } else {
            Changes::empty()
        }
    }

    fn begin_drag(&mut self, mode: DragMode, pos: Point) -> Changes {
        self.drag.start(mode, pos);
        #[cfg(feature = "tracing")]
        tracing::trace!(?mode, x = pos.x, y = pos.y, "drag started");
        Changes::DRAG
    }

    fn pan(view: &mut GridViewport, delta: Vec2) -> Changes {
        view.set_target_pan(delta);
        Changes::VIEW
    }
}
