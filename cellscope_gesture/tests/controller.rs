// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for `GestureController`.
//!
//! Each test drives the controller the way a host would: raw button, move,
//! wheel, key, and resize events against a real grid and viewport.

use cellscope_gesture::{Changes, GestureConfig, GestureController, Key, PointerButton};
use cellscope_grid::{CellGrid, CellIndex, GridSize};
use cellscope_view2d::{DEFAULT_CELL_SIZE, GridViewport};
use kurbo::{Point, Size, Vec2};
use rand::SeedableRng;
use rand::rngs::StdRng;

struct Harness {
    grid: CellGrid,
    view: GridViewport,
    gestures: GestureController,
    rng: StdRng,
}

impl Harness {
    fn new(rows: usize, cols: usize) -> Self {
        let grid = CellGrid::new(GridSize::new(rows, cols)).unwrap();
        let view = GridViewport::new(grid.size(), DEFAULT_CELL_SIZE);
        Self {
            grid,
            view,
            gestures: GestureController::default(),
            rng: StdRng::seed_from_u64(9),
        }
    }

    fn down(&mut self, button: PointerButton, x: f64, y: f64) -> Changes {
        self.gestures
            .on_pointer_down(button, Point::new(x, y), &mut self.grid, &self.view)
    }

    fn up(&mut self, button: PointerButton) -> Changes {
        self.gestures.on_pointer_up(button)
    }

    fn move_to(&mut self, x: f64, y: f64) -> Changes {
        self.gestures
            .on_pointer_move(Point::new(x, y), &mut self.grid, &mut self.view)
    }

    fn key(&mut self, key: Key) -> Changes {
        self.gestures
            .on_key(key, &mut self.grid, &mut self.view, &mut self.rng)
    }

    fn cell(&self, row: usize, col: usize) -> bool {
        self.grid.get(CellIndex::new(row, col)).unwrap()
    }
}

#[test]
fn click_toggles_and_second_click_restores() {
    let mut h = Harness::new(4, 4);

    assert_eq!(h.down(PointerButton::Primary, 10.0, 10.0), Changes::GRID);
    assert!(h.cell(0, 0));

    assert_eq!(h.down(PointerButton::Primary, 10.0, 10.0), Changes::GRID);
    assert!(!h.cell(0, 0));
}

#[test]
fn click_outside_grid_is_ignored() {
    let mut h = Harness::new(4, 4);
    assert_eq!(h.down(PointerButton::Primary, -3.0, 10.0), Changes::empty());
    assert_eq!(h.down(PointerButton::Primary, 10.0, 205.0), Changes::empty());
    assert_eq!(h.grid.revision(), 0);
}

#[test]
fn click_mid_animation_hits_what_is_on_screen() {
    let mut h = Harness::new(4, 4);
    // Ask for a big zoom but do not tick: the screen still shows scale 1.
    for _ in 0..5 {
        h.gestures.on_wheel(-1.0, &mut h.view);
    }
    h.down(PointerButton::Primary, 60.0, 10.0);
    assert!(h.cell(0, 1));
}

#[test]
fn secondary_drag_pans_target_by_pointer_delta() {
    let mut h = Harness::new(4, 4);

    assert_eq!(h.down(PointerButton::Secondary, 100.0, 100.0), Changes::DRAG);
    assert!(h.gestures.is_panning());
    assert!(!h.gestures.is_painting());

    assert_eq!(h.move_to(130.0, 90.0), Changes::VIEW);
    assert_eq!(h.move_to(140.0, 95.0), Changes::VIEW);
    assert_eq!(h.view.target_offset(), Vec2::new(40.0, -5.0));
    // Current offset only moves on tick.
    assert_eq!(h.view.offset(), Vec2::ZERO);

    assert_eq!(h.up(PointerButton::Secondary), Changes::DRAG);
    assert!(!h.gestures.is_panning());

    // Moves after release do nothing.
    assert_eq!(h.move_to(500.0, 500.0), Changes::empty());
    assert_eq!(h.view.target_offset(), Vec2::new(40.0, -5.0));
}

#[test]
fn auxiliary_drag_paints_without_toggling() {
    let mut h = Harness::new(4, 4);
    h.grid.set(CellIndex::new(0, 1), true).unwrap();

    assert_eq!(h.down(PointerButton::Auxiliary, 10.0, 10.0), Changes::DRAG);
    assert!(h.gestures.is_painting());
    // Pressing alone does not paint.
    assert!(!h.cell(0, 0));

    assert_eq!(h.move_to(20.0, 10.0), Changes::GRID);
    assert_eq!(h.move_to(60.0, 10.0), Changes::empty());
    assert_eq!(h.move_to(110.0, 10.0), Changes::GRID);
    // Off the grid: silently ignored.
    assert_eq!(h.move_to(900.0, 10.0), Changes::empty());

    assert!(h.cell(0, 0));
    assert!(h.cell(0, 1), "painting never turns cells off");
    assert!(h.cell(0, 2));
    assert_eq!(h.view.target_offset(), Vec2::ZERO);

    assert_eq!(h.up(PointerButton::Auxiliary), Changes::DRAG);
    assert!(!h.gestures.is_painting());
}

#[test]
fn pan_and_paint_are_mutually_exclusive() {
    let mut h = Harness::new(4, 4);

    h.down(PointerButton::Auxiliary, 10.0, 10.0);
    h.down(PointerButton::Secondary, 10.0, 10.0);
    assert!(h.gestures.is_panning());
    assert!(!h.gestures.is_painting());

    // Releasing the paint button does not end the pan.
    assert_eq!(h.up(PointerButton::Auxiliary), Changes::empty());
    assert!(h.gestures.is_panning());

    assert_eq!(h.up(PointerButton::Secondary), Changes::DRAG);
    assert!(!h.gestures.drag().is_dragging());
}

#[test]
fn primary_release_and_cancel() {
    let mut h = Harness::new(4, 4);
    assert_eq!(h.up(PointerButton::Primary), Changes::empty());
    assert_eq!(h.gestures.cancel(), Changes::empty());

    h.down(PointerButton::Secondary, 0.0, 0.0);
    assert_eq!(h.gestures.cancel(), Changes::DRAG);
    assert!(!h.gestures.is_panning());
}

#[test]
fn wheel_direction_and_floor() {
    let mut h = Harness::new(4, 4);

    assert_eq!(h.gestures.on_wheel(-1.0, &mut h.view), Changes::VIEW);
    assert!((h.view.target_scale() - 1.1).abs() < 1e-12);

    // Zero rotation counts as zoom out.
    assert_eq!(h.gestures.on_wheel(0.0, &mut h.view), Changes::VIEW);
    assert!((h.view.target_scale() - 1.0).abs() < 1e-12);

    for _ in 0..50 {
        h.gestures.on_wheel(3.0, &mut h.view);
        assert!(h.view.target_scale() > 0.1);
    }
    assert_eq!(h.gestures.on_wheel(3.0, &mut h.view), Changes::empty());
    assert_eq!(h.gestures.on_wheel(f64::NAN, &mut h.view), Changes::empty());
}

#[test]
fn directional_keys_nudge_target_offset() {
    let mut h = Harness::new(4, 4);

    assert_eq!(h.key(Key::ArrowLeft), Changes::VIEW);
    assert_eq!(h.view.target_offset(), Vec2::new(20.0, 0.0));
    h.key(Key::Character('d'));
    h.key(Key::Character('D'));
    assert_eq!(h.view.target_offset(), Vec2::new(-20.0, 0.0));
    h.key(Key::ArrowUp);
    h.key(Key::Character('w'));
    h.key(Key::ArrowDown);
    assert_eq!(h.view.target_offset(), Vec2::new(-20.0, 20.0));
    h.key(Key::Character('s'));
    assert_eq!(h.view.target_offset(), Vec2::new(-20.0, 0.0));

    assert_eq!(h.key(Key::Character('z')), Changes::empty());
}

#[test]
fn custom_step_sizes() {
    let mut h = Harness::new(4, 4);
    h.gestures = GestureController::new(GestureConfig {
        zoom_step: 0.5,
        move_amount: 7.0,
    });
    h.key(Key::ArrowRight);
    h.gestures.on_wheel(-1.0, &mut h.view);
    assert_eq!(h.view.target_offset(), Vec2::new(-7.0, 0.0));
    assert!((h.view.target_scale() - 1.5).abs() < 1e-12);
}

#[test]
fn home_and_resize_refit() {
    let mut h = Harness::new(10, 10);
    h.key(Key::ArrowLeft);

    assert_eq!(
        h.gestures.on_resize(Size::new(600.0, 600.0), &mut h.view),
        Changes::VIEW
    );
    assert!((h.view.target_scale() - 1.2).abs() < 1e-12);
    assert_eq!(h.view.target_offset(), Vec2::ZERO);

    h.key(Key::ArrowLeft);
    h.gestures.on_wheel(-1.0, &mut h.view);
    assert_eq!(h.key(Key::Home), Changes::VIEW);
    assert!((h.view.target_scale() - 1.2).abs() < 1e-12);
    assert_eq!(h.view.target_offset(), Vec2::ZERO);
}

#[test]
fn clear_and_randomize_keys() {
    let mut h = Harness::new(8, 8);

    // Clearing an already clear grid changes nothing.
    assert_eq!(h.key(Key::Character('r')), Changes::empty());

    assert_eq!(h.key(Key::Character('F')), Changes::GRID);
    assert!(h.grid.count_alive() > 0);

    assert_eq!(h.key(Key::Character('R')), Changes::GRID);
    assert_eq!(h.grid.count_alive(), 0);
}
