// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-style sweeps over the `cellscope_view2d` viewport.
//!
//! These walk a coarse lattice of scales and offsets (both signs, zoomed in
//! and out) and check the invariants hosts depend on.

use cellscope_grid::GridSize;
use cellscope_view2d::{CellRange, DEFAULT_CELL_SIZE, GridViewport};
use kurbo::{Size, Vec2};

const SCALES: [f64; 7] = [0.11, 0.25, 0.5, 1.0, 1.7, 4.0, 10.0];
const OFFSETS: [f64; 7] = [-5_000.0, -733.0, -49.5, 0.0, 12.25, 480.0, 9_000.0];

fn placed(size: GridSize, scale: f64, offset: Vec2) -> GridViewport {
    let mut vp = GridViewport::new(size, DEFAULT_CELL_SIZE);
    vp.set_target_zoom(scale - 1.0);
    vp.set_target_pan(offset);
    vp.snap_to_target();
    vp
}

#[test]
fn visible_range_stays_within_grid() {
    let size = GridSize::new(37, 23);
    let panels = [Size::new(1.0, 1.0), Size::new(640.0, 480.0), Size::new(4096.0, 64.0)];
    for &scale in &SCALES {
        for &ox in &OFFSETS {
            for &oy in &OFFSETS {
                let vp = placed(size, scale, Vec2::new(ox, oy));
                for &panel in &panels {
                    let range = vp.visible_cell_range(panel);
                    assert!(range.rows.start <= range.rows.end);
                    assert!(range.cols.start <= range.cols.end);
                    assert!(range.rows.end <= size.rows, "{range:?}");
                    assert!(range.cols.end <= size.cols, "{range:?}");
                }
            }
        }
    }
}

#[test]
fn visible_range_covers_every_cell_on_panel() {
    let size = GridSize::new(20, 20);
    let panel = Size::new(300.0, 200.0);
    for &scale in &SCALES {
        for &ox in &OFFSETS {
            let vp = placed(size, scale, Vec2::new(ox, -ox / 3.0));
            let range = vp.visible_cell_range(panel);
            for cell in CellRange::new(0..size.rows, 0..size.cols).iter() {
                let rect = vp.cell_screen_rect(cell);
                let on_panel =
                    rect.x1 > 0.0 && rect.x0 < panel.width && rect.y1 > 0.0 && rect.y0 < panel.height;
                if on_panel {
                    assert!(range.contains(cell), "{cell:?} missing from {range:?}");
                }
            }
        }
    }
}

#[test]
fn screen_to_grid_round_trips_every_cell() {
    let size = GridSize::new(12, 9);
    for &scale in &SCALES {
        for &ox in &OFFSETS {
            for &oy in &OFFSETS {
                let vp = placed(size, scale, Vec2::new(ox, oy));
                for cell in CellRange::new(0..size.rows, 0..size.cols).iter() {
                    assert_eq!(vp.screen_to_grid(vp.grid_to_screen(cell)), Some(cell));
                }
            }
        }
    }
}

#[test]
fn ticking_converges_for_scale_and_offsets() {
    let mut vp = GridViewport::new(GridSize::new(10, 10), DEFAULT_CELL_SIZE);
    vp.set_target_zoom(2.5);
    vp.set_target_pan(Vec2::new(-340.0, 95.0));
    for _ in 0..100 {
        vp.tick(0.1);
    }
    assert!((vp.scale() - 3.5).abs() < 0.01);
    assert!((vp.offset().x + 340.0).abs() < 0.01);
    assert!((vp.offset().y - 95.0).abs() < 0.01);
    assert!(vp.is_settled(0.01));
}

#[test]
fn fit_scenario_from_resize() {
    let mut vp = GridViewport::new(GridSize::new(10, 10), DEFAULT_CELL_SIZE);
    vp.set_panel_size(Size::new(600.0, 600.0));
    assert!(vp.reset_to_fit());
    assert!((vp.target_scale() - 1.2).abs() < 1e-12);
    for _ in 0..100 {
        vp.tick(0.1);
    }
    assert!((vp.scale() - 1.2).abs() < 1e-4);
}
