// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use cellscope_grid::{CellGrid, CellIndex, GridSize};
use cellscope_render::{CellDraw, Palette, render, visible_cells};
use cellscope_view2d::{DEFAULT_CELL_SIZE, GridViewport};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use rand::SeedableRng;
use rand::rngs::SmallRng;

const PANEL: Size = Size::new(1280.0, 720.0);

fn random_grid(side: usize, seed: u64) -> CellGrid {
    let mut grid = CellGrid::new(GridSize::new(side, side)).unwrap();
    grid.randomize(&mut SmallRng::seed_from_u64(seed));
    grid
}

fn placed(grid: &CellGrid, scale: f64) -> GridViewport {
    let mut view = GridViewport::new(grid.size(), DEFAULT_CELL_SIZE);
    view.set_target_zoom(scale - 1.0);
    // Park the panel somewhere in the middle so culling has work on all sides.
    view.set_target_pan(Vec2::new(-1_000.0 * scale, -600.0 * scale));
    view.snap_to_target();
    view
}

fn bench_visible_cells(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/visible_cells");

    // Hypothesis: cost tracks the number of visible cells, not the grid area.
    for side in [64usize, 512, 4_096] {
        let grid = random_grid(side, 7);
        for scale in [0.25, 1.0, 4.0] {
            let view = placed(&grid, scale);
            let visible = view.visible_cell_range(PANEL).len();
            group.throughput(Throughput::Elements(visible as u64));

            group.bench_with_input(
                BenchmarkId::new(format!("side_{side}"), format!("scale_{scale}")),
                &view,
                |b, view| {
                    b.iter(|| {
                        let alive = visible_cells(&grid, view, PANEL, &Palette::default())
                            .filter(|d| d.alive)
                            .count();
                        black_box(alive);
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_render_into_vec(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/vec_sink");
    let grid = random_grid(1_024, 11);

    for scale in [0.25, 1.0] {
        let view = placed(&grid, scale);
        let mut out: Vec<CellDraw> = Vec::new();
        group.bench_with_input(BenchmarkId::from_parameter(scale), &view, |b, view| {
            b.iter(|| {
                out.clear();
                black_box(render(&grid, view, PANEL, &Palette::default(), &mut out));
            });
        });
    }

    group.finish();
}

fn bench_screen_to_grid(c: &mut Criterion) {
    let grid = random_grid(512, 3);
    let view = placed(&grid, 1.7);
    let points: Vec<Point> = (0..1_024)
        .map(|i| Point::new(f64::from(i % 64) * 20.0, f64::from(i / 64) * 45.0))
        .collect();

    c.bench_function("view2d/screen_to_grid", |b| {
        b.iter(|| {
            let mut hits = 0_usize;
            for &p in &points {
                if let Some(CellIndex { row, col }) = view.screen_to_grid(black_box(p)) {
                    hits += row ^ col;
                }
            }
            black_box(hits);
        });
    });
}

criterion_group!(
    benches,
    bench_visible_cells,
    bench_render_into_vec,
    bench_screen_to_grid
);
criterion_main!(benches);
