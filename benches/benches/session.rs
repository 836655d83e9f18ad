// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Duration;

use cellscope::{GridViewer, Key, PointerButton, ViewerConfig};
use cellscope_grid::GridSize;
use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};

const FRAME: Duration = Duration::from_millis(16);

fn fitted(side: usize) -> GridViewer {
    let mut viewer =
        GridViewer::with_size(GridSize::new(side, side), ViewerConfig::default()).unwrap();
    viewer.on_resize(Size::new(1280.0, 720.0));
    viewer
}

fn bench_scripted_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewer/session");

    // One second of input and animation: a paint stroke, a pan, some zoom.
    for side in [32usize, 256] {
        group.bench_function(BenchmarkId::from_parameter(side), |b| {
            b.iter_batched(
                || fitted(side),
                |mut viewer| {
                    viewer.on_pointer_down(PointerButton::Auxiliary, Point::new(5.0, 5.0));
                    for i in 0..60 {
                        let t = f64::from(i);
                        viewer.on_pointer_move(Point::new(5.0 + t * 9.0, 5.0 + t * 4.0));
                        if i % 10 == 0 {
                            viewer.on_wheel(-1.0);
                        }
                        if i % 15 == 0 {
                            viewer.on_key(Key::ArrowLeft);
                        }
                        viewer.advance(FRAME);
                    }
                    viewer.on_pointer_up(PointerButton::Auxiliary);
                    black_box(viewer.take_redraw());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_randomize(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewer/randomize");

    for side in [64usize, 512, 2_048] {
        let mut viewer = fitted(side);
        group.bench_function(BenchmarkId::from_parameter(side), |b| {
            b.iter(|| {
                viewer.on_key(Key::Character('f'));
                black_box(viewer.grid().revision());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scripted_session, bench_randomize);
criterion_main!(benches);
