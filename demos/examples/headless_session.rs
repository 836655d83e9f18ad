// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless viewer session.
//!
//! Drive a `GridViewer` with a scripted sequence of host events, advance the
//! animation clock in 16 ms frames, and print the frames a host would paint
//! as text. Set `RUST_LOG=trace` to see every gesture and animation step.
//!
//! Run:
//! - `cargo run -p cellscope_demos --example headless_session`

use std::time::Duration;

use cellscope::{GridViewer, Key, PointerButton, ViewerConfig};
use cellscope_demos::{AsciiCanvas, init_tracing};
use cellscope_grid::CellGrid;
use kurbo::{Point, Size};

const FRAME: Duration = Duration::from_millis(16);
const PANEL: Size = Size::new(480.0, 320.0);

/// One host event, followed by some idle frames.
enum Step {
    Resize(Size),
    Click(f64, f64),
    Wheel(f64),
    Press(Key),
    Drag(PointerButton, [(f64, f64); 4]),
}

fn glider() -> CellGrid {
    let rows = [
        [false, true, false, false, false, false, false, false],
        [false, false, true, false, false, false, false, false],
        [true, true, true, false, false, false, false, false],
        [false, false, false, false, false, false, false, false],
        [false, false, false, false, false, false, false, false],
        [false, false, false, false, false, false, false, false],
    ];
    CellGrid::from_rows(rows).expect("glider pattern is rectangular")
}

fn main() {
    init_tracing();

    let config = ViewerConfig::default().with_seed(2025);
    let mut viewer = GridViewer::new(glider(), config);
    let mut canvas = AsciiCanvas::new(PANEL, Size::new(20.0, 40.0));

    let script = [
        ("fit to panel", Step::Resize(PANEL)),
        ("toggle a cell", Step::Click(300.0, 20.0)),
        ("zoom in", Step::Wheel(-1.0)),
        ("zoom in", Step::Wheel(-1.0)),
        (
            "pan with the secondary button",
            Step::Drag(
                PointerButton::Secondary,
                [(200.0, 200.0), (180.0, 190.0), (150.0, 180.0), (120.0, 170.0)],
            ),
        ),
        (
            "paint with the auxiliary button",
            Step::Drag(
                PointerButton::Auxiliary,
                [(30.0, 300.0), (90.0, 300.0), (150.0, 300.0), (210.0, 300.0)],
            ),
        ),
        ("nudge right", Step::Press(Key::ArrowRight)),
        ("back to fit", Step::Press(Key::Home)),
        ("randomize", Step::Press(Key::Character('f'))),
    ];

    for (label, step) in script {
        match step {
            Step::Resize(size) => {
                viewer.on_resize(size);
            }
            Step::Click(x, y) => {
                viewer.on_pointer_down(PointerButton::Primary, Point::new(x, y));
                viewer.on_pointer_up(PointerButton::Primary);
            }
            Step::Wheel(rotation) => {
                viewer.on_wheel(rotation);
            }
            Step::Press(key) => {
                viewer.on_key(key);
            }
            Step::Drag(button, path) => {
                let (x, y) = path[0];
                viewer.on_pointer_down(button, Point::new(x, y));
                for &(x, y) in &path[1..] {
                    viewer.on_pointer_move(Point::new(x, y));
                    viewer.advance(FRAME);
                }
                viewer.on_pointer_up(button);
            }
        }

        // Let the animation settle before showing the result.
        let mut frames = 0;
        while viewer.is_animating() && frames < 120 {
            viewer.advance(FRAME);
            frames += 1;
        }

        if viewer.take_redraw() {
            let drawn = viewer.render(&mut canvas);
            let view = viewer.viewport();
            tracing::info!(
                step = label,
                frames,
                drawn,
                alive = viewer.grid().count_alive(),
                "frame painted"
            );
            println!(
                "== {label}: scale {:.2}, offset ({:.0}, {:.0}) ==",
                view.scale(),
                view.offset().x,
                view.offset().y
            );
            println!("{canvas}");
        }
    }

    viewer.shutdown();
}
