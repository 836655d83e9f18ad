// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewer configuration from JSON.
//!
//! `ViewerConfig` derives serde traits behind the `serde` feature. Fields left
//! out of the document keep their defaults.
//!
//! Run:
//! - `cargo run -p cellscope_demos --example config_json`

use std::time::Duration;

use cellscope::{GridViewer, ViewerConfig};
use cellscope_grid::GridSize;
use kurbo::Size;

fn main() {
    let json = r#"{ "smoothing": 0.25, "zoom_step": 0.2, "seed": 7 }"#;
    let config: ViewerConfig = serde_json::from_str(json).expect("valid viewer config");
    println!("loaded: {config:#?}");

    let mut viewer = GridViewer::with_size(GridSize::new(12, 12), config).expect("non-empty grid");
    viewer.on_resize(Size::new(300.0, 300.0));

    // With smoothing 0.25 the fit settles in far fewer frames than the default.
    let mut frames = 0;
    while viewer.is_animating() {
        viewer.advance(Duration::from_millis(16));
        frames += 1;
    }
    println!(
        "settled at scale {:.3} after {frames} frames",
        viewer.viewport().scale()
    );

    let round_trip = serde_json::to_string_pretty(&config).expect("config serializes");
    println!("{round_trip}");
}
