// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `cellscope_grid` crate.
//!
//! These exercise the whole-grid operations and the properties callers rely
//! on: toggling is self-inverse, clearing leaves nothing alive, and
//! randomization is driven entirely by the supplied RNG.

use cellscope_grid::{CellGrid, CellIndex, GridSize};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn all_cells(size: GridSize) -> impl Iterator<Item = CellIndex> {
    (0..size.rows).flat_map(move |row| (0..size.cols).map(move |col| CellIndex::new(row, col)))
}

#[test]
fn toggle_twice_restores_every_cell() {
    let mut grid = CellGrid::from_rows([
        [true, false, false, true],
        [false, false, true, true],
        [true, true, true, false],
    ])
    .unwrap();
    let before = grid.clone();

    for cell in all_cells(grid.size()) {
        let original = grid.get(cell).unwrap();
        assert_eq!(grid.toggle(cell), Ok(!original));
        assert_eq!(grid.toggle(cell), Ok(original));
    }

    assert_eq!(grid.as_slice(), before.as_slice());
    // Each toggle is a real change.
    assert_eq!(grid.revision(), 2 * 12);
}

#[test]
fn clear_then_every_read_is_false() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut grid = CellGrid::new(GridSize::new(16, 9)).unwrap();
    grid.randomize(&mut rng);
    grid.clear();

    for cell in all_cells(grid.size()) {
        assert_eq!(grid.get(cell), Some(false));
    }
    // Repeated reads are stable.
    for cell in all_cells(grid.size()) {
        assert_eq!(grid.get(cell), Some(false));
    }
}

#[test]
fn randomize_is_deterministic_for_a_seed() {
    let size = GridSize::new(32, 32);
    let mut a = CellGrid::new(size).unwrap();
    let mut b = CellGrid::new(size).unwrap();

    a.randomize(&mut StdRng::seed_from_u64(42));
    b.randomize(&mut StdRng::seed_from_u64(42));

    assert_eq!(a.as_slice(), b.as_slice());
}

#[test]
fn randomize_produces_a_mixture() {
    let mut grid = CellGrid::new(GridSize::new(32, 32)).unwrap();
    grid.randomize(&mut StdRng::seed_from_u64(1));

    // 1024 fair coin flips; all-equal outcomes are astronomically unlikely.
    let alive = grid.count_alive();
    assert!(alive > 0 && alive < 1024, "alive = {alive}");
    assert_eq!(grid.revision(), 1);
}

#[test]
fn size_accessors_match_construction() {
    let grid = CellGrid::new(GridSize::new(3, 7)).unwrap();
    assert_eq!(grid.rows(), 3);
    assert_eq!(grid.cols(), 7);
    assert_eq!(grid.as_slice().len(), 21);
    assert!(grid.contains(CellIndex::new(2, 6)));
    assert!(!grid.contains(CellIndex::new(3, 6)));
}
