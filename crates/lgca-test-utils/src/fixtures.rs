//! Reusable lattice fixtures.
//!
//! - [`lattice_from_rows`]: literal raw values, one slice per row.
//! - [`pair_from_rows`]: same, loaded into the active side of a pair.
//! - [`single_particle`]: one particle on an otherwise empty lattice.
//! - [`checkerboard`]: alternating cells, for collision-heavy runs.

use lgca_arena::{Lattice, LatticePair};
use lgca_core::{Cell, Direction, Shape};

/// Build a lattice from literal rows of raw cell values.
///
/// # Panics
///
/// Panics if `rows` is empty or ragged.
pub fn lattice_from_rows(rows: &[&[u8]]) -> Lattice {
    assert!(!rows.is_empty(), "fixture needs at least one row");
    let cols = rows[0].len();
    assert!(rows.iter().all(|r| r.len() == cols), "ragged fixture rows");
    let shape = Shape::new(rows.len() as u32, cols as u32);
    let cells = rows
        .iter()
        .flat_map(|r| r.iter().map(|&b| Cell::from_bits(b)))
        .collect();
    Lattice::from_cells(shape, cells).expect("fixture length matches shape")
}

/// A pair whose active lattice holds `rows` and whose buffer is empty.
pub fn pair_from_rows(rows: &[&[u8]]) -> LatticePair {
    let src = lattice_from_rows(rows);
    let mut pair = LatticePair::new(src.shape());
    pair.active_mut().cells_mut().copy_from_slice(src.cells());
    pair
}

/// An empty lattice with one particle at `(row, col)` moving in `dir`.
pub fn single_particle(shape: Shape, row: u32, col: u32, dir: Direction) -> Lattice {
    let mut lattice = Lattice::new(shape);
    lattice
        .set(row, col, Cell::EMPTY.with(dir))
        .expect("fixture coordinate in bounds");
    lattice
}

/// Alternate `a` and `b` in a checkerboard pattern.
pub fn checkerboard(shape: Shape, a: Cell, b: Cell) -> Lattice {
    let mut lattice = Lattice::new(shape);
    for r in 0..shape.rows {
        for c in 0..shape.cols {
            let cell = if (r + c) % 2 == 0 { a } else { b };
            lattice.set(r, c, cell).expect("in bounds");
        }
    }
    lattice
}
