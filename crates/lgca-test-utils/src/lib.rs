//! Test utilities and mock types for lattice-gas development.
//!
//! Provides lattice fixtures built from literal cell values and a
//! [`MockFrame`] implementation of [`FrameAccess`] for exercising frame
//! consumers without an arena.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{checkerboard, lattice_from_rows, pair_from_rows, single_particle};

use lgca_core::{Cell, FrameAccess, Shape, StepId};

/// Mock implementation of [`FrameAccess`].
///
/// Owns its cells so tests can build arbitrary frames directly.
#[derive(Clone, Debug)]
pub struct MockFrame {
    shape: Shape,
    cells: Vec<Cell>,
    step_id: StepId,
}

impl MockFrame {
    /// Build a frame from literal rows of raw cell values.
    ///
    /// # Panics
    ///
    /// Panics if the rows are ragged.
    pub fn from_rows(rows: &[&[u8]], step_id: StepId) -> Self {
        let lattice = lattice_from_rows(rows);
        Self {
            shape: lattice.shape(),
            cells: lattice.cells().to_vec(),
            step_id,
        }
    }

    /// A frame where every cell has the same value.
    pub fn uniform(shape: Shape, cell: Cell) -> Self {
        Self {
            shape,
            cells: vec![cell; shape.cell_count()],
            step_id: StepId(0),
        }
    }
}

impl FrameAccess for MockFrame {
    fn shape(&self) -> Shape {
        self.shape
    }

    fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn step_id(&self) -> StepId {
        self.step_id
    }
}
