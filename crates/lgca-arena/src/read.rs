//! Read-only frame view of the active lattice.
//!
//! [`Frame`] borrows the active lattice of a [`crate::LatticePair`] and
//! implements [`FrameAccess`]. It is the interface handed to exporters.

use lgca_core::{Cell, FrameAccess, Shape, StepId};

use crate::lattice::Lattice;

/// A read-only view of the active lattice after a step.
///
/// # Lifetime
///
/// `'a` is the borrow of the owning pair. Because the pair is only mutated
/// through `&mut`, no step can run while a frame is alive.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    lattice: &'a Lattice,
    step_id: StepId,
    generation: u64,
}

impl<'a> Frame<'a> {
    pub(crate) fn new(lattice: &'a Lattice, step_id: StepId, generation: u64) -> Self {
        Self {
            lattice,
            step_id,
            generation,
        }
    }

    /// The underlying lattice.
    pub fn lattice(&self) -> &'a Lattice {
        self.lattice
    }

    /// Pair generation (number of buffer swaps) when the frame was taken.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// One row of cells.
    pub fn row(&self, row: u32) -> &'a [Cell] {
        self.lattice.row(row)
    }

    /// Raw cell values as a 2D array, one inner `Vec` per row.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.lattice.to_rows()
    }
}

impl FrameAccess for Frame<'_> {
    fn shape(&self) -> Shape {
        self.lattice.shape()
    }

    fn cells(&self) -> &[Cell] {
        self.lattice.cells()
    }

    fn step_id(&self) -> StepId {
        self.step_id
    }
}
