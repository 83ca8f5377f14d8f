//! Core abstraction trait for reading a published frame.

use crate::cell::Cell;
use crate::id::{Shape, StepId};

/// Read-only access to one lattice frame.
///
/// Decouples frame consumers (exporters, hashing, density maps) from the
/// arena that owns the storage.
pub trait FrameAccess {
    /// Dimensions of the frame.
    fn shape(&self) -> Shape;

    /// All cells in row-major order. Length is `shape().cell_count()`.
    fn cells(&self) -> &[Cell];

    /// The step at which this frame was produced.
    fn step_id(&self) -> StepId;

    /// Cell at `(row, col)`, or `None` if out of bounds.
    fn cell(&self, row: u32, col: u32) -> Option<Cell> {
        let shape = self.shape();
        if shape.contains(row, col) {
            Some(self.cells()[shape.index(row, col)])
        } else {
            None
        }
    }

    /// Total number of particles in the frame.
    fn particle_count(&self) -> u64 {
        self.cells()
            .iter()
            .map(|c| u64::from(c.particle_count()))
            .sum()
    }
}
