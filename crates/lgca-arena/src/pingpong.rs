//! Double-buffered ping-pong lattice orchestrator.
//!
//! [`LatticePair`] owns two same-shaped lattices that alternate between the
//! "active" role (current state, read by propagation) and the "buffer" role
//! (write target of propagation). On [`LatticePair::swap`] the buffer becomes
//! active and the old active lattice becomes the next buffer.
//!
//! The lifecycle per step is:
//! 1. `split_mut()`: borrow active + buffer for propagation
//! 2. `swap()`: flip roles, advance generation
//! 3. `active_mut()`: collision resolution in place
//! 4. `frame()`: borrow the active lattice as a [`Frame`]

use lgca_core::{Shape, StepId};

use crate::lattice::Lattice;
use crate::read::Frame;

/// Two lattices with an explicit, swappable active/buffer assignment.
///
/// # Buffer layout
///
/// ```text
/// lattice_a  ←─── active (even generations) / buffer (odd)
/// lattice_b  ←─── buffer (even generations) / active (odd)
/// ```
#[derive(Clone, Debug)]
pub struct LatticePair {
    lattice_a: Lattice,
    lattice_b: Lattice,
    /// Which lattice is currently active (false = A active, true = B active).
    b_is_active: bool,
    /// Number of swaps since construction or reset.
    generation: u64,
}

impl LatticePair {
    /// Create two zero-filled lattices of the same shape. A starts active.
    pub fn new(shape: Shape) -> Self {
        Self {
            lattice_a: Lattice::new(shape),
            lattice_b: Lattice::new(shape),
            b_is_active: false,
            generation: 0,
        }
    }

    /// Shape shared by both lattices.
    pub fn shape(&self) -> Shape {
        self.lattice_a.shape()
    }

    /// The active lattice.
    pub fn active(&self) -> &Lattice {
        if self.b_is_active {
            &self.lattice_b
        } else {
            &self.lattice_a
        }
    }

    /// The active lattice, mutably.
    pub fn active_mut(&mut self) -> &mut Lattice {
        if self.b_is_active {
            &mut self.lattice_b
        } else {
            &mut self.lattice_a
        }
    }

    /// The buffer (write-target) lattice.
    pub fn buffer(&self) -> &Lattice {
        if self.b_is_active {
            &self.lattice_a
        } else {
            &self.lattice_b
        }
    }

    /// The buffer lattice, mutably.
    pub fn buffer_mut(&mut self) -> &mut Lattice {
        if self.b_is_active {
            &mut self.lattice_a
        } else {
            &mut self.lattice_b
        }
    }

    /// Borrow both lattices at once as `(active, buffer)`.
    pub fn split_mut(&mut self) -> (&mut Lattice, &mut Lattice) {
        if self.b_is_active {
            (&mut self.lattice_b, &mut self.lattice_a)
        } else {
            (&mut self.lattice_a, &mut self.lattice_b)
        }
    }

    /// Flip roles: the buffer becomes active, the active lattice becomes
    /// the buffer. No cell data is copied or cleared.
    pub fn swap(&mut self) {
        self.b_is_active = !self.b_is_active;
        self.generation += 1;
    }

    /// Whether lattice B currently holds the active role.
    pub fn b_is_active(&self) -> bool {
        self.b_is_active
    }

    /// Swaps performed since construction or the last reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Zero both lattices and return A to the active role.
    pub fn reset(&mut self) {
        self.lattice_a.clear();
        self.lattice_b.clear();
        self.b_is_active = false;
        self.generation = 0;
    }

    /// Read-only view of the active lattice, tagged with `step_id`.
    pub fn frame(&self, step_id: StepId) -> Frame<'_> {
        Frame::new(self.active(), step_id, self.generation)
    }
}
