//! Streaming (propagation) phase.
//!
//! Every particle moves one cell in the direction it occupies. Reads come
//! exclusively from the active lattice and writes go exclusively to the
//! buffer, so traversal order cannot affect the result.
//!
//! Landing is an OR: if two particles arrive in the same slot of the same
//! cell they collapse into one. This is a limit of the 4-bit encoding, not
//! an error; [`PropagateReport::collapsed`] counts the losses.

use lgca_arena::Lattice;
use lgca_core::{Cell, PropagatorError};
use lgca_space::Torus2D;

use crate::shape_check::ensure_shape;

/// Phase name used in step errors and metrics.
pub const NAME: &str = "propagate";

/// Particle accounting for one [`propagate`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PropagateReport {
    /// Particles read (and removed) from the active lattice.
    pub moved: u64,
    /// Particles already present in the buffer before the pass.
    pub buffer_before: u64,
    /// Particles present in the buffer after the pass.
    pub buffer_after: u64,
}

impl PropagateReport {
    /// Particles lost to OR-collapse, either against another arrival or
    /// against a bit already present in the buffer.
    pub fn collapsed(&self) -> u64 {
        (self.moved + self.buffer_before).saturating_sub(self.buffer_after)
    }
}

/// Move every particle of `active` one cell along its direction into `buffer`.
///
/// For each cell `(y, x)` and each occupied direction `d`, bit `d` is set on
/// the wrapped neighbour in `buffer`:
///
/// | direction | destination |
/// |-----------|-------------|
/// | Up        | `((y-1) mod rows, x)` |
/// | Right     | `(y, (x+1) mod cols)` |
/// | Down      | `((y+1) mod rows, x)` |
/// | Left      | `(y, (x-1) mod cols)` |
///
/// Each source cell of `active` is reset to empty once its particles have
/// been emitted, so `active` is all zeros on return.
///
/// # Errors
///
/// [`PropagatorError::ShapeMismatch`] if either lattice does not match
/// `space`. Checked before any write.
pub fn propagate(
    space: &Torus2D,
    active: &mut Lattice,
    buffer: &mut Lattice,
) -> Result<PropagateReport, PropagatorError> {
    ensure_shape(space, active)?;
    ensure_shape(space, buffer)?;

    let shape = space.shape();
    let buffer_before = buffer.particle_count();
    let mut moved = 0u64;

    let src = active.cells_mut();
    let dst = buffer.cells_mut();
    for (row, col) in space.coords() {
        let idx = shape.index(row, col);
        let cell = src[idx];
        if cell.is_empty() {
            continue;
        }
        for dir in cell.directions() {
            dst[space.neighbour_index(row, col, dir)].set(dir);
        }
        moved += u64::from(cell.particle_count());
        src[idx] = Cell::EMPTY;
    }

    Ok(PropagateReport {
        moved,
        buffer_before,
        buffer_after: buffer.particle_count(),
    })
}
