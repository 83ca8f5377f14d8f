//! Shared shape validation for the phases.

use lgca_arena::Lattice;
use lgca_core::PropagatorError;
use lgca_space::Torus2D;

/// Reject `lattice` unless it has exactly the topology's shape.
pub(crate) fn ensure_shape(space: &Torus2D, lattice: &Lattice) -> Result<(), PropagatorError> {
    if lattice.shape() != space.shape() {
        return Err(PropagatorError::ShapeMismatch {
            expected: space.shape(),
            found: lattice.shape(),
        });
    }
    Ok(())
}
