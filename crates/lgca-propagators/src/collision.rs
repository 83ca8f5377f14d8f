//! Head-on collision phase.
//!
//! The HPP model has exactly one interaction: a cell holding only the two
//! particles of one axis, moving towards each other, rotates them onto the
//! perpendicular axis. Value 10 (Right + Left) becomes 5 (Up + Down) and
//! vice versa; every other value, including the fully occupied 15, is left
//! alone. Each cell's new value depends only on its own old value, so the
//! rewrite is done in place.

use lgca_arena::Lattice;
use lgca_core::PropagatorError;
use lgca_space::Torus2D;

use crate::shape_check::ensure_shape;

/// Phase name used in step errors and metrics.
pub const NAME: &str = "resolve_collisions";

/// Rewrite every head-on pair in `grid`, in place.
///
/// Returns the number of cells rewritten.
///
/// # Errors
///
/// [`PropagatorError::ShapeMismatch`] if `grid` does not match `space`.
/// Checked before any write.
pub fn resolve_collisions(space: &Torus2D, grid: &mut Lattice) -> Result<usize, PropagatorError> {
    ensure_shape(space, grid)?;

    let mut rewritten = 0;
    for cell in grid.cells_mut() {
        let next = cell.collide();
        if next != *cell {
            *cell = next;
            rewritten += 1;
        }
    }
    Ok(rewritten)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lgca_core::{Cell, Shape};
    use lgca_test_utils::{checkerboard, lattice_from_rows};
    use proptest::prelude::*;

    #[test]
    fn horizontal_pair_becomes_vertical() {
        let space = Torus2D::new(3, 3).unwrap();
        let mut grid = Lattice::new(space.shape());
        grid.set(1, 1, Cell::from_bits(10)).unwrap();

        let n = resolve_collisions(&space, &mut grid).unwrap();
        assert_eq!(n, 1);
        assert_eq!(grid.get(1, 1), Some(Cell::from_bits(5)));
        assert_eq!(grid.particle_count(), 2);
    }

    #[test]
    fn vertical_pair_becomes_horizontal() {
        let space = Torus2D::new(1, 1).unwrap();
        let mut grid = lattice_from_rows(&[&[5]]);
        resolve_collisions(&space, &mut grid).unwrap();
        assert_eq!(grid.get(0, 0), Some(Cell::HORIZONTAL_PAIR));
    }

    #[test]
    fn other_values_untouched() {
        let space = Torus2D::new(4, 4).unwrap();
        let mut grid = lattice_from_rows(&[
            &[0, 1, 2, 3],
            &[4, 6, 7, 8],
            &[9, 11, 12, 13],
            &[14, 15, 0, 0],
        ]);
        let before = grid.clone();
        let n = resolve_collisions(&space, &mut grid).unwrap();
        assert_eq!(n, 0);
        assert_eq!(grid, before);
    }

    #[test]
    fn second_pass_restores_the_input() {
        let space = Torus2D::new(2, 2).unwrap();
        let original = lattice_from_rows(&[&[5, 10], &[15, 3]]);
        let mut grid = original.clone();
        resolve_collisions(&space, &mut grid).unwrap();
        assert_eq!(grid.to_rows(), vec![vec![10, 5], vec![15, 3]]);
        resolve_collisions(&space, &mut grid).unwrap();
        assert_eq!(grid, original);
    }

    #[test]
    fn every_pair_in_a_checkerboard_rotates() {
        let space = Torus2D::new(6, 6).unwrap();
        let mut grid = checkerboard(space.shape(), Cell::HORIZONTAL_PAIR, Cell::VERTICAL_PAIR);
        let n = resolve_collisions(&space, &mut grid).unwrap();
        assert_eq!(n, 36);
        assert_eq!(
            grid,
            checkerboard(space.shape(), Cell::VERTICAL_PAIR, Cell::HORIZONTAL_PAIR)
        );
    }

    #[test]
    fn rejects_mismatched_grid() {
        let space = Torus2D::new(3, 3).unwrap();
        let mut grid = lattice_from_rows(&[&[10, 10]]);
        let err = resolve_collisions(&space, &mut grid).unwrap_err();
        assert_eq!(
            err,
            PropagatorError::ShapeMismatch {
                expected: Shape::new(3, 3),
                found: Shape::new(1, 2),
            }
        );
        assert_eq!(grid.to_rows(), vec![vec![10, 10]], "grid must be untouched");
    }

    proptest! {
        #[test]
        fn particle_count_is_conserved(bits in proptest::collection::vec(0u8..16, 25)) {
            let space = Torus2D::new(5, 5).unwrap();
            let cells = bits.iter().map(|&b| Cell::from_bits(b)).collect();
            let mut grid = Lattice::from_cells(space.shape(), cells).unwrap();
            let before: Vec<u32> = grid.cells().iter().map(|c| c.particle_count()).collect();
            resolve_collisions(&space, &mut grid).unwrap();
            let after: Vec<u32> = grid.cells().iter().map(|c| c.particle_count()).collect();
            prop_assert_eq!(before, after);
        }
    }
}
