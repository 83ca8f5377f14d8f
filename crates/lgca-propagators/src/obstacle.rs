//! Centred fully-occupied square overlay.
//!
//! The square is stamped with [`Cell::FULL`] on both the active and the
//! buffer lattice, so the first buffer swap does not erase it. It is not a
//! wall: its particles stream away like any others.

use lgca_arena::{Lattice, LatticePair};
use lgca_core::{Cell, PropagatorError, Shape};
use lgca_space::Torus2D;

use crate::shape_check::ensure_shape;

/// Geometry of the centred square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObstacleSquare {
    origin: u32,
    side: u32,
}

impl ObstacleSquare {
    /// Square of side `round(fraction * cols)` starting at
    /// `floor(0.5 * (cols - fraction * cols))` on both axes.
    ///
    /// The origin is taken from the unrounded side and truncated, so a
    /// 128-wide grid at 0.15 starts at 54. The side is clipped to the
    /// shorter grid dimension and the origin is pulled back so the square
    /// always fits. Negative or NaN fractions give an empty square.
    pub fn from_fraction(shape: Shape, fraction: f64) -> Self {
        let width = f64::from(shape.cols);
        let limit = shape.rows.min(shape.cols);
        // Float-to-int `as` truncates, saturates, and maps NaN to 0.
        let side = ((fraction * width).round() as u32).min(limit);
        let origin = ((0.5 * (width - fraction * width)) as u32).min(limit - side);
        Self { origin, side }
    }

    /// First row and column of the square.
    pub fn origin(&self) -> u32 {
        self.origin
    }

    /// Edge length in cells.
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Whether the square covers no cells.
    pub fn is_empty(&self) -> bool {
        self.side == 0
    }

    /// Whether `(row, col)` lies inside the square.
    pub fn contains(&self, row: u32, col: u32) -> bool {
        let end = self.origin + self.side;
        (self.origin..end).contains(&row) && (self.origin..end).contains(&col)
    }

    /// Every covered coordinate, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32)> {
        let (origin, end) = (self.origin, self.origin + self.side);
        (origin..end).flat_map(move |r| (origin..end).map(move |c| (r, c)))
    }

    fn stamp_one(&self, lattice: &mut Lattice) {
        let shape = lattice.shape();
        let cells = lattice.cells_mut();
        for (r, c) in self.cells() {
            cells[shape.index(r, c)] = Cell::FULL;
        }
    }

    /// Stamp the square onto both lattices of `pair`. Returns cells covered.
    pub fn stamp(&self, pair: &mut LatticePair) -> usize {
        let (active, buffer) = pair.split_mut();
        self.stamp_one(active);
        self.stamp_one(buffer);
        (self.side as usize) * (self.side as usize)
    }

    /// Stamp the square onto two independent lattices.
    ///
    /// # Errors
    ///
    /// [`PropagatorError::ShapeMismatch`] if either lattice does not match
    /// `space`. Checked before any write.
    pub fn stamp_lattices(
        &self,
        space: &Torus2D,
        active: &mut Lattice,
        buffer: &mut Lattice,
    ) -> Result<usize, PropagatorError> {
        ensure_shape(space, active)?;
        ensure_shape(space, buffer)?;
        self.stamp_one(active);
        self.stamp_one(buffer);
        Ok((self.side as usize) * (self.side as usize))
    }
}

/// Stamp a centred square covering `fraction` of the grid width onto both
/// lattices of `pair`, returning its geometry.
pub fn stamp_obstacle(pair: &mut LatticePair, fraction: f64) -> ObstacleSquare {
    let square = ObstacleSquare::from_fraction(pair.shape(), fraction);
    square.stamp(pair);
    square
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_fraction_on_128_grid() {
        // side = round(19.2) = 19, origin = floor(54.4) = 54
        let sq = ObstacleSquare::from_fraction(Shape::new(128, 128), 0.15);
        assert_eq!(sq.side(), 19);
        assert_eq!(sq.origin(), 54);
    }

    #[test]
    fn stamp_sets_full_on_both_lattices() {
        let mut pair = LatticePair::new(Shape::new(20, 20));
        let sq = stamp_obstacle(&mut pair, 0.25);
        assert_eq!(sq.side(), 5);
        assert_eq!(sq.origin(), 7);

        for (r, c) in sq.cells() {
            assert_eq!(pair.active().get(r, c), Some(Cell::FULL));
            assert_eq!(pair.buffer().get(r, c), Some(Cell::FULL));
        }
        assert_eq!(pair.active().particle_count(), 4 * 25);
        assert_eq!(pair.buffer().particle_count(), 4 * 25);
        assert!(sq.contains(7, 7));
        assert!(!sq.contains(6, 7));
        assert!(sq.contains(11, 11));
        assert!(!sq.contains(12, 11));
    }

    #[test]
    fn stamp_overwrites_existing_occupancy() {
        let mut pair = LatticePair::new(Shape::new(4, 4));
        pair.active_mut().set(1, 1, Cell::from_bits(2)).unwrap();
        stamp_obstacle(&mut pair, 0.5);
        assert_eq!(pair.active().get(1, 1), Some(Cell::FULL));
    }

    #[test]
    fn zero_and_nan_fractions_are_empty() {
        for f in [0.0, -1.0, f64::NAN] {
            let sq = ObstacleSquare::from_fraction(Shape::new(10, 10), f);
            assert!(sq.is_empty(), "{f}");
            assert_eq!(sq.cells().count(), 0);
        }
    }

    #[test]
    fn origin_truncates_half_offsets() {
        // 0.5 * (20 - 5) = 7.5
        let sq = ObstacleSquare::from_fraction(Shape::new(20, 20), 0.25);
        assert_eq!(sq.origin(), 7);
        // 0.5 * (10 - 3) = 3.5
        let sq = ObstacleSquare::from_fraction(Shape::new(10, 10), 0.3);
        assert_eq!((sq.origin(), sq.side()), (3, 3));
    }

    #[test]
    fn square_fits_in_short_grid() {
        let sq = ObstacleSquare::from_fraction(Shape::new(3, 40), 0.5);
        assert_eq!(sq.side(), 3);
        assert_eq!(sq.origin(), 0);

        let sq = ObstacleSquare::from_fraction(Shape::new(10, 10), 2.0);
        assert_eq!(sq.side(), 10);
        assert_eq!(sq.origin(), 0);
    }

    #[test]
    fn stamp_lattices_checks_shapes() {
        let space = Torus2D::new(6, 6).unwrap();
        let sq = ObstacleSquare::from_fraction(space.shape(), 0.5);
        let mut a = Lattice::new(space.shape());
        let mut b = Lattice::new(Shape::new(6, 7));
        assert!(sq.stamp_lattices(&space, &mut a, &mut b).is_err());
        assert_eq!(a.particle_count(), 0);

        let mut b = Lattice::new(space.shape());
        assert_eq!(sq.stamp_lattices(&space, &mut a, &mut b).unwrap(), 9);
        assert_eq!(b.get(3, 3), Some(Cell::FULL));
    }
}
