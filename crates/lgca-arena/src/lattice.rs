//! Flat row-major storage for one lattice instant.

use lgca_core::{Cell, Shape};

use crate::error::ArenaError;

/// The full grid of cells at one instant.
///
/// Cells are stored row-major in a single `Vec<Cell>`; the shape is fixed
/// at construction and never changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lattice {
    shape: Shape,
    cells: Vec<Cell>,
}

impl Lattice {
    /// Create a zero-filled lattice.
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            cells: vec![Cell::EMPTY; shape.cell_count()],
        }
    }

    /// Wrap existing row-major cell data.
    ///
    /// Returns `Err(ArenaError::LengthMismatch)` if `cells` does not hold
    /// exactly `shape.cell_count()` entries.
    pub fn from_cells(shape: Shape, cells: Vec<Cell>) -> Result<Self, ArenaError> {
        if cells.len() != shape.cell_count() {
            return Err(ArenaError::LengthMismatch {
                expected: shape.cell_count(),
                found: cells.len(),
            });
        }
        Ok(Self { shape, cells })
    }

    /// Dimensions of this lattice.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Mutable access to all cells in row-major order.
    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Cell at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: u32, col: u32) -> Option<Cell> {
        if self.shape.contains(row, col) {
            Some(self.cells[self.shape.index(row, col)])
        } else {
            None
        }
    }

    /// Overwrite the cell at `(row, col)`.
    pub fn set(&mut self, row: u32, col: u32, cell: Cell) -> Result<(), ArenaError> {
        if !self.shape.contains(row, col) {
            return Err(ArenaError::OutOfBounds {
                row,
                col,
                shape: self.shape,
            });
        }
        let idx = self.shape.index(row, col);
        self.cells[idx] = cell;
        Ok(())
    }

    /// One row of cells.
    ///
    /// # Panics
    ///
    /// Panics if `row >= shape().rows`.
    pub fn row(&self, row: u32) -> &[Cell] {
        let start = self.shape.index(row, 0);
        &self.cells[start..start + self.shape.cols as usize]
    }

    /// Reset every cell to [`Cell::EMPTY`].
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    /// Total number of set direction bits.
    pub fn particle_count(&self) -> u64 {
        self.cells
            .iter()
            .map(|c| u64::from(c.particle_count()))
            .sum()
    }

    /// Raw cell values as a 2D array, one inner `Vec` per row.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.shape.rows)
            .map(|r| self.row(r).iter().map(|c| c.bits()).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lgca_core::Direction;

    #[test]
    fn new_lattice_is_empty() {
        let l = Lattice::new(Shape::new(3, 4));
        assert_eq!(l.cells().len(), 12);
        assert_eq!(l.particle_count(), 0);
        assert!(l.cells().iter().all(|c| c.is_empty()));
    }

    #[test]
    fn from_cells_rejects_wrong_length() {
        let err = Lattice::from_cells(Shape::new(2, 2), vec![Cell::EMPTY; 3]).unwrap_err();
        assert_eq!(
            err,
            ArenaError::LengthMismatch {
                expected: 4,
                found: 3
            }
        );
    }

    #[test]
    fn set_and_get_round_trip() {
        let mut l = Lattice::new(Shape::new(3, 3));
        l.set(1, 2, Cell::FULL).unwrap();
        assert_eq!(l.get(1, 2), Some(Cell::FULL));
        assert_eq!(l.cells()[5], Cell::FULL);
        assert_eq!(l.particle_count(), 4);
    }

    #[test]
    fn out_of_bounds_access() {
        let mut l = Lattice::new(Shape::new(2, 2));
        assert_eq!(l.get(2, 0), None);
        assert!(matches!(
            l.set(0, 2, Cell::FULL),
            Err(ArenaError::OutOfBounds { row: 0, col: 2, .. })
        ));
    }

    #[test]
    fn rows_and_clear() {
        let mut l = Lattice::new(Shape::new(2, 3));
        l.set(1, 0, Cell::EMPTY.with(Direction::Left)).unwrap();
        assert_eq!(l.row(1)[0].bits(), 8);
        assert_eq!(l.to_rows(), vec![vec![0, 0, 0], vec![8, 0, 0]]);
        l.clear();
        assert_eq!(l.particle_count(), 0);
    }
}
