//! 2D square lattice with periodic boundaries on both axes.

use crate::error::SpaceError;
use lgca_core::{Direction, Shape};

/// A two-dimensional square lattice wrapped into a torus.
///
/// Each cell has coordinate `(row, col)` where `0 <= row < rows` and
/// `0 <= col < cols`. Moving off one edge re-enters from the opposite
/// edge, so every cell has exactly four neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Torus2D {
    rows: u32,
    cols: u32,
}

impl Torus2D {
    /// Maximum dimension size: axis arithmetic uses `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a torus with `rows * cols` cells.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either dimension is 0, or
    /// `Err(SpaceError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lgca_core::Direction;
    /// use lgca_space::Torus2D;
    ///
    /// let torus = Torus2D::new(4, 4).unwrap();
    /// assert_eq!(torus.cell_count(), 16);
    ///
    /// // Moving up from the top row wraps to the bottom row.
    /// assert_eq!(torus.neighbour(0, 2, Direction::Up), (3, 2));
    /// ```
    pub fn new(rows: u32, cols: u32) -> Result<Self, SpaceError> {
        if rows == 0 || cols == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if rows > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self { rows, cols })
    }

    /// Number of rows (height).
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns (width).
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Grid dimensions.
    pub fn shape(&self) -> Shape {
        Shape::new(self.rows, self.cols)
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.shape().cell_count()
    }

    /// The cell one step from `(row, col)` in direction `dir`, wrapped.
    ///
    /// `(row, col)` must be in bounds.
    #[inline]
    pub fn neighbour(&self, row: u32, col: u32, dir: Direction) -> (u32, u32) {
        let (dr, dc) = dir.offset();
        (
            wrap_axis(row as i32 + dr, self.rows),
            wrap_axis(col as i32 + dc, self.cols),
        )
    }

    /// Flat row-major index of [`neighbour`](Self::neighbour).
    #[inline]
    pub fn neighbour_index(&self, row: u32, col: u32, dir: Direction) -> usize {
        let (nr, nc) = self.neighbour(row, col, dir);
        self.shape().index(nr, nc)
    }

    /// Row-major ordering of every coordinate: `(0,0), (0,1), ..., (rows-1, cols-1)`.
    pub fn coords(&self) -> impl Iterator<Item = (u32, u32)> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |r| (0..cols).map(move |c| (r, c)))
    }
}

/// Resolve a single axis value under periodic wraparound.
#[inline]
pub(crate) fn wrap_axis(val: i32, len: u32) -> u32 {
    let n = len as i64;
    (((val as i64 % n) + n) % n) as u32
}
