//! Strongly-typed identifiers and the grid [`Shape`].

use std::fmt;

/// Monotonically increasing step counter.
///
/// Zero after construction or reset; incremented each time the simulation
/// completes one propagate/collide step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepId(pub u64);

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StepId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Dimensions of a lattice: `rows` (height, `SIZE_Y`) by `cols` (width, `SIZE_X`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Shape {
    /// Number of rows.
    pub rows: u32,
    /// Number of columns.
    pub cols: u32,
}

impl Shape {
    /// Create a shape. No validation; see `lgca_space::Torus2D::new`.
    pub const fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    /// Total number of cells.
    pub const fn cell_count(self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// Row-major flat index of `(row, col)`.
    #[inline]
    pub const fn index(self, row: u32, col: u32) -> usize {
        (row as usize) * (self.cols as usize) + (col as usize)
    }

    /// Whether `(row, col)` lies inside the grid.
    pub const fn contains(self, row: u32, col: u32) -> bool {
        row < self.rows && col < self.cols
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}
