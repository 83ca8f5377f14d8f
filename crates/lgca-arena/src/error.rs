//! Arena-specific error types.

use std::error::Error;
use std::fmt;

use lgca_core::Shape;

/// Errors that can occur during lattice storage operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// Supplied cell data does not fill the requested shape exactly.
    LengthMismatch {
        /// Cells required by the shape.
        expected: usize,
        /// Cells supplied.
        found: usize,
    },
    /// Two lattices that must share a shape do not.
    ShapeMismatch {
        /// Shape of the receiving lattice.
        expected: Shape,
        /// Shape of the other lattice.
        found: Shape,
    },
    /// A coordinate outside the lattice.
    OutOfBounds {
        /// Requested row.
        row: u32,
        /// Requested column.
        col: u32,
        /// Shape of the lattice.
        shape: Shape,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, found } => {
                write!(f, "cell data length {found} does not match shape ({expected} cells)")
            }
            Self::ShapeMismatch { expected, found } => {
                write!(f, "shape mismatch: expected {expected}, found {found}")
            }
            Self::OutOfBounds { row, col, shape } => {
                write!(f, "coordinate ({row}, {col}) out of bounds for {shape} lattice")
            }
        }
    }
}

impl Error for ArenaError {}
