//! Error types shared by the propagation phases and the step driver.

use std::error::Error;
use std::fmt;

use crate::id::Shape;

/// Errors from the step driver during `step()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepError {
    /// A phase rejected its inputs before writing anything.
    PropagatorFailed {
        /// Name of the failing phase.
        name: String,
        /// The underlying phase error.
        reason: PropagatorError,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PropagatorFailed { name, reason } => {
                write!(f, "phase '{name}' failed: {reason}")
            }
        }
    }
}

impl Error for StepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PropagatorFailed { reason, .. } => Some(reason),
        }
    }
}

/// Errors from an individual phase (propagation or collision resolution).
///
/// Always raised before the phase performs its first write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PropagatorError {
    /// A lattice handed to the phase does not match the topology's shape.
    ShapeMismatch {
        /// Shape of the topology.
        expected: Shape,
        /// Shape of the offending lattice.
        found: Shape,
    },
}

impl fmt::Display for PropagatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch { expected, found } => {
                write!(f, "shape mismatch: expected {expected}, found {found}")
            }
        }
    }
}

impl Error for PropagatorError {}
