//! Run configuration, validation, and error types.
//!
//! [`SimConfig`] holds the run parameters that are read once before a run
//! starts and stay fixed for its duration. [`validate()`](SimConfig::validate)
//! checks them at the boundary so no step can see undefined bit patterns.

use std::error::Error;
use std::fmt;

use lgca_propagators::SeedDirections;
use lgca_space::{SpaceError, Torus2D};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SimConfig::validate()`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Grid dimensions are zero or too large.
    Space(SpaceError),
    /// `rows * cols` does not fit in `u32`.
    CellCountOverflow {
        /// The cell count that overflowed.
        value: u64,
    },
    /// Density is NaN, infinite, or outside `[0, 1]`.
    InvalidDensity {
        /// The invalid value.
        value: f64,
    },
    /// Obstacle fraction is NaN, infinite, or outside `[0, 1]`.
    InvalidObstacleFraction {
        /// The invalid value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(e) => write!(f, "space: {e}"),
            Self::CellCountOverflow { value } => {
                write!(f, "cell count {value} exceeds u32::MAX")
            }
            Self::InvalidDensity { value } => {
                write!(f, "density must be finite and in [0, 1], got {value}")
            }
            Self::InvalidObstacleFraction { value } => {
                write!(f, "obstacle_fraction must be finite and in [0, 1], got {value}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

// ── SimConfig ──────────────────────────────────────────────────────

/// Complete configuration for one simulation run.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Grid height (`SIZE_Y`). Default: 128.
    pub rows: u32,
    /// Grid width (`SIZE_X`). Default: 128.
    pub cols: u32,
    /// Per-slot occupancy probability at initialization. Default: 0.5.
    pub density: f64,
    /// Steps executed by [`run_configured`](crate::LatticeGasWorld::run_configured). Default: 500.
    pub steps: u64,
    /// Obstacle square side as a fraction of the width. Default: 0.15.
    pub obstacle_fraction: f64,
    /// RNG seed for the initial fill. Default: 0.
    pub seed: u64,
    /// Directions drawn by the initial fill. Default: Up, Right, Down.
    pub seed_directions: SeedDirections,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rows: 128,
            cols: 128,
            density: 0.5,
            steps: 500,
            obstacle_fraction: 0.15,
            seed: 0,
            seed_directions: SeedDirections::UpRightDown,
        }
    }
}

impl SimConfig {
    /// A square `size × size` configuration with everything else defaulted.
    pub fn square(size: u32) -> Self {
        Self {
            rows: size,
            cols: size,
            ..Self::default()
        }
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Dimensions must be non-zero and fit the torus coordinate range.
        let space = Torus2D::new(self.rows, self.cols)?;
        // 2. Cell count must fit in u32.
        let cells = space.cell_count() as u64;
        if u32::try_from(cells).is_err() {
            return Err(ConfigError::CellCountOverflow { value: cells });
        }
        // 3. Density is a probability.
        if !self.density.is_finite() || !(0.0..=1.0).contains(&self.density) {
            return Err(ConfigError::InvalidDensity {
                value: self.density,
            });
        }
        // 4. Obstacle fraction is a share of the width.
        if !self.obstacle_fraction.is_finite() || !(0.0..=1.0).contains(&self.obstacle_fraction)
        {
            return Err(ConfigError::InvalidObstacleFraction {
                value: self.obstacle_fraction,
            });
        }
        Ok(())
    }

    /// Build the torus described by `rows × cols`.
    pub(crate) fn space(&self) -> Result<Torus2D, ConfigError> {
        Ok(Torus2D::new(self.rows, self.cols)?)
    }
}
