//! Random initial occupancy.
//!
//! Each (cell, direction) slot is an independent Bernoulli draw with
//! probability `density`. By default only Up, Right and Down are drawn and
//! Left starts empty everywhere; [`SeedDirections::All`] opts into the
//! symmetric four-direction variant.
//!
//! Constructed via the builder pattern: [`RandomFill::builder`]. The
//! deterministic entry point [`RandomFill::fill_seeded`] uses a ChaCha8
//! stream so identical seeds give identical lattices.

use lgca_arena::{Lattice, LatticePair};
use lgca_core::Direction;
use lgca_space::Torus2D;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Which directions take part in the random draw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeedDirections {
    /// Up, Right and Down only. Left is never seeded.
    #[default]
    UpRightDown,
    /// All four directions.
    All,
}

impl SeedDirections {
    /// The directions drawn, in bit order.
    pub fn directions(self) -> &'static [Direction] {
        match self {
            SeedDirections::UpRightDown => &[Direction::Up, Direction::Right, Direction::Down],
            SeedDirections::All => &Direction::ALL,
        }
    }
}

/// Outcome of one random fill.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeedReport {
    /// Particles actually created.
    pub seeded: u64,
    /// Total slot capacity of the lattice (`4 * cells`).
    pub capacity: u64,
    /// `capacity * density`.
    pub expected: f64,
}

/// Independent per-slot Bernoulli seeding of a lattice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RandomFill {
    density: f64,
    directions: SeedDirections,
}

/// Builder for [`RandomFill`].
pub struct RandomFillBuilder {
    density: f64,
    directions: SeedDirections,
}

impl RandomFill {
    /// Create a new builder. Defaults: density 0.5, [`SeedDirections::UpRightDown`].
    pub fn builder() -> RandomFillBuilder {
        RandomFillBuilder {
            density: 0.5,
            directions: SeedDirections::UpRightDown,
        }
    }

    /// Occupancy probability per slot.
    pub fn density(&self) -> f64 {
        self.density
    }

    /// Directions drawn.
    pub fn directions(&self) -> SeedDirections {
        self.directions
    }

    /// Set drawn slots of `lattice` using `rng`.
    ///
    /// Bits are only ever set, never cleared, so the fill composes with
    /// whatever the lattice already holds. A slot is set when a uniform
    /// draw in `[0, 1)` is below `density`; densities outside `[0, 1]`
    /// therefore behave as 0 or 1.
    pub fn fill<R: Rng + ?Sized>(&self, lattice: &mut Lattice, rng: &mut R) -> SeedReport {
        let dirs = self.directions.directions();
        let mut seeded = 0u64;
        for cell in lattice.cells_mut() {
            for &dir in dirs {
                if rng.random::<f64>() < self.density {
                    cell.set(dir);
                    seeded += 1;
                }
            }
        }
        let capacity = 4 * lattice.shape().cell_count() as u64;
        SeedReport {
            seeded,
            capacity,
            expected: capacity as f64 * self.density,
        }
    }

    /// [`fill`](Self::fill) with a ChaCha8 stream seeded from `seed`.
    pub fn fill_seeded(&self, lattice: &mut Lattice, seed: u64) -> SeedReport {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.fill(lattice, &mut rng)
    }
}

impl RandomFillBuilder {
    /// Set the per-slot occupancy probability (default: 0.5). Must be in `[0, 1]`.
    pub fn density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// Set which directions are drawn (default: Up, Right, Down).
    pub fn directions(mut self, directions: SeedDirections) -> Self {
        self.directions = directions;
        self
    }

    /// Build the fill, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `density` is NaN, infinite, or outside `[0, 1]`.
    pub fn build(self) -> Result<RandomFill, String> {
        if !self.density.is_finite() || !(0.0..=1.0).contains(&self.density) {
            return Err(format!(
                "density must be finite and in [0, 1], got {}",
                self.density
            ));
        }
        Ok(RandomFill {
            density: self.density,
            directions: self.directions,
        })
    }
}

/// Create a fresh lattice pair for `space` and randomly seed the active
/// lattice with Up/Right/Down particles at `density`.
///
/// The buffer lattice stays zero-filled. `density` is not validated here;
/// see [`RandomFillBuilder::build`] for the checked path.
pub fn initialize<R: Rng + ?Sized>(
    space: &Torus2D,
    density: f64,
    rng: &mut R,
) -> (LatticePair, SeedReport) {
    let fill = RandomFill {
        density,
        directions: SeedDirections::UpRightDown,
    };
    let mut pair = LatticePair::new(space.shape());
    let report = fill.fill(pair.active_mut(), rng);
    (pair, report)
}
