//! Benchmark profiles for the lattice-gas engine.
//!
//! Provides pre-built [`SimConfig`] profiles for benchmarking:
//!
//! - [`reference_profile`]: 128x128 grid, the default run parameters
//! - [`stress_profile`]: 1024x1024 grid (~1M cells) for stress testing

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use lgca_engine::SimConfig;
use lgca_propagators::SeedDirections;

/// Reference profile: 128x128, density 0.5, obstacle 0.15.
pub fn reference_profile(seed: u64) -> SimConfig {
    SimConfig {
        seed,
        ..SimConfig::default()
    }
}

/// Stress profile: 1024x1024 with all four directions seeded.
///
/// Same parameters as [`reference_profile`] but at 64x the cell count.
pub fn stress_profile(seed: u64) -> SimConfig {
    SimConfig {
        seed,
        seed_directions: SeedDirections::All,
        ..SimConfig::square(1024)
    }
}
