//! An HPP lattice-gas cellular automaton on a 2D torus.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! lattice-gas sub-crates. For most users, adding `lgca` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use lgca::prelude::*;
//!
//! // An empty 4×4 world with a single right-moving particle.
//! let config = SimConfig {
//!     density: 0.0,
//!     obstacle_fraction: 0.0,
//!     ..SimConfig::square(4)
//! };
//! let mut world = LatticeGasWorld::new(config).unwrap();
//! world
//!     .lattice_mut()
//!     .set(1, 1, Cell::from_directions(&[Direction::Right]))
//!     .unwrap();
//!
//! let result = world.step().unwrap();
//! assert_eq!(result.frame.step_id(), StepId(1));
//! assert_eq!(result.frame.cell(1, 2), Some(Cell::from_directions(&[Direction::Right])));
//! assert_eq!(result.frame.particle_count(), 1);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `lgca-core` | Cells, directions, shapes, step ids, errors |
//! | [`space`] | `lgca-space` | Toroidal topology |
//! | [`arena`] | `lgca-arena` | Lattice storage, double buffer, `Frame` |
//! | [`propagators`] | `lgca-propagators` | Seeding, obstacle, propagation, collisions |
//! | [`engine`] | `lgca-engine` | Step driver, config, export, density maps |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core cell and id types (`lgca-core`).
///
/// Contains [`types::Cell`], [`types::Direction`], error types, and the
/// [`types::FrameAccess`] trait.
pub use lgca_core as types;

/// Toroidal topology (`lgca-space`).
pub use lgca_space as space;

/// Lattice storage and double buffering (`lgca-arena`).
///
/// Most users only need [`arena::Frame`] from this module; it is also
/// available in the [`prelude`].
pub use lgca_arena as arena;

/// Update phases (`lgca-propagators`).
///
/// [`propagators::propagate`] and [`propagators::resolve_collisions`] are the
/// two halves of a step; [`propagators::RandomFill`] and
/// [`propagators::ObstacleSquare`] build the initial state.
pub use lgca_propagators as propagators;

/// Step driver (`lgca-engine`).
///
/// [`engine::LatticeGasWorld`] for synchronous stepping, [`engine::FrameSink`]
/// for exporting frames during a run.
pub use lgca_engine as engine;

/// Common imports for typical lattice-gas usage.
///
/// ```rust
/// use lgca::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use lgca_core::{Cell, Direction, FrameAccess, Shape, StepId};

    // Errors
    pub use lgca_core::{PropagatorError, StepError};
    pub use lgca_engine::{ConfigError, RunError};

    // Storage
    pub use lgca_arena::{Frame, Lattice, LatticePair};

    // Space
    pub use lgca_space::Torus2D;

    // Phases
    pub use lgca_propagators::{propagate, resolve_collisions, SeedDirections};

    // Engine
    pub use lgca_engine::{
        frame_hash, DensityMap, FrameRecorder, FrameSink, LatticeGasWorld, SimConfig,
        StepMetrics, StepResult,
    };
}
