//! Phases of the HPP lattice-gas automaton.
//!
//! # Initialization
//!
//! 1. [`RandomFill`]: independent Bernoulli draw per (cell, direction) slot
//! 2. [`ObstacleSquare`]: centred fully-occupied square on both lattices
//!
//! # Step order
//!
//! 1. [`propagate`]: reads(active) → writes(buffer), clears active
//! 2. buffer swap (owned by the step driver)
//! 3. [`resolve_collisions`]: rewrites the new active lattice in place

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod collision;
pub mod obstacle;
pub mod seeding;
pub mod streaming;

pub(crate) mod shape_check;

pub use collision::resolve_collisions;
pub use obstacle::{stamp_obstacle, ObstacleSquare};
pub use seeding::{initialize, RandomFill, SeedDirections, SeedReport};
pub use streaming::{propagate, PropagateReport};
