//! Spatial topology for lattice-gas simulations.
//!
//! The HPP lattice is a square grid with periodic boundaries on both
//! axes. [`Torus2D`] validates grid dimensions once at construction and
//! resolves every one-cell move under wraparound.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod torus;

pub use error::SpaceError;
pub use torus::Torus2D;
