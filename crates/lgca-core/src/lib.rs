//! Core types and traits for lattice-gas simulations.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the rest of the workspace: the 4-bit
//! [`Cell`] occupancy record, [`Direction`], grid [`Shape`], step
//! identifiers, error types, and the [`FrameAccess`] trait.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod id;
pub mod traits;

pub use cell::{Cell, Direction};
pub use error::{PropagatorError, StepError};
pub use id::{Shape, StepId};
pub use traits::FrameAccess;
