//! Lattice storage for lattice-gas simulations.
//!
//! # Architecture
//!
//! The arena uses a double-buffered ("ping-pong") design:
//!
//! ```text
//! LatticePair (orchestrator)
//! ├── Lattice A ─┐ one is "active" (read by propagation, exposed as the frame)
//! ├── Lattice B ─┘ the other is the "buffer" (write target of propagation)
//! └── generation counter, incremented on every swap
//! ```
//!
//! Ownership of the two lattices never moves; [`LatticePair::swap`] only
//! flips which one plays which role. A [`Frame`] borrows the active
//! lattice read-only.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod lattice;
pub mod pingpong;
pub mod read;

pub use error::ArenaError;
pub use lattice::Lattice;
pub use pingpong::LatticePair;
pub use read::Frame;
