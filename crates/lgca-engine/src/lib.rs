//! Simulation engine driving HPP lattice-gas runs.
//!
//! Provides [`LatticeGasWorld`], the step driver that owns the double
//! buffer and sequences propagate → swap → collide, along with run
//! configuration, per-step metrics, and the frame export interface.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod density;
pub mod egress;
pub mod hash;
pub mod lockstep;
pub mod metrics;

pub use config::{ConfigError, SimConfig};
pub use density::{DensityMap, DEFAULT_BLOCK};
pub use egress::{FrameRecorder, FrameSink, RecordedFrame, RunError, SinkError};
pub use hash::frame_hash;
pub use lockstep::{LatticeGasWorld, RunSummary, StepResult};
pub use metrics::StepMetrics;
