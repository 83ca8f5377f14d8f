//! Per-step metrics for the step driver.
//!
//! [`StepMetrics`] captures timing and particle accounting for a single
//! step.

/// Timing and particle metrics collected during a single step.
///
/// All durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the entire step, in microseconds.
    pub total_us: u64,
    /// Time spent in propagation, in microseconds.
    pub propagate_us: u64,
    /// Time spent resolving collisions, in microseconds.
    pub collide_us: u64,
    /// Particles emitted by propagation.
    pub particles_moved: u64,
    /// Particles lost to OR-collapse during propagation.
    pub particles_collapsed: u64,
    /// Cells rewritten by collision resolution.
    pub collisions_resolved: u64,
    /// Particles on the active lattice after the step.
    pub particle_count: u64,
}
