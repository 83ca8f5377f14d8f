//! Synchronous step driver.
//!
//! [`LatticeGasWorld`] owns the torus, the double-buffered lattices, and
//! the run configuration. Each [`step()`](LatticeGasWorld::step) performs
//! one full update:
//!
//! 1. propagate every particle from the active lattice into the buffer,
//!    clearing the active lattice as it goes;
//! 2. swap roles so the buffer becomes active;
//! 3. resolve head-on collisions on the new active lattice, exactly once.
//!
//! `LatticeGasWorld` is [`Send`]. All mutating methods take `&mut self`
//! and [`step()`](LatticeGasWorld::step) returns a [`Frame`] that borrows
//! from `self`, so no mutation can happen while a frame is held.

use std::fmt;
use std::time::Instant;

use lgca_arena::{Frame, Lattice, LatticePair};
use lgca_core::{StepError, StepId};
use lgca_propagators::{
    collision, propagate, resolve_collisions, streaming, ObstacleSquare, PropagateReport,
    RandomFill, SeedReport,
};
use lgca_space::Torus2D;

use crate::config::{ConfigError, SimConfig};
use crate::egress::{FrameSink, RunError};
use crate::metrics::StepMetrics;

// Fails to compile if any field is !Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<LatticeGasWorld>();
    }
};

/// Result of a successful [`LatticeGasWorld::step()`] call.
pub struct StepResult<'w> {
    /// Read-only view of the active lattice after this step.
    pub frame: Frame<'w>,
    /// Timing and particle metrics for this step.
    pub metrics: StepMetrics,
}

/// Totals for a completed [`LatticeGasWorld::run()`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames handed to the sink.
    pub frames_exported: u64,
    /// Step id after the last step.
    pub final_step: StepId,
    /// Cells rewritten by collisions, summed over the run.
    pub collisions_resolved: u64,
    /// Particles lost to OR-collapse, summed over the run.
    pub particles_collapsed: u64,
    /// Particles on the active lattice at the end of the run.
    pub particle_count: u64,
}

/// Single-threaded HPP lattice-gas world.
pub struct LatticeGasWorld {
    config: SimConfig,
    space: Torus2D,
    fill: RandomFill,
    obstacle: ObstacleSquare,
    pair: LatticePair,
    step_id: StepId,
    seed: u64,
    last_seed: SeedReport,
    last_metrics: StepMetrics,
}

impl LatticeGasWorld {
    /// Create a world from `config`, seeded with `config.seed`.
    ///
    /// Validates the configuration, fills the active lattice at
    /// `config.density`, then stamps the obstacle square onto both lattices.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let space = config.space()?;
        let fill = RandomFill::builder()
            .density(config.density)
            .directions(config.seed_directions)
            .build()
            .map_err(|_| ConfigError::InvalidDensity {
                value: config.density,
            })?;
        let obstacle = ObstacleSquare::from_fraction(space.shape(), config.obstacle_fraction);
        let pair = LatticePair::new(space.shape());
        let seed = config.seed;

        let mut world = Self {
            config,
            space,
            fill,
            obstacle,
            pair,
            step_id: StepId(0),
            seed,
            last_seed: SeedReport {
                seeded: 0,
                capacity: 0,
                expected: 0.0,
            },
            last_metrics: StepMetrics::default(),
        };
        world.populate();
        Ok(world)
    }

    /// Seed the (zeroed) active lattice and stamp the obstacle.
    fn populate(&mut self) {
        let report = self.fill.fill_seeded(self.pair.active_mut(), self.seed);
        self.obstacle.stamp(&mut self.pair);
        log::info!(
            "seed {}: created {} particles out of {} slots (expected ~{:.0}) on {}",
            self.seed,
            report.seeded,
            report.capacity,
            report.expected,
            self.space.shape(),
        );
        log::info!(
            "obstacle square: side {} at ({}, {})",
            self.obstacle.side(),
            self.obstacle.origin(),
            self.obstacle.origin(),
        );
        self.last_seed = report;
    }

    /// Execute one propagate → swap → collide update.
    ///
    /// # Errors
    ///
    /// [`StepError::PropagatorFailed`] if a phase rejects the lattices.
    /// A failure during propagation leaves both lattices untouched.
    pub fn step(&mut self) -> Result<StepResult<'_>, StepError> {
        let start = Instant::now();

        let (active, buffer) = self.pair.split_mut();
        let report = propagate(&self.space, active, buffer).map_err(|reason| {
            StepError::PropagatorFailed {
                name: streaming::NAME.to_string(),
                reason,
            }
        })?;
        let propagate_us = start.elapsed().as_micros() as u64;

        self.pair.swap();

        let collide_start = Instant::now();
        let rewritten = resolve_collisions(&self.space, self.pair.active_mut()).map_err(
            |reason| StepError::PropagatorFailed {
                name: collision::NAME.to_string(),
                reason,
            },
        )?;
        let collide_us = collide_start.elapsed().as_micros() as u64;

        self.step_id = StepId(self.step_id.0 + 1);

        let metrics = StepMetrics {
            total_us: start.elapsed().as_micros() as u64,
            propagate_us,
            collide_us,
            particles_moved: report.moved,
            particles_collapsed: report.collapsed(),
            collisions_resolved: rewritten as u64,
            particle_count: self.pair.active().particle_count(),
        };
        if let Some(level) = collapse_level(&report) {
            log::log!(
                level,
                "step {}: {} particles collapsed onto occupied slots ({} already in buffer)",
                self.step_id,
                metrics.particles_collapsed,
                report.buffer_before,
            );
        }
        log::debug!(
            "step {}: {} particles, {} collisions, {}us",
            self.step_id,
            metrics.particle_count,
            metrics.collisions_resolved,
            metrics.total_us,
        );
        self.last_metrics = metrics.clone();

        Ok(StepResult {
            frame: self.pair.frame(self.step_id),
            metrics,
        })
    }

    /// Run `steps` updates, handing the current frame to `sink` before each.
    ///
    /// Frames `0..steps` are exported; the state after the last step is
    /// not. Stops at the first error.
    pub fn run<S: FrameSink + ?Sized>(
        &mut self,
        steps: u64,
        sink: &mut S,
    ) -> Result<RunSummary, RunError> {
        let mut summary = RunSummary::default();
        for _ in 0..steps {
            let step = self.step_id;
            log::trace!("exporting frame {step}");
            if let Err(e) = sink.write_frame(step, &self.frame()) {
                log::warn!("frame {step} rejected by sink: {e}");
                return Err(RunError::Export {
                    step,
                    reason: e.to_string(),
                });
            }
            summary.frames_exported += 1;

            let result = self.step()?;
            summary.collisions_resolved += result.metrics.collisions_resolved;
            summary.particles_collapsed += result.metrics.particles_collapsed;
        }
        summary.final_step = self.step_id;
        summary.particle_count = self.particle_count();
        Ok(summary)
    }

    /// [`run()`](Self::run) for `config.steps` steps.
    pub fn run_configured<S: FrameSink + ?Sized>(
        &mut self,
        sink: &mut S,
    ) -> Result<RunSummary, RunError> {
        self.run(self.config.steps, sink)
    }

    /// Zero both lattices, re-seed with `seed`, re-stamp the obstacle, and
    /// return to step 0.
    pub fn reset(&mut self, seed: u64) -> Frame<'_> {
        self.pair.reset();
        self.seed = seed;
        self.step_id = StepId(0);
        self.last_metrics = StepMetrics::default();
        self.populate();
        self.pair.frame(self.step_id)
    }

    /// Read-only view of the current active lattice.
    pub fn frame(&self) -> Frame<'_> {
        self.pair.frame(self.step_id)
    }

    /// Mutable access to the active lattice between steps.
    pub fn lattice_mut(&mut self) -> &mut Lattice {
        self.pair.active_mut()
    }

    /// Steps executed since creation or the last reset.
    pub fn current_step(&self) -> StepId {
        self.step_id
    }

    /// Particles on the active lattice.
    pub fn particle_count(&self) -> u64 {
        self.pair.active().particle_count()
    }

    /// Metrics from the most recent step.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// Outcome of the most recent random fill.
    pub fn seed_report(&self) -> SeedReport {
        self.last_seed
    }

    /// Seed used for the current run.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The torus the world runs on.
    pub fn space(&self) -> &Torus2D {
        &self.space
    }

    /// Geometry of the obstacle square.
    pub fn obstacle(&self) -> ObstacleSquare {
        self.obstacle
    }

    /// The configuration the world was built from.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }
}

/// Log level for particles lost during propagation, `None` if nothing was lost.
///
/// Loss against bits already sitting in the buffer (the obstacle's buffer
/// copy on the first step) is expected and logged at debug. Loss into an
/// empty buffer means arrivals clashed with each other.
fn collapse_level(report: &PropagateReport) -> Option<log::Level> {
    match report.collapsed() {
        0 => None,
        _ if report.buffer_before > 0 => Some(log::Level::Debug),
        _ => Some(log::Level::Warn),
    }
}

impl fmt::Debug for LatticeGasWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LatticeGasWorld")
            .field("shape", &self.space.shape())
            .field("current_step", &self.step_id)
            .field("seed", &self.seed)
            .field("particles", &self.particle_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::egress::FrameRecorder;
    use crate::hash::frame_hash;
    use lgca_core::{Cell, Direction, FrameAccess};
    use lgca_propagators::SeedDirections;
    use proptest::prelude::*;

    fn empty_config(size: u32) -> SimConfig {
        SimConfig {
            density: 0.0,
            obstacle_fraction: 0.0,
            ..SimConfig::square(size)
        }
    }

    #[test]
    fn new_world_starts_at_step_zero() {
        let world = LatticeGasWorld::new(SimConfig::square(16)).unwrap();
        assert_eq!(world.current_step(), StepId(0));
        assert_eq!(world.seed(), 0);
        assert_eq!(world.frame().step_id(), StepId(0));
        assert!(world.particle_count() > 0);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let cfg = SimConfig {
            density: 2.0,
            ..SimConfig::default()
        };
        match LatticeGasWorld::new(cfg) {
            Err(ConfigError::InvalidDensity { value }) => assert_eq!(value, 2.0),
            other => panic!("expected InvalidDensity, got {other:?}"),
        }
    }

    #[test]
    fn step_increments_step_id() {
        let mut world = LatticeGasWorld::new(empty_config(4)).unwrap();
        let result = world.step().unwrap();
        assert_eq!(result.frame.step_id(), StepId(1));
        world.step().unwrap();
        assert_eq!(world.current_step(), StepId(2));
    }

    #[test]
    fn head_on_pair_rotates_once_per_step() {
        let mut world = LatticeGasWorld::new(empty_config(5)).unwrap();
        // Right-mover at (2,1) and left-mover at (2,3) meet at (2,2).
        world
            .lattice_mut()
            .set(2, 1, Cell::from_directions(&[Direction::Right]))
            .unwrap();
        world
            .lattice_mut()
            .set(2, 3, Cell::from_directions(&[Direction::Left]))
            .unwrap();

        let result = world.step().unwrap();
        assert_eq!(result.frame.cell(2, 2), Some(Cell::VERTICAL_PAIR));
        assert_eq!(result.metrics.collisions_resolved, 1);
        assert_eq!(result.metrics.particle_count, 2);

        let frame = world.step().unwrap().frame;
        assert_eq!(frame.cell(1, 2), Some(Cell::from_directions(&[Direction::Up])));
        assert_eq!(frame.cell(3, 2), Some(Cell::from_directions(&[Direction::Down])));
    }

    #[test]
    fn metrics_are_recorded() {
        let mut world = LatticeGasWorld::new(SimConfig::square(12)).unwrap();
        let before = world.particle_count();
        // The buffer copy of the obstacle is already in place before the
        // first propagation.
        let side = u64::from(world.obstacle().side());
        let metrics = world.step().unwrap().metrics;
        assert_eq!(metrics.particles_moved, before);
        assert_eq!(
            metrics.particle_count + metrics.particles_collapsed,
            before + 4 * side * side
        );
        assert_eq!(world.last_metrics(), &metrics);
    }

    #[test]
    fn reset_returns_to_step_zero_and_reproduces() {
        let mut world = LatticeGasWorld::new(SimConfig::square(16)).unwrap();
        let initial = frame_hash(&world.frame());
        world.step().unwrap();
        world.step().unwrap();

        let frame = world.reset(0);
        assert_eq!(frame.step_id(), StepId(0));
        assert_eq!(frame_hash(&frame), initial);
        assert_eq!(world.current_step(), StepId(0));
        assert_eq!(world.last_metrics(), &StepMetrics::default());
    }

    #[test]
    fn reset_with_new_seed_changes_state() {
        let mut world = LatticeGasWorld::new(SimConfig::square(16)).unwrap();
        let initial = frame_hash(&world.frame());
        world.reset(99);
        assert_eq!(world.seed(), 99);
        assert_ne!(frame_hash(&world.frame()), initial);
    }

    #[test]
    fn run_exports_before_each_step() {
        let mut world = LatticeGasWorld::new(SimConfig::square(8)).unwrap();
        let first = world.frame().to_rows();
        let mut rec = FrameRecorder::new();
        let summary = world.run(3, &mut rec).unwrap();

        assert_eq!(summary.frames_exported, 3);
        assert_eq!(summary.final_step, StepId(3));
        assert_eq!(summary.particle_count, world.particle_count());
        let steps: Vec<u64> = rec.frames().iter().map(|f| f.step.0).collect();
        assert_eq!(steps, vec![0, 1, 2]);
        assert_eq!(rec.frames()[0].rows, first);
    }

    #[test]
    fn sink_failure_aborts_run() {
        let mut world = LatticeGasWorld::new(SimConfig::square(8)).unwrap();
        let mut rec = FrameRecorder::with_limit(2);
        match world.run(5, &mut rec) {
            Err(RunError::Export { step, .. }) => assert_eq!(step, StepId(2)),
            other => panic!("expected Export error, got {other:?}"),
        }
        assert_eq!(world.current_step(), StepId(2));
    }

    #[test]
    fn run_configured_uses_config_steps() {
        let cfg = SimConfig {
            steps: 4,
            ..SimConfig::square(6)
        };
        let mut world = LatticeGasWorld::new(cfg).unwrap();
        let mut rec = FrameRecorder::new();
        world.run_configured(&mut rec).unwrap();
        assert_eq!(rec.len(), 4);
        assert_eq!(world.current_step(), StepId(4));
    }

    #[test]
    fn collapse_level_separates_buffer_loss_from_clashes() {
        let clean = PropagateReport {
            moved: 10,
            buffer_before: 0,
            buffer_after: 10,
        };
        assert_eq!(collapse_level(&clean), None);

        let onto_obstacle = PropagateReport {
            moved: 100,
            buffer_before: 100,
            buffer_after: 120,
        };
        assert_eq!(collapse_level(&onto_obstacle), Some(log::Level::Debug));

        let clash = PropagateReport {
            moved: 10,
            buffer_before: 0,
            buffer_after: 8,
        };
        assert_eq!(collapse_level(&clash), Some(log::Level::Warn));
    }

    #[test]
    fn first_step_loss_comes_from_obstacle_copy() {
        let mut world = LatticeGasWorld::new(SimConfig::square(20)).unwrap();
        let side = u64::from(world.obstacle().side());
        let (active, buffer) = world.pair.split_mut();
        let report = propagate(&world.space, active, buffer).unwrap();
        assert_eq!(report.buffer_before, 4 * side * side);
        assert!(report.collapsed() > 0);
        assert_eq!(collapse_level(&report), Some(log::Level::Debug));
    }

    #[test]
    fn debug_shows_state() {
        let world = LatticeGasWorld::new(empty_config(3)).unwrap();
        let s = format!("{world:?}");
        assert!(s.contains("LatticeGasWorld"));
        assert!(s.contains("current_step"));
    }

    fn open_config(rows: u32, cols: u32, density: f64, seed: u64) -> SimConfig {
        SimConfig {
            rows,
            cols,
            density,
            obstacle_fraction: 0.0,
            seed,
            seed_directions: SeedDirections::All,
            ..SimConfig::default()
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn particle_count_is_conserved_without_obstacle(
            seed in any::<u64>(),
            rows in 1u32..16,
            cols in 1u32..16,
            density in 0.0f64..=1.0,
        ) {
            let mut world = LatticeGasWorld::new(open_config(rows, cols, density, seed)).unwrap();
            let initial = world.particle_count();
            for _ in 0..8 {
                let metrics = world.step().unwrap().metrics;
                prop_assert_eq!(metrics.particle_count, initial);
                prop_assert_eq!(metrics.particles_collapsed, 0);
            }
        }

        #[test]
        fn step_applies_collision_rule_exactly_once(
            seed in any::<u64>(),
            rows in 1u32..12,
            cols in 1u32..12,
        ) {
            let mut world = LatticeGasWorld::new(open_config(rows, cols, 0.5, seed)).unwrap();

            // Replay the streaming half on a separate pair, then collide once by hand.
            let mut pair = LatticePair::new(world.space().shape());
            *pair.active_mut() = world.frame().lattice().clone();
            let space = *world.space();
            let (active, buffer) = pair.split_mut();
            propagate(&space, active, buffer).unwrap();
            pair.swap();
            let mut expected = pair.active().clone();
            let mut pairs = 0u64;
            for cell in expected.cells_mut() {
                let next = cell.collide();
                if next != *cell {
                    pairs += 1;
                }
                *cell = next;
            }

            let result = world.step().unwrap();
            prop_assert_eq!(result.metrics.collisions_resolved, pairs);
            prop_assert_eq!(result.frame.lattice(), &expected);
        }
    }
}
