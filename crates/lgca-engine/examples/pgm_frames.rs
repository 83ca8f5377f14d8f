//! Run the default HPP simulation and write every frame as a binary PGM.
//!
//! ```text
//! RUST_LOG=info cargo run -p lgca-engine --example pgm_frames -- [out_dir] [steps]
//! ```
//!
//! Each pixel is the raw 4-bit cell value scaled to 0..=255.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use lgca_arena::Frame;
use lgca_core::{FrameAccess, StepId};
use lgca_engine::{DensityMap, FrameSink, LatticeGasWorld, SimConfig, SinkError, DEFAULT_BLOCK};

struct PgmSink {
    dir: PathBuf,
}

impl FrameSink for PgmSink {
    fn write_frame(&mut self, step: StepId, frame: &Frame<'_>) -> Result<(), SinkError> {
        let shape = frame.shape();
        let path = self.dir.join(format!("frame_{:05}.pgm", step.0));
        let mut out = BufWriter::new(File::create(path)?);
        write!(out, "P5\n{} {}\n255\n", shape.cols, shape.rows)?;
        let pixels: Vec<u8> = frame.cells().iter().map(|c| c.bits() * 17).collect();
        out.write_all(&pixels)?;
        out.flush()?;
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let dir = PathBuf::from(args.next().unwrap_or_else(|| "frames".to_string()));
    let mut config = SimConfig::default();
    if let Some(steps) = args.next() {
        config.steps = steps.parse()?;
    }
    fs::create_dir_all(&dir)?;

    let mut world = LatticeGasWorld::new(config)?;
    let mut sink = PgmSink { dir };
    let summary = world.run_configured(&mut sink)?;

    let density = DensityMap::from_frame(&world.frame(), DEFAULT_BLOCK)?;
    println!(
        "{} frames written, {} collisions, {} particles, mean density {:.3}",
        summary.frames_exported,
        summary.collisions_resolved,
        summary.particle_count,
        density.mean(),
    );
    Ok(())
}
