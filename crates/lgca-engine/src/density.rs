//! Coarse-grained density maps.
//!
//! Occupancy averaged over square `block × block` tiles, for plotting the
//! macroscopic flow. Each value is `particles / (4 * cells_in_tile)`, so it
//! lies in `[0, 1]`. Tiles on the right and bottom edges may be partial and
//! are normalised by their actual cell count.

use lgca_core::FrameAccess;

/// Tile edge used by default, matching a 4×4 sub-grid.
pub const DEFAULT_BLOCK: u32 = 4;

/// Block-averaged occupancy of one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct DensityMap {
    block: u32,
    rows: u32,
    cols: u32,
    values: Vec<f64>,
}

impl DensityMap {
    /// Average `frame` over `block × block` tiles.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `block` is zero.
    pub fn from_frame<F: FrameAccess + ?Sized>(frame: &F, block: u32) -> Result<Self, String> {
        if block == 0 {
            return Err("block size must be at least 1".to_string());
        }
        let shape = frame.shape();
        let rows = shape.rows.div_ceil(block);
        let cols = shape.cols.div_ceil(block);

        let mut particles = vec![0u64; rows as usize * cols as usize];
        let mut cells = vec![0u64; particles.len()];
        for (i, cell) in frame.cells().iter().enumerate() {
            let r = (i / shape.cols as usize) as u32 / block;
            let c = (i % shape.cols as usize) as u32 / block;
            let t = (r * cols + c) as usize;
            particles[t] += u64::from(cell.particle_count());
            cells[t] += 1;
        }

        let values = particles
            .iter()
            .zip(&cells)
            .map(|(&p, &n)| p as f64 / (4 * n) as f64)
            .collect();
        Ok(Self {
            block,
            rows,
            cols,
            values,
        })
    }

    /// Tile edge length.
    pub fn block(&self) -> u32 {
        self.block
    }

    /// Number of tile rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of tile columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Tile density at `(row, col)`, or `None` if out of range.
    pub fn get(&self, row: u32, col: u32) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.values.get((row * self.cols + col) as usize).copied()
    }

    /// All tile densities, row-major.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Mean over all tiles, weighted equally.
    pub fn mean(&self) -> f64 {
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }
}
