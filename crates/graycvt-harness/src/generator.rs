//! Input grid generation
//!
//! Random grids come from a seeded ChaCha stream. The seed defaults to the
//! wall clock and is always reported, so any run can be replayed with the
//! same inputs.

use graycvt_core::{Result, SampleGrid};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use std::time::{SystemTime, UNIX_EPOCH};

/// Deterministic fixture patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridPattern {
    /// Uniform random samples with seed
    Random(u64),
    /// Row-major ramp cycling through 0..=255
    Ramp,
    /// All zeros
    Black,
    /// All 255
    White,
}

/// Generate a fixture grid
pub fn generate_pattern(pattern: GridPattern, height: usize, width: usize) -> Result<SampleGrid> {
    SampleGrid::try_with(height, width, |data| match pattern {
        GridPattern::Random(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            rng.fill_bytes(data);
        }
        GridPattern::Ramp => {
            for (i, v) in data.iter_mut().enumerate() {
                *v = (i % 256) as u8;
            }
        }
        GridPattern::Black => {
            // Already zeros
        }
        GridPattern::White => data.fill(255),
    })
}

/// Produces random sample grids from one seeded stream
#[derive(Debug, Clone)]
pub struct ImageGenerator {
    seed: u64,
    rng: ChaCha8Rng,
}

impl ImageGenerator {
    /// Reproducible generator
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Generator seeded from the current time
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::from_seed(nanos)
    }

    /// Seed this generator was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fill a new `height x width` grid with uniform samples in `[0, 255]`
    pub fn generate(&mut self, height: usize, width: usize) -> Result<SampleGrid> {
        SampleGrid::try_with(height, width, |data| self.rng.fill_bytes(data))
    }
}
