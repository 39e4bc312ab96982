//! Repeated-run latency measurement
//!
//! [`measure`] times `runs` calls of one converter over a fixed input,
//! writing into the same output buffer every time. Only the converter call
//! sits between the two clock reads; shape checks happen once up front.

use crate::error::{HarnessError, Result};
use graycvt_core::{Error, GrayConverter, ResultGrid, SampleGrid};
use std::hint::black_box;
use std::time::Instant;
use tracing::debug;

/// Monotonic time source
pub trait Clock {
    type Instant: Copy;

    fn now(&self) -> Self::Instant;

    /// Seconds between two readings
    fn elapsed_secs(&self, start: Self::Instant, end: Self::Instant) -> f64;
}

/// [`Clock`] backed by [`std::time::Instant`]
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    type Instant = Instant;

    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn elapsed_secs(&self, start: Instant, end: Instant) -> f64 {
        end.saturating_duration_since(start).as_secs_f64()
    }
}

/// Latency summary for one (converter, grid) pair, in seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingStatistic {
    /// Mean per-call latency
    pub mean: f64,
    /// Sum of all samples
    pub total: f64,
    /// Fastest sample
    pub min: f64,
    /// Slowest sample
    pub max: f64,
    /// Number of timed calls
    pub runs: u32,
}

impl TimingStatistic {
    /// Reduce raw samples; `None` when there are none
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let total: f64 = samples.iter().sum();
        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some(Self {
            mean: total / samples.len() as f64,
            total,
            min,
            max,
            runs: samples.len() as u32,
        })
    }

    /// Samples per second implied by the mean latency, 0 if unmeasurable
    pub fn throughput(&self, pixels: usize) -> f64 {
        if self.mean > 0.0 {
            pixels as f64 / self.mean
        } else {
            0.0
        }
    }
}

/// Time `runs` conversions of `input` into `output`
///
/// `output` is overwritten on every run and holds the last run's result.
pub fn measure<C: Clock>(
    converter: &dyn GrayConverter,
    clock: &C,
    input: &SampleGrid,
    output: &mut ResultGrid,
    runs: u32,
) -> Result<TimingStatistic> {
    if runs == 0 {
        return Err(HarnessError::ZeroRuns);
    }
    if !output.matches(input) {
        return Err(Error::BufferSize {
            expected: input.len(),
            actual: output.len(),
        }
        .into());
    }

    let src = input.as_slice();
    let dst = output.as_mut_slice();
    let mut samples = Vec::with_capacity(runs as usize);

    for _ in 0..runs {
        let start = clock.now();
        converter.convert_slice(black_box(src), black_box(&mut *dst));
        let end = clock.now();
        samples.push(clock.elapsed_secs(start, end));
    }

    let stats = TimingStatistic::from_samples(&samples).ok_or(HarnessError::ZeroRuns)?;
    debug!(
        converter = converter.name(),
        pixels = input.len(),
        runs,
        mean = stats.mean,
        min = stats.min,
        max = stats.max,
        "measured"
    );
    Ok(stats)
}
