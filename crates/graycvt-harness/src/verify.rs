//! Correctness verification
//!
//! Every result value is checked against `input / 255.0` recomputed from the
//! source grid, independent of which converter produced it. The scan stops
//! at the first index whose absolute difference exceeds [`TOLERANCE`].

use graycvt_core::{Error, GRAY8_MAX, ResultGrid, SampleGrid};
use std::fmt;

/// Maximum allowed absolute difference between expected and actual values
pub const TOLERANCE: f64 = 1e-4;

/// First value that fell outside tolerance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mismatch {
    /// Row-major index of the offending value
    pub index: usize,
    /// Value the check expected
    pub expected: f64,
    /// Value the converter produced
    pub actual: f64,
    /// Input sample at `index`
    pub sample: u8,
}

impl Mismatch {
    pub fn abs_diff(&self) -> f64 {
        (self.expected - self.actual).abs()
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error at index {}: expected {:.6}, got {:.6} (from int {})",
            self.index, self.expected, self.actual, self.sample
        )
    }
}

/// Outcome of a tolerance check
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToleranceCheck {
    Pass,
    Fail(Mismatch),
}

impl ToleranceCheck {
    pub fn passed(&self) -> bool {
        matches!(self, ToleranceCheck::Pass)
    }

    pub fn mismatch(&self) -> Option<&Mismatch> {
        match self {
            ToleranceCheck::Pass => None,
            ToleranceCheck::Fail(m) => Some(m),
        }
    }
}

fn within_tolerance(expected: f64, actual: f64) -> bool {
    // NaN compares false and therefore fails
    (expected - actual).abs() <= TOLERANCE
}

fn check_shape(input: &SampleGrid, result: &ResultGrid) -> graycvt_core::Result<()> {
    if !result.matches(input) {
        return Err(Error::BufferSize {
            expected: input.len(),
            actual: result.len(),
        });
    }
    Ok(())
}

/// Check `result` against `input[i] / 255.0` at every index
pub fn verify(input: &SampleGrid, result: &ResultGrid) -> graycvt_core::Result<ToleranceCheck> {
    check_shape(input, result)?;

    let first_bad = input
        .as_slice()
        .iter()
        .zip(result.as_slice())
        .enumerate()
        .find_map(|(index, (&sample, &actual))| {
            let expected = sample as f64 / GRAY8_MAX;
            (!within_tolerance(expected, actual)).then_some(Mismatch {
                index,
                expected,
                actual,
                sample,
            })
        });

    Ok(first_bad.map_or(ToleranceCheck::Pass, ToleranceCheck::Fail))
}

/// Check a candidate result against a baseline result for the same input
///
/// Only meaningful when the baseline itself passed [`verify`].
pub fn compare_to_baseline(
    input: &SampleGrid,
    baseline: &ResultGrid,
    candidate: &ResultGrid,
) -> graycvt_core::Result<ToleranceCheck> {
    check_shape(input, baseline)?;
    check_shape(input, candidate)?;

    let first_bad = input
        .as_slice()
        .iter()
        .zip(baseline.as_slice().iter().zip(candidate.as_slice()))
        .enumerate()
        .find_map(|(index, (&sample, (&expected, &actual)))| {
            (!within_tolerance(expected, actual)).then_some(Mismatch {
                index,
                expected,
                actual,
                sample,
            })
        });

    Ok(first_bad.map_or(ToleranceCheck::Pass, ToleranceCheck::Fail))
}
