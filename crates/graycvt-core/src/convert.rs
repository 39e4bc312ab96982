//! Grayscale conversion contract and the shipped implementations
//!
//! Every converter maps `output[i] = input[i] / 255.0` over a row-major grid.
//! [`Reference`](Implementation::Reference) is the plain division and the
//! ground truth; the other variants are candidates expected to agree with it
//! up to rounding in the last bits.

use crate::grid::{ResultGrid, SampleGrid, pixel_count};
use crate::simd;
use crate::{Error, Result};
use std::fmt;

/// Full-scale value of an 8-bit sample
pub const GRAY8_MAX: f64 = 255.0;

/// A u8 → f64 grayscale converter
///
/// Implementations must not read past `input`, must not write past
/// `output`, and must leave `input` unmodified.
pub trait GrayConverter {
    /// Short name used in reports
    fn name(&self) -> &'static str;

    /// Convert `input` into the first `input.len()` slots of `output`
    ///
    /// Callers guarantee `output.len() >= input.len()`.
    fn convert_slice(&self, input: &[u8], output: &mut [f64]);

    /// Convert a `height x width` grid after checking both buffer lengths
    fn convert(&self, height: usize, width: usize, input: &[u8], output: &mut [f64]) -> Result<()> {
        let expected = pixel_count(height, width)?;
        if input.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: input.len(),
            });
        }
        if output.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: output.len(),
            });
        }
        self.convert_slice(input, output);
        Ok(())
    }
}

/// Built-in converters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Implementation {
    /// Scalar loop dividing by 255
    Reference,
    /// Reciprocal multiply with runtime CPU dispatch
    #[default]
    Simd,
    /// 256-entry lookup table
    Lut,
}

impl Implementation {
    /// All built-in converters, reference first
    pub const ALL: [Implementation; 3] = [
        Implementation::Reference,
        Implementation::Simd,
        Implementation::Lut,
    ];

    /// Parse a converter name as printed by [`GrayConverter::name`]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|imp| imp.name().eq_ignore_ascii_case(name))
    }
}

impl GrayConverter for Implementation {
    fn name(&self) -> &'static str {
        match self {
            Implementation::Reference => "reference",
            Implementation::Simd => "simd",
            Implementation::Lut => "lut",
        }
    }

    fn convert_slice(&self, input: &[u8], output: &mut [f64]) {
        match self {
            Implementation::Reference => reference_convert(input, output),
            Implementation::Simd => simd::gray8_to_f64_scaled_batch(input, output),
            Implementation::Lut => simd::gray8_to_f64_lut_batch(input, output),
        }
    }
}

impl fmt::Display for Implementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ground-truth conversion: `output[i] = input[i] / 255.0`
pub fn reference_convert(input: &[u8], output: &mut [f64]) {
    assert!(output.len() >= input.len());

    for (inp, out) in input.iter().zip(output.iter_mut()) {
        *out = *inp as f64 / GRAY8_MAX;
    }
}

/// Convert a whole grid into a freshly allocated result
pub fn convert_grid(converter: &dyn GrayConverter, input: &SampleGrid) -> Result<ResultGrid> {
    let mut output = ResultGrid::try_like(input)?;
    converter.convert(
        input.height(),
        input.width(),
        input.as_slice(),
        output.as_mut_slice(),
    )?;
    Ok(output)
}

/// Convert a grid into an existing result buffer of the same shape
pub fn convert_grid_into(
    converter: &dyn GrayConverter,
    input: &SampleGrid,
    output: &mut ResultGrid,
) -> Result<()> {
    if !output.matches(input) {
        return Err(Error::BufferSize {
            expected: input.len(),
            actual: output.len(),
        });
    }
    converter.convert(
        input.height(),
        input.width(),
        input.as_slice(),
        output.as_mut_slice(),
    )
}
