//! Row-major sample and result grids
//!
//! A [`SampleGrid`] holds the 8-bit input image and is immutable once built.
//! A [`ResultGrid`] holds the `f64` output of one conversion and has the same
//! shape as the grid it was converted from.

use crate::{Error, Result};

/// Validate a `(height, width)` pair and return the element count
pub fn pixel_count(height: usize, width: usize) -> Result<usize> {
    if height == 0 || width == 0 {
        return Err(Error::InvalidDimensions { height, width });
    }
    height
        .checked_mul(width)
        .ok_or(Error::InvalidDimensions { height, width })
}

/// Reserve exactly `len` elements, reporting failure instead of aborting
fn try_filled<T: Copy>(len: usize, value: T) -> Result<Vec<T>> {
    let mut data = Vec::new();
    data.try_reserve_exact(len).map_err(|_| Error::Allocation {
        elements: len,
        bytes: len.saturating_mul(size_of::<T>()),
    })?;
    data.resize(len, value);
    Ok(data)
}

/// Grayscale 8-bit input image, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleGrid {
    height: usize,
    width: usize,
    data: Vec<u8>,
}

impl SampleGrid {
    /// Build a grid from existing samples
    pub fn new(height: usize, width: usize, data: Vec<u8>) -> Result<Self> {
        let expected = pixel_count(height, width)?;
        if data.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            height,
            width,
            data,
        })
    }

    /// Copy a literal slice into a new grid
    pub fn from_slice(height: usize, width: usize, data: &[u8]) -> Result<Self> {
        let expected = pixel_count(height, width)?;
        if data.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        let mut owned = try_filled(expected, 0u8)?;
        owned.copy_from_slice(data);
        Ok(Self {
            height,
            width,
            data: owned,
        })
    }

    /// Allocate a grid and fill it through `fill`
    ///
    /// Allocation is fallible; the closure only runs once the buffer exists.
    pub fn try_with(height: usize, width: usize, fill: impl FnOnce(&mut [u8])) -> Result<Self> {
        let len = pixel_count(height, width)?;
        let mut data = try_filled(len, 0u8)?;
        fill(&mut data);
        Ok(Self {
            height,
            width,
            data,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of samples (`height * width`)
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false for a constructed grid
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Sample at `(row, col)`, `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        (row < self.height && col < self.width).then(|| self.data[row * self.width + col])
    }
}

/// Converted `f64` image, same shape as its source [`SampleGrid`]
#[derive(Debug, Clone, PartialEq)]
pub struct ResultGrid {
    height: usize,
    width: usize,
    data: Vec<f64>,
}

impl ResultGrid {
    /// Allocate a zeroed result grid
    pub fn try_new(height: usize, width: usize) -> Result<Self> {
        let len = pixel_count(height, width)?;
        Ok(Self {
            height,
            width,
            data: try_filled(len, 0.0f64)?,
        })
    }

    /// Allocate a zeroed result grid shaped like `source`
    pub fn try_like(source: &SampleGrid) -> Result<Self> {
        Self::try_new(source.height(), source.width())
    }

    /// Wrap existing values
    pub fn from_vec(height: usize, width: usize, data: Vec<f64>) -> Result<Self> {
        let expected = pixel_count(height, width)?;
        if data.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            height,
            width,
            data,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Output slice handed to a converter
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Value at `(row, col)`, `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        (row < self.height && col < self.width).then(|| self.data[row * self.width + col])
    }

    /// Check that this grid can hold the conversion of `source`
    pub fn matches(&self, source: &SampleGrid) -> bool {
        self.height == source.height() && self.width == source.width()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }
}
