//! # graycvt - grayscale u8 to f64 conversion
//!
//! Converts row-major 8-bit grayscale grids into `f64` grids in `[0, 1]`
//! by dividing every sample by 255.
//!
//! ## Converters
//!
//! - **Reference**: scalar division, the ground truth
//! - **Simd**: reciprocal multiply, dispatched to AVX2 / SSE4.1 / NEON
//! - **Lut**: 256-entry table lookup
//!
//! All of them implement [`GrayConverter`], so callers can swap one for
//! another behind a single `&dyn GrayConverter`.
//!
//! ## Quick Start
//!
//! ```
//! use graycvt_core::{GrayConverter, Implementation, SampleGrid, convert_grid};
//!
//! let grid = SampleGrid::from_slice(1, 3, &[0, 51, 255]).unwrap();
//! let out = convert_grid(&Implementation::Simd, &grid).unwrap();
//! assert_eq!(out.as_slice()[2], 1.0);
//!
//! let mut raw = [0.0f64; 3];
//! Implementation::Reference.convert(1, 3, &[0, 51, 255], &mut raw).unwrap();
//! assert_eq!(raw[1], 0.2);
//! ```

pub mod convert;
pub mod error;
pub mod grid;
pub mod simd;

pub use convert::{
    GRAY8_MAX, GrayConverter, Implementation, convert_grid, convert_grid_into, reference_convert,
};
pub use error::{Error, Result};
pub use grid::{ResultGrid, SampleGrid, pixel_count};

/// Version of graycvt
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
