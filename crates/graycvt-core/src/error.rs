//! Error types for graycvt

use thiserror::Error;

/// Result type for graycvt operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in graycvt operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Height or width is zero, or their product overflows
    #[error("Invalid grid dimensions: {height}x{width}")]
    InvalidDimensions { height: usize, width: usize },

    /// Buffer size mismatch
    #[error("Buffer size mismatch: expected {expected}, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    /// Buffer could not be reserved
    #[error("Allocation of {elements} elements ({bytes} bytes) failed")]
    Allocation { elements: usize, bytes: usize },
}
