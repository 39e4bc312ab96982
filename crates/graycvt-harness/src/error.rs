//! Harness error types

use thiserror::Error;

/// Result type for harness operations
pub type Result<T> = std::result::Result<T, HarnessError>;

/// Errors raised while configuring or running a comparison
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum HarnessError {
    /// Benchmark run count of zero would divide by zero
    #[error("Run count must be at least 1")]
    ZeroRuns,

    /// No test cases configured
    #[error("Test matrix is empty")]
    EmptyMatrix,

    /// Any other rejected configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Grid or converter error from the core crate
    #[error(transparent)]
    Core(#[from] graycvt_core::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed configuration file
    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HarnessError {
    /// Allocation failures skip a test case instead of aborting the run
    pub fn is_allocation(&self) -> bool {
        matches!(
            self,
            HarnessError::Core(graycvt_core::Error::Allocation { .. })
        )
    }
}
