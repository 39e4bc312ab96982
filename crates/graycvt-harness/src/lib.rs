//! # graycvt-harness
//!
//! Correctness and timing harness for graycvt converters.
//!
//! This crate provides:
//! - Reproducible random input grids
//! - Tolerance checks against `input / 255` with first-failure diagnostics
//! - Repeated-run latency measurement on a monotonic clock
//! - A driver comparing a reference and a candidate over a matrix of sizes
//! - A plain-text report
//!
//! ## Flow per test case
//!
//! 1. Generate one input grid
//! 2. Convert once with each converter and verify both outputs
//! 3. Time each converter over the same grid and run count
//! 4. Report mean latencies and the reference/candidate speedup

pub mod bench;
pub mod config;
pub mod driver;
pub mod error;
pub mod generator;
pub mod report;
pub mod verify;

pub use bench::{Clock, MonotonicClock, TimingStatistic, measure};
pub use config::{HarnessConfig, TestCase};
pub use driver::{CaseReport, Comparison, RunReport, run, speedup};
pub use error::{HarnessError, Result};
pub use generator::{GridPattern, ImageGenerator, generate_pattern};
pub use verify::{Mismatch, TOLERANCE, ToleranceCheck, verify};
