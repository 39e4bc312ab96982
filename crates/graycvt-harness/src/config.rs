//! Harness configuration
//!
//! Defaults reproduce the standard comparison: 30 runs over 10x10, 100x100
//! and 1000x1000 grids with the SIMD converter as candidate. A JSON file can
//! override any field; missing fields keep their defaults.

use crate::error::{HarnessError, Result};
use graycvt_core::{Implementation, pixel_count};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Default number of timed runs per converter
pub const DEFAULT_RUNS: u32 = 30;

/// Default edge length of the sample dump
pub const DEFAULT_SAMPLE_SIZE: usize = 4;

/// One grid size in the test matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub height: usize,
    pub width: usize,
}

impl TestCase {
    pub const fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    /// `height * width`, rejecting zero and overflowing sizes
    pub fn pixel_count(&self) -> Result<usize> {
        Ok(pixel_count(self.height, self.width)?)
    }
}

impl fmt::Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

impl FromStr for TestCase {
    type Err = HarnessError;

    /// Parses `HxW`, e.g. `480x640`
    fn from_str(s: &str) -> Result<Self> {
        let (h, w) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| HarnessError::InvalidConfig(format!("size '{s}' is not HxW")))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|e| HarnessError::InvalidConfig(format!("size '{s}': {e}")))
        };
        Ok(Self::new(parse(h)?, parse(w)?))
    }
}

/// Standard test matrix
pub const DEFAULT_MATRIX: [TestCase; 3] = [
    TestCase::new(10, 10),
    TestCase::new(100, 100),
    TestCase::new(1000, 1000),
];

/// Everything a comparison run needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Timed runs per converter per case
    pub runs: u32,
    /// Ordered grid sizes to benchmark
    pub sizes: Vec<TestCase>,
    /// Fixed generator seed; wall clock when absent
    pub seed: Option<u64>,
    /// Converter compared against the reference, by name
    pub candidate: String,
    /// Edge length of the printed sample corner
    pub sample_size: usize,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            runs: DEFAULT_RUNS,
            sizes: DEFAULT_MATRIX.to_vec(),
            seed: None,
            candidate: Implementation::Simd.to_string(),
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}

impl HarnessConfig {
    /// Load a JSON config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Resolve the candidate name to a built-in converter
    pub fn candidate(&self) -> Result<Implementation> {
        Implementation::from_name(&self.candidate).ok_or_else(|| {
            HarnessError::InvalidConfig(format!("unknown candidate '{}'", self.candidate))
        })
    }

    /// Reject values that would make a run meaningless
    pub fn validate(&self) -> Result<()> {
        if self.runs == 0 {
            return Err(HarnessError::ZeroRuns);
        }
        if self.sizes.is_empty() {
            return Err(HarnessError::EmptyMatrix);
        }
        for case in &self.sizes {
            case.pixel_count()?;
        }
        self.candidate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HarnessConfig::default();
        assert_eq!(config.runs, 30);
        assert_eq!(
            config.sizes,
            vec![
                TestCase::new(10, 10),
                TestCase::new(100, 100),
                TestCase::new(1000, 1000)
            ]
        );
        assert_eq!(config.candidate().unwrap(), Implementation::Simd);
        config.validate().unwrap();
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            HarnessConfig::from_json(r#"{"runs": 5, "sizes": [{"height": 3, "width": 7}]}"#)
                .unwrap();
        assert_eq!(config.runs, 5);
        assert_eq!(config.sizes, vec![TestCase::new(3, 7)]);
        assert_eq!(config.sample_size, DEFAULT_SAMPLE_SIZE);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let zero_runs = HarnessConfig {
            runs: 0,
            ..Default::default()
        };
        assert!(matches!(zero_runs.validate(), Err(HarnessError::ZeroRuns)));

        let empty = HarnessConfig {
            sizes: Vec::new(),
            ..Default::default()
        };
        assert!(matches!(empty.validate(), Err(HarnessError::EmptyMatrix)));

        let flat = HarnessConfig {
            sizes: vec![TestCase::new(10, 0)],
            ..Default::default()
        };
        assert!(matches!(flat.validate(), Err(HarnessError::Core(_))));

        let unknown = HarnessConfig {
            candidate: "asm".into(),
            ..Default::default()
        };
        assert!(matches!(
            unknown.validate(),
            Err(HarnessError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_parse_test_case() {
        assert_eq!("480x640".parse::<TestCase>().unwrap(), TestCase::new(480, 640));
        assert_eq!("3X4".parse::<TestCase>().unwrap(), TestCase::new(3, 4));
        assert!("480".parse::<TestCase>().is_err());
        assert!("ax4".parse::<TestCase>().is_err());
        assert_eq!(TestCase::new(3, 4).to_string(), "3x4");
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            HarnessConfig::from_json("{runs: }"),
            Err(HarnessError::Json(_))
        ));
    }
}
