//! Reference vs candidate comparison
//!
//! Runs the fixed 3x4 example and then every configured grid size. Each
//! case generates one input grid, checks one output from each converter,
//! then times both converters over that same grid. Everything runs on the
//! calling thread, one step after another.

use crate::bench::{Clock, MonotonicClock, TimingStatistic, measure};
use crate::config::{HarnessConfig, TestCase};
use crate::error::Result;
use crate::generator::ImageGenerator;
use crate::verify::{ToleranceCheck, compare_to_baseline, verify};
use graycvt_core::{GrayConverter, Implementation, ResultGrid, SampleGrid, convert_grid_into};
use tracing::{info, warn};

pub const EXAMPLE_HEIGHT: usize = 3;
pub const EXAMPLE_WIDTH: usize = 4;

/// Literal 3x4 grid used for the illustrative run
pub const EXAMPLE_GRID: [u8; EXAMPLE_HEIGHT * EXAMPLE_WIDTH] =
    [64, 89, 114, 84, 140, 166, 191, 84, 216, 242, 38, 84];

/// `reference / candidate`, or 0 when the candidate reading is unusable
pub fn speedup(reference_mean: f64, candidate_mean: f64) -> f64 {
    if candidate_mean > 0.0 && candidate_mean.is_finite() {
        reference_mean / candidate_mean
    } else {
        0.0
    }
}

/// One converter's results for one case
#[derive(Debug, Clone)]
pub struct ConverterRun {
    pub name: &'static str,
    pub timing: TimingStatistic,
    pub check: ToleranceCheck,
}

/// Outputs of the illustrative example run
#[derive(Debug, Clone)]
pub struct ExampleReport {
    pub input: SampleGrid,
    pub reference: ResultGrid,
    pub candidate: ResultGrid,
    pub candidate_name: &'static str,
    /// Candidate against `input / 255`
    pub check: ToleranceCheck,
    /// Candidate against the reference output
    pub agreement: ToleranceCheck,
}

impl ExampleReport {
    pub fn passed(&self) -> bool {
        self.check.passed() && self.agreement.passed()
    }
}

/// Result of one matrix entry
#[derive(Debug, Clone)]
pub enum CaseReport {
    Completed {
        /// 1-based position in the matrix
        number: usize,
        case: TestCase,
        pixels: usize,
        reference: ConverterRun,
        candidate: ConverterRun,
        speedup: f64,
    },
    Skipped {
        number: usize,
        case: TestCase,
        reason: String,
    },
}

impl CaseReport {
    pub fn case(&self) -> TestCase {
        match self {
            CaseReport::Completed { case, .. } | CaseReport::Skipped { case, .. } => *case,
        }
    }

    /// Both converters produced correct output
    pub fn passed(&self) -> bool {
        match self {
            CaseReport::Completed {
                reference,
                candidate,
                ..
            } => reference.check.passed() && candidate.check.passed(),
            CaseReport::Skipped { .. } => false,
        }
    }
}

/// Everything one harness invocation produced
#[derive(Debug, Clone)]
pub struct RunReport {
    pub seed: u64,
    pub runs: u32,
    pub reference_name: &'static str,
    pub candidate_name: &'static str,
    pub sample_size: usize,
    pub example: Option<ExampleReport>,
    pub cases: Vec<CaseReport>,
}

impl RunReport {
    pub fn failures(&self) -> usize {
        self.cases
            .iter()
            .filter(|c| matches!(c, CaseReport::Completed { .. }) && !c.passed())
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.cases
            .iter()
            .filter(|c| matches!(c, CaseReport::Skipped { .. }))
            .count()
    }
}

/// Drives a reference and a candidate converter through the same inputs
pub struct Comparison<'a, C: Clock = MonotonicClock> {
    reference: &'a dyn GrayConverter,
    candidate: &'a dyn GrayConverter,
    clock: C,
    runs: u32,
}

impl<'a> Comparison<'a, MonotonicClock> {
    pub fn new(
        reference: &'a dyn GrayConverter,
        candidate: &'a dyn GrayConverter,
        runs: u32,
    ) -> Self {
        Self::with_clock(reference, candidate, MonotonicClock, runs)
    }
}

impl<'a, C: Clock> Comparison<'a, C> {
    pub fn with_clock(
        reference: &'a dyn GrayConverter,
        candidate: &'a dyn GrayConverter,
        clock: C,
        runs: u32,
    ) -> Self {
        Self {
            reference,
            candidate,
            clock,
            runs,
        }
    }

    /// Convert the literal example with both converters and check the candidate
    pub fn run_example(&self) -> Result<ExampleReport> {
        let input = SampleGrid::from_slice(EXAMPLE_HEIGHT, EXAMPLE_WIDTH, &EXAMPLE_GRID)?;
        let mut reference = ResultGrid::try_like(&input)?;
        let mut candidate = ResultGrid::try_like(&input)?;

        convert_grid_into(self.reference, &input, &mut reference)?;
        convert_grid_into(self.candidate, &input, &mut candidate)?;

        let check = verify(&input, &candidate)?;
        let agreement = compare_to_baseline(&input, &reference, &candidate)?;
        if let Some(m) = check.mismatch().or(agreement.mismatch()) {
            warn!(converter = self.candidate.name(), "example check failed: {m}");
        }

        Ok(ExampleReport {
            input,
            reference,
            candidate,
            candidate_name: self.candidate.name(),
            check,
            agreement,
        })
    }

    /// Run one matrix entry, skipping it if its buffers cannot be allocated
    pub fn run_case(
        &self,
        number: usize,
        case: TestCase,
        generator: &mut ImageGenerator,
    ) -> Result<CaseReport> {
        info!(number, %case, "running test case");
        match self.try_case(number, case, generator) {
            Ok(report) => Ok(report),
            Err(e) if e.is_allocation() => {
                warn!(number, %case, "skipping test case: {e}");
                Ok(CaseReport::Skipped {
                    number,
                    case,
                    reason: e.to_string(),
                })
            }
            Err(e) => Err(e),
        }
    }

    fn try_case(
        &self,
        number: usize,
        case: TestCase,
        generator: &mut ImageGenerator,
    ) -> Result<CaseReport> {
        let pixels = case.pixel_count()?;

        // One input instance shared by both converters
        let input = generator.generate(case.height, case.width)?;
        let mut reference_out = ResultGrid::try_like(&input)?;
        let mut candidate_out = ResultGrid::try_like(&input)?;

        convert_grid_into(self.reference, &input, &mut reference_out)?;
        let reference_check = verify(&input, &reference_out)?;
        convert_grid_into(self.candidate, &input, &mut candidate_out)?;
        let candidate_check = verify(&input, &candidate_out)?;

        for (name, check) in [
            (self.reference.name(), &reference_check),
            (self.candidate.name(), &candidate_check),
        ] {
            if let Some(m) = check.mismatch() {
                warn!(converter = name, %case, "correctness check failed: {m}");
            }
        }

        let reference_timing = measure(
            self.reference,
            &self.clock,
            &input,
            &mut reference_out,
            self.runs,
        )?;
        let candidate_timing = measure(
            self.candidate,
            &self.clock,
            &input,
            &mut candidate_out,
            self.runs,
        )?;

        Ok(CaseReport::Completed {
            number,
            case,
            pixels,
            speedup: speedup(reference_timing.mean, candidate_timing.mean),
            reference: ConverterRun {
                name: self.reference.name(),
                timing: reference_timing,
                check: reference_check,
            },
            candidate: ConverterRun {
                name: self.candidate.name(),
                timing: candidate_timing,
                check: candidate_check,
            },
        })
    }

    /// Run every case in order
    pub fn run_matrix(
        &self,
        sizes: &[TestCase],
        generator: &mut ImageGenerator,
    ) -> Result<Vec<CaseReport>> {
        sizes
            .iter()
            .enumerate()
            .map(|(i, case)| self.run_case(i + 1, *case, generator))
            .collect()
    }
}

/// Validate `config` and run the example plus the full matrix
pub fn run(config: &HarnessConfig) -> Result<RunReport> {
    config.validate()?;
    let candidate = config.candidate()?;
    let reference = Implementation::Reference;

    let mut generator = match config.seed {
        Some(seed) => ImageGenerator::from_seed(seed),
        None => ImageGenerator::from_clock(),
    };
    info!(
        seed = generator.seed(),
        runs = config.runs,
        candidate = candidate.name(),
        "starting comparison"
    );

    let comparison = Comparison::new(&reference, &candidate, config.runs);
    let example = match comparison.run_example() {
        Ok(example) => Some(example),
        Err(e) if e.is_allocation() => {
            warn!("skipping example: {e}");
            None
        }
        Err(e) => return Err(e),
    };
    let cases = comparison.run_matrix(&config.sizes, &mut generator)?;

    Ok(RunReport {
        seed: generator.seed(),
        runs: config.runs,
        reference_name: reference.name(),
        candidate_name: candidate.name(),
        sample_size: config.sample_size,
        example,
        cases,
    })
}
