//! Human-readable run report

use crate::driver::{CaseReport, ConverterRun, ExampleReport, RunReport};
use graycvt_core::{ResultGrid, SampleGrid, simd};
use std::fmt::{self, Write};

/// Top-left corner of input and output, at most `size x size`
pub fn write_sample_dump(
    out: &mut impl Write,
    input: &SampleGrid,
    output: &ResultGrid,
    size: usize,
) -> fmt::Result {
    let rows = size.min(input.height());
    let cols = size.min(input.width());

    writeln!(out, "\nSample Input (uint8):")?;
    for row in 0..rows {
        for col in 0..cols {
            if let Some(v) = input.get(row, col) {
                write!(out, "{v:3} ")?;
            }
        }
        writeln!(out)?;
    }

    writeln!(out, "\nSample Output (double):")?;
    for row in 0..rows {
        for col in 0..cols {
            if let Some(v) = output.get(row, col) {
                write!(out, "{v:.2} ")?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

fn yes_no(passed: bool) -> &'static str {
    if passed { "YES" } else { "NO" }
}

fn write_example(out: &mut impl Write, example: &ExampleReport, size: usize) -> fmt::Result {
    writeln!(
        out,
        "--- Testing with example data ({}x{}) ---",
        example.input.height(),
        example.input.width()
    )?;
    write_sample_dump(out, &example.input, &example.candidate, size)?;

    let verdict = if example.passed() { "PASSED" } else { "FAILED" };
    writeln!(out, "\nCorrectness check {verdict} for example data!")?;
    if let Some(m) = example.check.mismatch() {
        writeln!(out, "  {m}")?;
    }
    if let Some(m) = example.agreement.mismatch() {
        writeln!(out, "  vs reference: {m}")?;
    }
    Ok(())
}

fn write_converter(out: &mut impl Write, run: &ConverterRun) -> fmt::Result {
    writeln!(
        out,
        "{:<10} time: {:.9} seconds | Correct: {}",
        run.name,
        run.timing.mean,
        yes_no(run.check.passed())
    )?;
    if let Some(m) = run.check.mismatch() {
        writeln!(out, "  {m}")?;
    }
    Ok(())
}

fn write_case(out: &mut impl Write, case: &CaseReport) -> fmt::Result {
    match case {
        CaseReport::Completed {
            number,
            case,
            pixels,
            reference,
            candidate,
            speedup,
        } => {
            writeln!(out, "--- Test {number}: {case} ({pixels} pixels) ---")?;
            write_converter(out, reference)?;
            write_converter(out, candidate)?;
            writeln!(
                out,
                "Speedup ({}/{}): {speedup:.2}x",
                reference.name, candidate.name
            )?;
        }
        CaseReport::Skipped {
            number,
            case,
            reason,
        } => {
            writeln!(out, "--- Test {number}: {case} ---")?;
            writeln!(out, "Skipped: {reason}")?;
        }
    }
    writeln!(out)
}

/// Render the full report
pub fn render(report: &RunReport) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_report(&mut out, report);
    out
}

pub fn write_report(out: &mut impl Write, report: &RunReport) -> fmt::Result {
    writeln!(out, "=== Grayscale Image Converter: uint8 to double ===")?;
    writeln!(
        out,
        "Comparison: {} vs {} ({})",
        report.reference_name,
        report.candidate_name,
        simd::active_features()
    )?;
    writeln!(out, "Seed: {}\n", report.seed)?;

    match &report.example {
        Some(example) => write_example(out, example, report.sample_size)?,
        None => writeln!(out, "--- Example data skipped ---")?,
    }

    writeln!(
        out,
        "\n\n=== Performance Comparison ({} vs {}) ===",
        report.reference_name, report.candidate_name
    )?;
    writeln!(out, "Running {} iterations for each size...\n", report.runs)?;
    for case in &report.cases {
        write_case(out, case)?;
    }

    writeln!(
        out,
        "=== Testing Complete: {} case(s), {} failed, {} skipped ===",
        report.cases.len(),
        report.failures(),
        report.skipped()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bench::TimingStatistic;
    use crate::config::TestCase;
    use crate::verify::{Mismatch, ToleranceCheck};

    fn timing(mean: f64) -> TimingStatistic {
        TimingStatistic {
            mean,
            total: mean * 30.0,
            min: mean,
            max: mean,
            runs: 30,
        }
    }

    #[test]
    fn test_sample_dump_clips_to_grid() {
        let input = SampleGrid::from_slice(1, 2, &[0, 255]).unwrap();
        let output = ResultGrid::from_vec(1, 2, vec![0.0, 1.0]).unwrap();
        let mut text = String::new();
        write_sample_dump(&mut text, &input, &output, 4).unwrap();
        assert!(text.contains("  0 255 \n"), "{text}");
        assert!(text.contains("0.00 1.00 \n"), "{text}");
    }

    #[test]
    fn test_case_lines() {
        let report = RunReport {
            seed: 9,
            runs: 30,
            reference_name: "reference",
            candidate_name: "simd",
            sample_size: 4,
            example: None,
            cases: vec![
                CaseReport::Completed {
                    number: 1,
                    case: TestCase::new(10, 10),
                    pixels: 100,
                    reference: ConverterRun {
                        name: "reference",
                        timing: timing(2e-6),
                        check: ToleranceCheck::Pass,
                    },
                    candidate: ConverterRun {
                        name: "simd",
                        timing: timing(1e-6),
                        check: ToleranceCheck::Fail(Mismatch {
                            index: 5,
                            expected: 0.5,
                            actual: 0.0,
                            sample: 128,
                        }),
                    },
                    speedup: 2.0,
                },
                CaseReport::Skipped {
                    number: 2,
                    case: TestCase::new(1000, 1000),
                    reason: "Allocation of 8 elements (8 bytes) failed".into(),
                },
            ],
        };

        let text = render(&report);
        assert!(text.contains("--- Test 1: 10x10 (100 pixels) ---"));
        assert!(text.contains("reference  time: 0.000002000 seconds | Correct: YES"));
        assert!(text.contains("simd       time: 0.000001000 seconds | Correct: NO"));
        assert!(text.contains("Error at index 5"));
        assert!(text.contains("Speedup (reference/simd): 2.00x"));
        assert!(text.contains("Skipped: Allocation"));
        assert!(text.contains("2 case(s), 1 failed, 1 skipped"));
    }
}
