//! Parity of the built-in converters against `input / 255`
//!
//! The reference must match division bit for bit; every converter must pass
//! the verifier on random and fixture grids and be deterministic.

use graycvt_core::{GrayConverter, Implementation, ResultGrid, SampleGrid, convert_grid};
use graycvt_harness::driver::{EXAMPLE_GRID, EXAMPLE_HEIGHT, EXAMPLE_WIDTH};
use graycvt_harness::generator::{GridPattern, ImageGenerator, generate_pattern};
use graycvt_harness::verify::verify;

/// Shapes covering single pixels, thin strips and chunk remainders
const SHAPES: &[(usize, usize)] = &[(1, 1), (1, 7), (7, 1), (3, 4), (10, 10), (33, 17), (64, 64)];

#[test]
fn reference_matches_division_exactly() {
    let mut generator = ImageGenerator::from_seed(0x5eed);
    for &(h, w) in SHAPES {
        let input = generator.generate(h, w).unwrap();
        let out = convert_grid(&Implementation::Reference, &input).unwrap();
        for (v, actual) in input.as_slice().iter().zip(out.as_slice()) {
            assert_eq!(*actual, *v as f64 / 255.0, "{h}x{w} sample {v}");
        }
    }
}

#[test]
fn every_converter_passes_verification() {
    let mut generator = ImageGenerator::from_seed(11);
    for imp in Implementation::ALL {
        for &(h, w) in SHAPES {
            let input = generator.generate(h, w).unwrap();
            let out = convert_grid(&imp, &input).unwrap();
            let check = verify(&input, &out).unwrap();
            assert!(check.passed(), "{imp} {h}x{w}: {:?}", check.mismatch());
        }
        for pattern in [GridPattern::Ramp, GridPattern::Black, GridPattern::White] {
            let input = generate_pattern(pattern, 16, 16).unwrap();
            let out = convert_grid(&imp, &input).unwrap();
            assert!(verify(&input, &out).unwrap().passed(), "{imp} {pattern:?}");
        }
    }
}

#[test]
fn repeated_conversion_is_identical_and_input_untouched() {
    let input = generate_pattern(GridPattern::Random(99), 37, 29).unwrap();
    let snapshot = input.clone();
    for imp in Implementation::ALL {
        let first = convert_grid(&imp, &input).unwrap();
        let second = convert_grid(&imp, &input).unwrap();
        assert_eq!(first, second, "{imp}");
    }
    assert_eq!(input, snapshot);
}

#[test]
fn literal_example_grid() {
    let input = SampleGrid::from_slice(EXAMPLE_HEIGHT, EXAMPLE_WIDTH, &EXAMPLE_GRID).unwrap();
    let expected = [
        64.0 / 255.0,
        89.0 / 255.0,
        114.0 / 255.0,
        84.0 / 255.0,
        140.0 / 255.0,
        166.0 / 255.0,
        191.0 / 255.0,
        84.0 / 255.0,
        216.0 / 255.0,
        242.0 / 255.0,
        38.0 / 255.0,
        84.0 / 255.0,
    ];
    for imp in Implementation::ALL {
        let out = convert_grid(&imp, &input).unwrap();
        for (i, (e, a)) in expected.iter().zip(out.as_slice()).enumerate() {
            assert!((e - a).abs() <= 1e-4, "{imp} index {i}: {e} vs {a}");
        }
    }
    let reference = convert_grid(&Implementation::Reference, &input).unwrap();
    assert_eq!(reference.as_slice(), &expected);
}

#[test]
fn single_pixel_extremes() {
    for imp in Implementation::ALL {
        let black = SampleGrid::from_slice(1, 1, &[0]).unwrap();
        let white = SampleGrid::from_slice(1, 1, &[255]).unwrap();
        assert_eq!(convert_grid(&imp, &black).unwrap().as_slice(), &[0.0], "{imp}");
        assert_eq!(convert_grid(&imp, &white).unwrap().as_slice(), &[1.0], "{imp}");
    }
}

#[test]
fn converters_only_write_their_own_range() {
    let input = [10u8, 20, 30];
    for imp in Implementation::ALL {
        let mut output = [f64::MAX; 5];
        imp.convert_slice(&input, &mut output);
        assert_eq!(output[3], f64::MAX, "{imp}");
        assert_eq!(output[4], f64::MAX, "{imp}");
    }
}

#[test]
fn reused_output_buffer_is_fully_overwritten() {
    let input = generate_pattern(GridPattern::White, 9, 9).unwrap();
    let mut output = ResultGrid::try_like(&input).unwrap();
    output.as_mut_slice().fill(-3.0);
    for imp in Implementation::ALL {
        graycvt_core::convert_grid_into(&imp, &input, &mut output).unwrap();
        assert!(output.as_slice().iter().all(|&v| v == 1.0), "{imp}");
    }
}
