//! `graycvt` - compare a candidate converter against the reference

use anyhow::{Context, Result};
use clap::Parser;
use graycvt_harness::config::{HarnessConfig, TestCase};
use graycvt_harness::{driver, report};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Time and verify grayscale u8 -> f64 converters
#[derive(Debug, Parser)]
#[command(name = "graycvt", version)]
struct Args {
    /// JSON config file; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Timed runs per converter per size
    #[arg(short, long)]
    runs: Option<u32>,

    /// Grid size as HxW; repeat to build the matrix
    #[arg(short, long = "size", value_name = "HxW")]
    sizes: Vec<TestCase>,

    /// Generator seed (defaults to the wall clock)
    #[arg(long)]
    seed: Option<u64>,

    /// Candidate converter: simd, lut or reference
    #[arg(long)]
    candidate: Option<String>,

    /// Edge length of the printed example corner
    #[arg(long)]
    sample_size: Option<usize>,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn into_config(self) -> Result<HarnessConfig> {
        let mut config = match &self.config {
            Some(path) => HarnessConfig::from_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => HarnessConfig::default(),
        };
        if let Some(runs) = self.runs {
            config.runs = runs;
        }
        if !self.sizes.is_empty() {
            config.sizes = self.sizes;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(candidate) = self.candidate {
            config.candidate = candidate;
        }
        if let Some(size) = self.sample_size {
            config.sample_size = size;
        }
        Ok(config)
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = args.into_config()?;
    config.validate().context("invalid configuration")?;

    let report = driver::run(&config)?;
    print!("{}", report::render(&report));
    Ok(())
}
