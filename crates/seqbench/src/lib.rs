//! seqbench - micro-benchmarks for sequence containers.
//!
//! Measures how `Vec`, `LinkedList` and `VecDeque` compare on filling,
//! searching, inserting, erasing, sorting and destroying elements of several
//! sizes and copy costs, and renders the averaged timings as charts or
//! tables.
//!
//! # Quick Start
//!
//! ```
//! use seqbench::{HarnessConfig, OutputFormat};
//!
//! let config = HarnessConfig::new()
//!     .with_repeat_count(1)
//!     .with_max_size(1_000)
//!     .with_group("linear_search")
//!     .with_element_type("Small")
//!     .with_output_format(OutputFormat::Csv);
//!
//! let mut out = Vec::new();
//! let samples = seqbench::run(&config, &mut out).unwrap();
//! assert_eq!(samples.len(), 3);
//! assert!(String::from_utf8(out).unwrap().starts_with("graph,series,x,y,unit"));
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};

use thiserror::Error;

pub use seqbench_benchmark::{
    run_group, run_suite, DurationUnit, Graph, GraphReport, Group, ReportSink, Sample, Scenario,
    Series, SuitePlan, TrialRunner, ELEMENT_TYPES,
};
pub use seqbench_config::{ConfigError, HarnessConfig, OutputConfig, OutputFormat};
pub use seqbench_core::{BenchError, ContainerKind, Element, SequenceContainer};

#[cfg(feature = "console")]
pub mod console;

/// Any failure of a harness run.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Bench(#[from] BenchError),
}

/// Runs the suite selected by `config` and writes the report to `writer`.
///
/// Returns every sample in the order it was measured.
///
/// # Errors
///
/// Fails before any trial when the configuration is invalid or names an
/// unknown group or element type, and after the run when the report cannot
/// be written.
pub fn run<W: Write>(config: &HarnessConfig, writer: W) -> Result<Vec<Sample>, HarnessError> {
    let plan = plan(config)?;
    execute(config, &plan, writer)
}

/// Like [`run`], writing to the configured destination: `output.path`, or
/// standard output when unset.
///
/// The destination is opened only once the configuration has been accepted,
/// so a rejected configuration leaves an existing report file untouched.
pub fn run_to_output(config: &HarnessConfig) -> Result<Vec<Sample>, HarnessError> {
    let plan = plan(config)?;
    let writer = open_output(config)?;
    execute(config, &plan, writer)
}

fn plan(config: &HarnessConfig) -> Result<SuitePlan, HarnessError> {
    config.validate()?;
    Ok(SuitePlan::from_config(config)?)
}

fn execute<W: Write>(
    config: &HarnessConfig,
    plan: &SuitePlan,
    writer: W,
) -> Result<Vec<Sample>, HarnessError> {
    let mut runner = TrialRunner::from_config(config);
    let mut report = GraphReport::new(writer);
    let samples = run_suite(plan, &mut runner, &mut report);

    report.flush(config.output.format)?;
    Ok(samples)
}

fn open_output(config: &HarnessConfig) -> Result<Box<dyn Write>, HarnessError> {
    match &config.output.path {
        Some(path) => {
            let file = File::create(path).map_err(BenchError::from)?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}
