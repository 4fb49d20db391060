//! Benchmark runner for seqbench.
//!
//! This crate turns the policies of `seqbench-core` into timed trials and
//! streams the averaged results into a report sink.
//!
//! # Overview
//!
//! - [`TrialRunner`] repeats timed trials per size and averages them
//! - [`Scenario`] binds a container type, a creation policy and an operation
//!   sequence under a series label
//! - [`Group`] is one named chart of the fixed scenario table
//! - [`GraphReport`] collects graphs and renders them on flush
//!
//! # Example
//!
//! ```
//! use seqbench_benchmark::{DurationUnit, GraphReport, Scenario, TrialRunner};
//! use seqbench_core::{FilledRandom, Small, Sort};
//!
//! let mut runner = TrialRunner::new(5, 5489);
//! let mut report = GraphReport::new(Vec::new());
//! let scenario = Scenario::<Vec<Small>, _, _>::new("vector", FilledRandom, Sort);
//!
//! let samples = runner.run(&scenario, DurationUnit::Microseconds, &[1000, 2000], &mut report);
//! assert_eq!(samples.len(), 2);
//! assert_eq!(samples[0].x_label, "1000");
//! ```

mod report;
mod result;
mod runner;
mod scenario;
mod suite;

pub use report::{CsvExporter, GoogleChartsPage, Graph, GraphReport, MarkdownReport, ReportSink, Series};
pub use result::{average, DurationUnit, Sample};
pub use runner::TrialRunner;
pub use scenario::{graph_id, graph_title, run_group, Group, Scenario};
pub use suite::{run_suite, SuitePlan, ELEMENT_TYPES};
