//! Full benchmark suite: every group for every element type.

use std::time::Instant;

use seqbench_config::HarnessConfig;
use seqbench_core::{
    BenchError, Element, Huge, Large, Medium, Monster, Movable, MovableNoExcept, NonMovable,
    NonTrivialArray32, NonTrivialString, Result, Small,
};
use tracing::info;

use crate::report::ReportSink;
use crate::result::Sample;
use crate::runner::TrialRunner;
use crate::scenario::{run_group, Group};

/// Element type names in run order.
pub const ELEMENT_TYPES: [&str; 9] = [
    Small::NAME,
    Medium::NAME,
    Large::NAME,
    Huge::NAME,
    Monster::NAME,
    NonTrivialString::<MovableNoExcept>::NAME,
    NonTrivialString::<Movable>::NAME,
    NonTrivialString::<NonMovable>::NAME,
    NonTrivialArray32::NAME,
];

/// The groups and element types a run covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuitePlan {
    groups: Vec<Group>,
    elements: Vec<&'static str>,
}

impl SuitePlan {
    /// Every group for every element type.
    pub fn full() -> Self {
        Self {
            groups: Group::ALL.to_vec(),
            elements: ELEMENT_TYPES.to_vec(),
        }
    }

    /// Builds the plan selected by `config`.
    ///
    /// Empty filters select everything. Selected entries keep run order,
    /// whatever order the configuration lists them in.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::Config`] when a filter names an unknown group or
    /// element type.
    ///
    /// # Example
    ///
    /// ```
    /// use seqbench_benchmark::{Group, SuitePlan};
    /// use seqbench_config::HarnessConfig;
    ///
    /// let config = HarnessConfig::new().with_group("sort").with_element_type("Huge");
    /// let plan = SuitePlan::from_config(&config).unwrap();
    /// assert_eq!(plan.groups(), &[Group::Sort]);
    /// assert_eq!(plan.elements(), &["Huge"]);
    ///
    /// let bad = HarnessConfig::new().with_group("shuffle");
    /// assert!(SuitePlan::from_config(&bad).is_err());
    /// ```
    pub fn from_config(config: &HarnessConfig) -> Result<Self> {
        for name in &config.groups {
            if Group::from_name(name).is_none() {
                return Err(BenchError::Config(format!("unknown group '{}'", name)));
            }
        }
        for name in &config.element_types {
            if !ELEMENT_TYPES.contains(&name.as_str()) {
                return Err(BenchError::Config(format!("unknown element type '{}'", name)));
            }
        }

        let groups = Group::ALL
            .into_iter()
            .filter(|g| config.groups.is_empty() || config.groups.iter().any(|n| n == g.name()))
            .collect();
        let elements = ELEMENT_TYPES
            .into_iter()
            .filter(|e| {
                config.element_types.is_empty() || config.element_types.iter().any(|n| n == e)
            })
            .collect();

        Ok(Self { groups, elements })
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn elements(&self) -> &[&'static str] {
        &self.elements
    }

    fn includes(&self, element: &str) -> bool {
        self.elements.contains(&element)
    }
}

impl Default for SuitePlan {
    fn default() -> Self {
        Self::full()
    }
}

fn run_element<T: Element>(
    plan: &SuitePlan,
    runner: &mut TrialRunner,
    sink: &mut dyn ReportSink,
    samples: &mut Vec<Sample>,
) {
    if !plan.includes(T::NAME) {
        return;
    }
    for &group in plan.groups() {
        samples.extend(run_group::<T>(group, runner, sink));
    }
}

/// Runs `plan` element type by element type, each through every selected
/// group, streaming results into `sink`.
///
/// The sink is not flushed.
pub fn run_suite(plan: &SuitePlan, runner: &mut TrialRunner, sink: &mut dyn ReportSink) -> Vec<Sample> {
    info!(
        event = "run_start",
        groups = plan.groups().len(),
        element_types = plan.elements().len(),
        repeat_count = runner.repeat_count(),
        seed = runner.seed(),
    );

    let start = Instant::now();
    let mut samples = Vec::new();
    run_element::<Small>(plan, runner, sink, &mut samples);
    run_element::<Medium>(plan, runner, sink, &mut samples);
    run_element::<Large>(plan, runner, sink, &mut samples);
    run_element::<Huge>(plan, runner, sink, &mut samples);
    run_element::<Monster>(plan, runner, sink, &mut samples);
    run_element::<NonTrivialString<MovableNoExcept>>(plan, runner, sink, &mut samples);
    run_element::<NonTrivialString<Movable>>(plan, runner, sink, &mut samples);
    run_element::<NonTrivialString<NonMovable>>(plan, runner, sink, &mut samples);
    run_element::<NonTrivialArray32>(plan, runner, sink, &mut samples);

    let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
    info!(event = "run_end", samples = samples.len(), duration_ms);
    samples
}
