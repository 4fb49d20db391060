//! Scenario table.
//!
//! A group is one chart per element type. Each group lists its scenarios,
//! one per report series, and the sizes and unit they are measured at.

use std::collections::{LinkedList, VecDeque};
use std::fmt;
use std::marker::PhantomData;

use seqbench_core::{
    CreatePolicy, Element, EmplaceBack, EmplaceFront, Empty, Erase, FillBack, FillFront,
    FilledRandom, Find, Insert, Operation, RandomSortedInsert, RemoveErase, ReserveSize,
    SequenceContainer, SmartDelete, SmartFilled, Sort,
};
use tracing::info;

use crate::report::ReportSink;
use crate::result::{DurationUnit, Sample};
use crate::runner::TrialRunner;

/// A container type, a creation policy and an operation sequence measured
/// together under one series label.
pub struct Scenario<C, P, O> {
    label: &'static str,
    create: P,
    operation: O,
    _container: PhantomData<fn() -> C>,
}

impl<C, P, O> Scenario<C, P, O>
where
    C: SequenceContainer,
    P: CreatePolicy<C>,
    O: Operation<C, P::Subject>,
{
    /// Creates a scenario.
    pub fn new(label: &'static str, create: P, operation: O) -> Self {
        Self {
            label,
            create,
            operation,
            _container: PhantomData,
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn create(&self) -> &P {
        &self.create
    }

    pub fn operation(&self) -> &O {
        &self.operation
    }
}

/// Named benchmark group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    FillBack,
    EmplaceBack,
    FillFront,
    EmplaceFront,
    LinearSearch,
    RandomInsert,
    RandomRemove,
    Sort,
    Destruction,
    NumberCrunching,
}

impl Group {
    /// Every group in run order.
    pub const ALL: [Group; 10] = [
        Self::FillBack,
        Self::EmplaceBack,
        Self::FillFront,
        Self::EmplaceFront,
        Self::LinearSearch,
        Self::RandomInsert,
        Self::RandomRemove,
        Self::Sort,
        Self::Destruction,
        Self::NumberCrunching,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::FillBack => "fill_back",
            Self::EmplaceBack => "emplace_back",
            Self::FillFront => "fill_front",
            Self::EmplaceFront => "emplace_front",
            Self::LinearSearch => "linear_search",
            Self::RandomInsert => "random_insert",
            Self::RandomRemove => "random_remove",
            Self::Sort => "sort",
            Self::Destruction => "destruction",
            Self::NumberCrunching => "number_crunching",
        }
    }

    /// Looks a group up by its name.
    ///
    /// # Example
    ///
    /// ```
    /// use seqbench_benchmark::Group;
    ///
    /// assert_eq!(Group::from_name("sort"), Some(Group::Sort));
    /// assert_eq!(Group::from_name("bogus"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Group> {
        Self::ALL.into_iter().find(|group| group.name() == name)
    }

    /// Unit the group's averages are reported in.
    pub fn unit(self) -> DurationUnit {
        match self {
            Self::RandomInsert | Self::RandomRemove | Self::Sort | Self::NumberCrunching => {
                DurationUnit::Milliseconds
            }
            _ => DurationUnit::Microseconds,
        }
    }

    /// Ten evenly spaced sizes, starting at and stepping by the group's base.
    pub fn sizes(self) -> Vec<usize> {
        let step = match self {
            Self::FillBack | Self::EmplaceBack | Self::Sort | Self::Destruction => 100_000,
            Self::LinearSearch => 1_000,
            _ => 10_000,
        };
        (1..=10).map(|k| k * step).collect()
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the chart title of `group` for the element named `element`.
pub fn graph_title(group: Group, element: &str) -> String {
    format!("{} - {}", group.name(), element)
}

/// Derives an identifier from a title, replacing every character that is
/// not an ASCII letter, digit or underscore with `_`.
///
/// # Example
///
/// ```
/// use seqbench_benchmark::graph_id;
///
/// assert_eq!(graph_id("sort - NonTrivialArray<32>"), "sort___NonTrivialArray_32_");
/// ```
pub fn graph_id(title: &str) -> String {
    title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

struct GroupRun<'a> {
    group: Group,
    runner: &'a mut TrialRunner,
    sink: &'a mut dyn ReportSink,
    samples: Vec<Sample>,
}

impl GroupRun<'_> {
    fn scenario<C, P, O>(&mut self, scenario: Scenario<C, P, O>)
    where
        C: SequenceContainer,
        P: CreatePolicy<C>,
        O: Operation<C, P::Subject>,
    {
        let sizes = self.group.sizes();
        let samples = self
            .runner
            .run(&scenario, self.group.unit(), &sizes, &mut *self.sink);
        self.samples.extend(samples);
    }
}

// One scenario per container kind, sharing policies.
macro_rules! each_kind {
    ($run:ident, $T:ty, $create:expr, $operation:expr) => {{
        $run.scenario(Scenario::<Vec<$T>, _, _>::new("vector", $create, $operation));
        $run.scenario(Scenario::<LinkedList<$T>, _, _>::new("list", $create, $operation));
        $run.scenario(Scenario::<VecDeque<$T>, _, _>::new("deque", $create, $operation));
    }};
}

/// Runs every scenario of `group` for element type `T`.
///
/// The graph is declared on `sink` before its first sample is recorded.
///
/// # Example
///
/// ```
/// use seqbench_benchmark::{run_group, Group, GraphReport, TrialRunner};
/// use seqbench_core::Small;
///
/// let mut runner = TrialRunner::new(1, 5489).with_max_size(Some(2_000));
/// let mut report = GraphReport::new(Vec::new());
///
/// let samples = run_group::<Small>(Group::LinearSearch, &mut runner, &mut report);
/// assert_eq!(samples.len(), 6);
/// assert_eq!(report.graphs()[0].title, "linear_search - Small");
/// ```
pub fn run_group<T: Element>(
    group: Group,
    runner: &mut TrialRunner,
    sink: &mut dyn ReportSink,
) -> Vec<Sample> {
    let title = graph_title(group, T::NAME);
    sink.declare_graph(&graph_id(&title), &title, group.unit().symbol());
    info!(event = "group_start", group = group.name(), element = T::NAME);

    let mut run = GroupRun {
        group,
        runner,
        sink,
        samples: Vec::new(),
    };

    match group {
        Group::FillBack => {
            run.scenario(Scenario::<Vec<T>, _, _>::new(
                "vector_pre",
                Empty,
                (ReserveSize, FillBack),
            ));
            each_kind!(run, T, Empty, FillBack);
        }
        Group::EmplaceBack => each_kind!(run, T, Empty, EmplaceBack),
        Group::FillFront => each_kind!(run, T, Empty, FillFront),
        Group::EmplaceFront => each_kind!(run, T, Empty, EmplaceFront),
        Group::LinearSearch => each_kind!(run, T, FilledRandom, Find),
        Group::RandomInsert => each_kind!(run, T, FilledRandom, Insert),
        Group::RandomRemove => {
            run.scenario(Scenario::<Vec<T>, _, _>::new("vector", FilledRandom, Erase));
            run.scenario(Scenario::<Vec<T>, _, _>::new("vector_rem", FilledRandom, RemoveErase));
            run.scenario(Scenario::<LinkedList<T>, _, _>::new("list", FilledRandom, Erase));
            run.scenario(Scenario::<VecDeque<T>, _, _>::new("deque", FilledRandom, Erase));
        }
        Group::Sort => each_kind!(run, T, FilledRandom, Sort),
        Group::Destruction => each_kind!(run, T, SmartFilled, SmartDelete),
        Group::NumberCrunching => each_kind!(run, T, Empty, RandomSortedInsert),
    }

    run.samples
}

#[cfg(test)]
#[path = "scenario_tests.rs"]
mod tests;
