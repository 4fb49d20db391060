//! Trial runner.

use std::any::TypeId;
use std::collections::HashMap;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use seqbench_config::HarnessConfig;
use seqbench_core::{ContainerKind, CreatePolicy, Element, IndexCache, Operation, SequenceContainer, TrialEnv};
use tracing::debug;

use crate::report::ReportSink;
use crate::result::{average, DurationUnit, Sample};
use crate::scenario::Scenario;

/// Runs timed trials and reports one averaged sample per size.
///
/// The runner owns every piece of state shared between trials: the
/// randomized index cache and one random generator per container type, that
/// is per container kind and element type. All of it is seeded from the same
/// value, so two runners built with the same seed build identical datasets
/// and draw identical keys. Which other element types a run covers does not
/// change the keys one element type draws.
///
/// # Example
///
/// ```
/// use seqbench_benchmark::{DurationUnit, GraphReport, Scenario, TrialRunner};
/// use seqbench_core::{Empty, FillBack, Small};
/// use std::collections::VecDeque;
///
/// let mut runner = TrialRunner::new(3, 5489).with_max_size(Some(2000));
/// let mut report = GraphReport::new(Vec::new());
/// let scenario = Scenario::<VecDeque<Small>, _, _>::new("deque", Empty, FillBack);
///
/// let samples = runner.run(&scenario, DurationUnit::Microseconds, &[1000, 2000, 3000], &mut report);
/// let sizes: Vec<&str> = samples.iter().map(|s| s.x_label.as_str()).collect();
/// assert_eq!(sizes, ["1000", "2000"]);
/// ```
#[derive(Debug)]
pub struct TrialRunner {
    repeat_count: usize,
    max_size: Option<usize>,
    seed: u64,
    cache: IndexCache,
    rngs: HashMap<(ContainerKind, TypeId), StdRng>,
}

impl TrialRunner {
    /// Creates a runner repeating each trial `repeat_count` times.
    ///
    /// A zero count is raised to one.
    pub fn new(repeat_count: usize, seed: u64) -> Self {
        Self {
            repeat_count: repeat_count.max(1),
            max_size: None,
            seed,
            cache: IndexCache::new(seed),
            rngs: HashMap::new(),
        }
    }

    /// Creates a runner from a harness configuration.
    pub fn from_config(config: &HarnessConfig) -> Self {
        Self::new(config.repeat_count, config.random_seed).with_max_size(config.max_size)
    }

    /// Skips sizes above `max_size`.
    pub fn with_max_size(mut self, max_size: Option<usize>) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn repeat_count(&self) -> usize {
        self.repeat_count
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the shared index cache.
    pub fn cache(&self) -> &IndexCache {
        &self.cache
    }

    /// Returns true when `size` is within the configured ceiling.
    pub fn admits(&self, size: usize) -> bool {
        self.max_size.map_or(true, |max| size <= max)
    }

    /// Returns the generator of container type `C`, seeding it on first use.
    pub(crate) fn generator<C: SequenceContainer>(&mut self) -> &mut StdRng {
        let seed = self.seed;
        self.rngs
            .entry((C::KIND, TypeId::of::<C::Item>()))
            .or_insert_with(|| StdRng::seed_from_u64(seed))
    }

    /// Measures `scenario` at every admitted size.
    ///
    /// Each size is reported to `sink` as soon as its average is known, and
    /// the returned samples are in size order.
    pub fn run<C, P, O>(
        &mut self,
        scenario: &Scenario<C, P, O>,
        unit: DurationUnit,
        sizes: &[usize],
        sink: &mut dyn ReportSink,
    ) -> Vec<Sample>
    where
        C: SequenceContainer,
        P: CreatePolicy<C>,
        O: Operation<C, P::Subject>,
    {
        let mut samples = Vec::with_capacity(sizes.len());
        for &size in sizes {
            if !self.admits(size) {
                continue;
            }
            let total = self.measure(scenario, size);
            let value = average(total, self.repeat_count, unit);

            sink.record_sample(scenario.label(), &size.to_string(), value);
            debug!(
                event = "sample",
                series = scenario.label(),
                kind = %C::KIND,
                size,
                value,
                unit = %unit,
            );
            samples.push(Sample::new(scenario.label(), size, value));
        }
        samples
    }

    /// Returns the total time of `repeat_count` trials at `size`.
    ///
    /// Only the operation is timed. Building the subject happens before the
    /// timer starts and dropping it after the timer stops.
    pub fn measure<C, P, O>(&mut self, scenario: &Scenario<C, P, O>, size: usize) -> Duration
    where
        C: SequenceContainer,
        P: CreatePolicy<C>,
        O: Operation<C, P::Subject>,
    {
        let sample = C::Item::from_key(0);
        let mut total = Duration::ZERO;

        for _ in 0..self.repeat_count {
            let mut subject = CreatePolicy::<C>::make(scenario.create(), size, &mut self.cache);
            let mut env = TrialEnv::new(&sample, self.generator::<C>());

            let start = Instant::now();
            Operation::<C, P::Subject>::run(scenario.operation(), &mut subject, size, &mut env);
            total += start.elapsed();

            drop(subject);
        }
        total
    }
}

impl Default for TrialRunner {
    fn default() -> Self {
        Self::new(HarnessConfig::DEFAULT_REPEAT_COUNT, IndexCache::DEFAULT_SEED)
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
