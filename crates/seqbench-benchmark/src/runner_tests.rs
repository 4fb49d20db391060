use std::collections::LinkedList;
use std::thread;

use rand::Rng;

use seqbench_config::OutputFormat;
use seqbench_core::{
    Element, Empty, FilledRandom, Medium, NoOp, RandomSortedInsert, Result, SequenceContainer, Small,
    Sort, TrialEnv,
};

use super::*;

#[derive(Default)]
struct RecordingSink {
    events: Vec<String>,
    values: Vec<u64>,
}

impl ReportSink for RecordingSink {
    fn declare_graph(&mut self, id: &str, _title: &str, unit: &str) {
        self.events.push(format!("graph {} {}", id, unit));
    }

    fn record_sample(&mut self, series: &str, x_label: &str, value: u64) {
        self.events.push(format!("sample {} {}", series, x_label));
        self.values.push(value);
    }

    fn flush(&mut self, _format: OutputFormat) -> Result<()> {
        Ok(())
    }
}

/// Fixed-cost operation.
struct Sleep(Duration);

impl<C: SequenceContainer> Operation<C> for Sleep {
    fn run(&self, _c: &mut C, _size: usize, _env: &mut TrialEnv<'_, C::Item>) {
        thread::sleep(self.0);
    }
}

/// Checks what the runner hands to the operation, times nothing.
struct CaptureKeys;

impl<C: SequenceContainer> Operation<C> for CaptureKeys {
    fn run(&self, c: &mut C, _size: usize, env: &mut TrialEnv<'_, C::Item>) {
        assert_eq!(env.sample().key(), 0);
        assert!(c.iter().all(|e| e.key() < c.len()));
    }
}

#[test]
fn test_one_sample_per_size() {
    let mut runner = TrialRunner::new(5, 5489);
    let mut sink = RecordingSink::default();
    let scenario = Scenario::<Vec<Small>, _, _>::new("vector", FilledRandom, Sort);

    let samples = runner.run(&scenario, DurationUnit::Milliseconds, &[100_000], &mut sink);

    assert_eq!(samples.len(), 1);
    assert_eq!(samples[0].series, "vector");
    assert_eq!(samples[0].x_label, "100000");
    assert_eq!(sink.events, ["sample vector 100000"]);
}

#[test]
fn test_dataset_built_once_per_size() {
    let mut runner = TrialRunner::new(4, 1);
    let mut sink = RecordingSink::default();
    let scenario = Scenario::<LinkedList<Small>, _, _>::new("list", FilledRandom, CaptureKeys);

    runner.run(&scenario, DurationUnit::Microseconds, &[100, 200], &mut sink);

    // Four repeats per size, but only one shuffle per size.
    assert_eq!(runner.cache().regenerations(), 2);
}

#[test]
fn test_max_size_skips_sizes() {
    let mut runner = TrialRunner::new(1, 5489).with_max_size(Some(300));
    let mut sink = RecordingSink::default();
    let scenario = Scenario::<Vec<Small>, _, _>::new("vector", Empty, NoOp);

    let samples = runner.run(&scenario, DurationUnit::Microseconds, &[100, 200, 300, 400], &mut sink);

    let sizes: Vec<&str> = samples.iter().map(|s| s.x_label.as_str()).collect();
    assert_eq!(sizes, ["100", "200", "300"]);
    assert!(!runner.admits(301));
}

#[test]
fn test_noop_is_near_zero() {
    let mut runner = TrialRunner::new(5, 5489);
    let mut sink = RecordingSink::default();
    let scenario = Scenario::<Vec<Small>, _, _>::new("vector", Empty, NoOp);

    let samples = runner.run(&scenario, DurationUnit::Milliseconds, &[1_000], &mut sink);
    assert_eq!(samples[0].value, 0);
}

#[test]
fn test_zero_repeat_count_raised_to_one() {
    let runner = TrialRunner::new(0, 5489);
    assert_eq!(runner.repeat_count(), 1);
}

/// Draws `n` keys the way `RandomSortedInsert` does, from `C`'s generator.
fn next_keys<C: SequenceContainer>(runner: &mut TrialRunner, n: usize) -> Vec<usize> {
    let rng = runner.generator::<C>();
    (0..n).map(|_| rng.random_range(0..usize::MAX)).collect()
}

#[test]
fn test_generator_state_carries_across_trials() {
    let scenario = Scenario::<Vec<Small>, _, _>::new("vector", Empty, RandomSortedInsert);

    // Same seed, same trial count: same total draws, regardless of how the
    // trials are split across sizes.
    let mut a = TrialRunner::new(2, 9);
    let mut b = TrialRunner::new(1, 9);
    a.measure(&scenario, 10);
    b.measure(&scenario, 10);
    b.measure(&scenario, 10);

    assert_eq!(next_keys::<Vec<Small>>(&mut a, 5), next_keys::<Vec<Small>>(&mut b, 5));
}

#[test]
fn test_generators_are_per_element_type() {
    let small = Scenario::<Vec<Small>, _, _>::new("vector", Empty, RandomSortedInsert);
    let mut warmed = TrialRunner::new(1, 5489);
    warmed.measure(&small, 5);

    let mut fresh = TrialRunner::new(1, 5489);
    assert_eq!(
        next_keys::<Vec<Medium>>(&mut warmed, 5),
        next_keys::<Vec<Medium>>(&mut fresh, 5)
    );
    // The Small generator did advance.
    assert_ne!(
        next_keys::<Vec<Small>>(&mut warmed, 5),
        next_keys::<Vec<Small>>(&mut fresh, 5)
    );
}

#[test]
fn test_sample_value_is_repeat_average() {
    let mut runner = TrialRunner::new(5, 5489);
    let mut sink = RecordingSink::default();
    let scenario = Scenario::<Vec<Small>, _, _>::new("vector", Empty, Sleep(Duration::from_millis(2)));

    let samples = runner.run(&scenario, DurationUnit::Microseconds, &[10], &mut sink);

    assert_eq!(samples.len(), 1);
    assert_eq!(sink.values, [samples[0].value]);
    // Each of the five trials sleeps at least 2 ms; the average cannot be less.
    assert!(samples[0].value >= 2_000, "average {} us", samples[0].value);
}

#[test]
fn test_from_config() {
    let config = HarnessConfig::new()
        .with_repeat_count(3)
        .with_random_seed(42)
        .with_max_size(500);
    let runner = TrialRunner::from_config(&config);

    assert_eq!(runner.repeat_count(), 3);
    assert_eq!(runner.seed(), 42);
    assert_eq!(runner.cache().seed(), 42);
    assert!(runner.admits(500));
    assert!(!runner.admits(501));
}
