use seqbench_config::OutputFormat;
use seqbench_core::{NonTrivialArray32, Result, Small};

use super::*;

/// Logs declarations and samples in arrival order.
#[derive(Default)]
struct RecordingSink {
    events: Vec<(String, String)>,
}

impl ReportSink for RecordingSink {
    fn declare_graph(&mut self, id: &str, title: &str, unit: &str) {
        self.events
            .push(("graph".to_string(), format!("{}|{}|{}", id, title, unit)));
    }

    fn record_sample(&mut self, series: &str, x_label: &str, _value: u64) {
        self.events.push((series.to_string(), x_label.to_string()));
    }

    fn flush(&mut self, _format: OutputFormat) -> Result<()> {
        Ok(())
    }
}

#[test]
fn test_group_table() {
    assert_eq!(Group::ALL.len(), 10);
    assert_eq!(Group::FillBack.sizes().first(), Some(&100_000));
    assert_eq!(Group::FillBack.sizes().last(), Some(&1_000_000));
    assert_eq!(Group::LinearSearch.sizes(), (1..=10).map(|k| k * 1_000).collect::<Vec<_>>());
    assert_eq!(Group::NumberCrunching.sizes()[9], 100_000);
    assert_eq!(Group::Sort.unit(), DurationUnit::Milliseconds);
    assert_eq!(Group::Destruction.unit(), DurationUnit::Microseconds);

    for group in Group::ALL {
        assert_eq!(Group::from_name(group.name()), Some(group));
        assert_eq!(group.sizes().len(), 10);
    }
}

#[test]
fn test_graph_identity() {
    let title = graph_title(Group::RandomInsert, "NonTrivialString<Movable>");
    assert_eq!(title, "random_insert - NonTrivialString<Movable>");
    assert_eq!(graph_id(&title), "random_insert___NonTrivialString_Movable_");
}

#[test]
fn test_graph_declared_before_samples() {
    let mut runner = TrialRunner::new(1, 5489).with_max_size(Some(20_000));
    let mut sink = RecordingSink::default();

    run_group::<Small>(Group::FillFront, &mut runner, &mut sink);

    assert_eq!(
        sink.events[0],
        ("graph".to_string(), "fill_front___Small|fill_front - Small|us".to_string())
    );
    let series: Vec<&str> = sink.events[1..].iter().map(|(s, _)| s.as_str()).collect();
    assert_eq!(series, ["vector", "vector", "list", "list", "deque", "deque"]);
}

#[test]
fn test_every_group_reports_its_series() {
    for group in Group::ALL {
        // Lowest size of every group, one repeat.
        let cap = group.sizes()[0];
        let mut runner = TrialRunner::new(1, 5489).with_max_size(Some(cap));
        let mut sink = RecordingSink::default();

        let samples = run_group::<NonTrivialArray32>(group, &mut runner, &mut sink);

        let labels: Vec<&str> = samples.iter().map(|s| s.series.as_str()).collect();
        let expected: &[&str] = match group {
            Group::FillBack => &["vector_pre", "vector", "list", "deque"],
            Group::RandomRemove => &["vector", "vector_rem", "list", "deque"],
            _ => &["vector", "list", "deque"],
        };
        assert_eq!(labels, expected, "group {}", group);
        assert!(samples.iter().all(|s| s.x_label == cap.to_string()));
    }
}
