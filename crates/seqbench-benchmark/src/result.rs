//! Benchmark result types.

use std::fmt;
use std::time::Duration;

/// Unit a group reports its averaged durations in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationUnit {
    Microseconds,
    Milliseconds,
}

impl DurationUnit {
    /// Returns the whole number of units in `duration`, truncating.
    ///
    /// # Example
    ///
    /// ```
    /// use seqbench_benchmark::DurationUnit;
    /// use std::time::Duration;
    ///
    /// assert_eq!(DurationUnit::Milliseconds.count(Duration::from_micros(2_999)), 2);
    /// assert_eq!(DurationUnit::Microseconds.count(Duration::from_micros(2_999)), 2_999);
    /// ```
    pub fn count(self, duration: Duration) -> u64 {
        let count = match self {
            Self::Microseconds => duration.as_micros(),
            Self::Milliseconds => duration.as_millis(),
        };
        u64::try_from(count).unwrap_or(u64::MAX)
    }

    /// Returns the axis label of the unit.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Microseconds => "us",
            Self::Milliseconds => "ms",
        }
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Averages an accumulated duration over `repeats` trials.
///
/// The total is converted to whole units first and then divided, so the
/// result is an integral count.
///
/// # Example
///
/// ```
/// use seqbench_benchmark::{average, DurationUnit};
/// use std::time::Duration;
///
/// let total = Duration::from_millis(52);
/// assert_eq!(average(total, 5, DurationUnit::Milliseconds), 10);
/// assert_eq!(average(total, 5, DurationUnit::Microseconds), 10_400);
/// ```
pub fn average(total: Duration, repeats: usize, unit: DurationUnit) -> u64 {
    let repeats = u64::try_from(repeats.max(1)).unwrap_or(u64::MAX);
    unit.count(total) / repeats
}

/// One averaged measurement for a (scenario, size) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    /// Series label, e.g. `"vector"` or `"vector_pre"`.
    pub series: String,
    /// Input size rendered as a string.
    pub x_label: String,
    /// Averaged duration in the group's unit.
    pub value: u64,
}

impl Sample {
    /// Creates a sample.
    pub fn new(series: impl Into<String>, size: usize, value: u64) -> Self {
        Self {
            series: series.into(),
            x_label: size.to_string(),
            value,
        }
    }
}
