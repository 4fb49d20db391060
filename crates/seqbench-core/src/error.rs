//! Error types for seqbench

use thiserror::Error;

/// Main error type for seqbench operations.
///
/// Trials themselves cannot fail; errors only arise at the edges of a run,
/// when a plan is assembled from configuration or when a report is written.
#[derive(Debug, Error)]
pub enum BenchError {
    /// A benchmark plan referenced something the scenario table does not know
    #[error("Configuration error: {0}")]
    Config(String),

    /// A report could not be rendered
    #[error("Report error: {0}")]
    Report(String),

    /// Writing a report failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for seqbench operations
pub type Result<T> = std::result::Result<T, BenchError>;
