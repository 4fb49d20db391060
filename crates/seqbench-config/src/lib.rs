//! Configuration system for seqbench.
//!
//! A run needs no configuration: with no file present the harness executes
//! the full scenario table and prints a Google Charts page. A TOML or YAML
//! file can change the repeat count, the shuffle seed, the report format and
//! destination, or narrow the run to some groups and element types.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use seqbench_config::{HarnessConfig, OutputFormat};
//!
//! let config = HarnessConfig::from_toml_str(r#"
//!     repeat_count = 3
//!     groups = ["sort", "destruction"]
//!
//!     [output]
//!     format = "markdown"
//!     path = "report.md"
//! "#).unwrap();
//!
//! assert_eq!(config.repeat_count, 3);
//! assert_eq!(config.output.format, OutputFormat::Markdown);
//! assert_eq!(config.groups.len(), 2);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use seqbench_config::HarnessConfig;
//!
//! let config = HarnessConfig::load("seqbench.toml").unwrap_or_default();
//! assert_eq!(config.repeat_count, 5);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main harness configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct HarnessConfig {
    /// Timed trials per (scenario, size); the reported value is their average.
    pub repeat_count: usize,

    /// Seed for the shuffled index permutations and the sorted-insert keys.
    pub random_seed: u64,

    /// Skip every size larger than this. `None` runs every declared size.
    pub max_size: Option<usize>,

    /// Report output.
    pub output: OutputConfig,

    /// Benchmark groups to run, by name. Empty runs all of them.
    pub groups: Vec<String>,

    /// Element types to run, by display name. Empty runs all of them.
    pub element_types: Vec<String>,
}

impl HarnessConfig {
    /// Default number of timed trials per size.
    pub const DEFAULT_REPEAT_COUNT: usize = 5;

    /// Default shuffle seed.
    pub const DEFAULT_RANDOM_SEED: u64 = 5489;

    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, parsed as YAML when the extension is
    /// `yaml` or `yml` and as TOML otherwise.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or does not parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Checks values that deserialize fine but cannot drive a run.
    ///
    /// Group and element names are checked against the scenario table by the
    /// benchmark crate when the run plan is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.repeat_count == 0 {
            return Err(ConfigError::Invalid(
                "repeat_count must be at least 1".to_string(),
            ));
        }
        if self.max_size == Some(0) {
            return Err(ConfigError::Invalid(
                "max_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Sets the number of timed trials per size.
    pub fn with_repeat_count(mut self, count: usize) -> Self {
        self.repeat_count = count;
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = seed;
        self
    }

    /// Caps the sizes that are run.
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = Some(max_size);
        self
    }

    /// Sets the report format.
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output.format = format;
        self
    }

    /// Sets the report destination file.
    pub fn with_output_path(mut self, path: impl Into<String>) -> Self {
        self.output.path = Some(path.into());
        self
    }

    /// Adds a group to the include filter.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.groups.push(group.into());
        self
    }

    /// Adds an element type to the include filter.
    pub fn with_element_type(mut self, name: impl Into<String>) -> Self {
        self.element_types.push(name.into());
        self
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            repeat_count: Self::DEFAULT_REPEAT_COUNT,
            random_seed: Self::DEFAULT_RANDOM_SEED,
            max_size: None,
            output: OutputConfig::default(),
            groups: Vec::new(),
            element_types: Vec::new(),
        }
    }
}

/// Report output configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct OutputConfig {
    /// Rendering of the finished report.
    pub format: OutputFormat,

    /// Destination file. `None` writes to standard output.
    pub path: Option<String>,
}

/// Report rendering format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// HTML page drawing one Google Charts line chart per graph.
    #[default]
    Google,

    /// Flat `graph,series,x,y,unit` rows.
    Csv,

    /// One Markdown table per graph.
    Markdown,
}

#[cfg(test)]
mod tests;
