//! Command-line entry point.
//!
//! Usage: `seqbench [CONFIG]`. The configuration path defaults to
//! `seqbench.toml`; a missing default file runs the full suite with default
//! settings.

use std::path::PathBuf;
use std::process::ExitCode;

use seqbench::{ConfigError, HarnessConfig, HarnessError};
use tracing::info;

const DEFAULT_CONFIG_PATH: &str = "seqbench.toml";

fn main() -> ExitCode {
    #[cfg(feature = "console")]
    seqbench::console::init();

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("seqbench: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<(), HarnessError> {
    let config = load_config(std::env::args_os().nth(1).map(PathBuf::from))?;
    seqbench::run_to_output(&config)?;
    Ok(())
}

fn load_config(explicit: Option<PathBuf>) -> Result<HarnessConfig, ConfigError> {
    match explicit {
        Some(path) => HarnessConfig::load(path),
        None => match HarnessConfig::load(DEFAULT_CONFIG_PATH) {
            Err(ConfigError::Io(_)) => {
                info!(event = "config_default", path = DEFAULT_CONFIG_PATH, "no configuration file, using defaults");
                Ok(HarnessConfig::default())
            }
            loaded => loaded,
        },
    }
}
