//! Configuration discovery
//!
//! An explicit `--config` path wins. Otherwise `supsub.toml` in the working
//! directory is used when present, and the built-in defaults when not.

use crate::error::CliError;
use anyhow::Result;
use std::path::Path;
use supsub_core::Config;

/// File picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "supsub.toml";

/// Load the configuration for a run
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let path = match explicit {
        Some(path) => path,
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Path::new(DEFAULT_CONFIG_FILE),
        None => {
            log::debug!("No configuration file, using defaults");
            return Ok(Config::default());
        }
    };

    log::info!("Loading configuration from {}", path.display());
    Config::from_file(path).map_err(|e| CliError::ConfigError(e.to_string()).into())
}
