//! Validate command implementation

use crate::error::CliResult;
use clap::Args;
use std::path::PathBuf;
use supsub_core::{Catalog, Config};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        println!("Validating configuration: {}", self.config.display());

        match Config::from_file(&self.config) {
            Ok(config) => {
                let families = Catalog::shared(config.processing.ordinals).families().count();
                println!("✓ Configuration is valid!");
                println!(
                    "  Ordinals: {}",
                    if config.processing.ordinals { "enabled" } else { "disabled" }
                );
                println!("  Active pattern families: {families}");
                println!("  Default format: {}", config.output.default_format);
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
