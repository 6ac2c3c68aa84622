//! Generate config command implementation

use crate::error::CliResult;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use supsub_core::Config;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", default_value = crate::config::DEFAULT_CONFIG_FILE)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> CliResult<()> {
        use std::fs;

        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists; pass --force to overwrite it",
                self.output.display()
            );
        }

        println!("Generating configuration...");
        println!("  Output file: {}", self.output.display());

        let template = Self::generate_template()?;

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the file to adjust ordinals, classes or output settings");
        println!("2. Validate your configuration:");
        println!("   supsub validate -c {}", self.output.display());
        println!("3. Use it for processing:");
        println!("   supsub process -i input.txt -c {}", self.output.display());

        Ok(())
    }

    /// Default configuration as commented TOML
    fn generate_template() -> Result<String> {
        let body = Config::default()
            .to_toml_string()
            .context("Failed to serialize default configuration")?;
        Ok(format!(
            "# supsub configuration\n\
             #\n\
             # processing.ordinals      superscript suffixes such as 1st and 2nd\n\
             # render.*_class          class attributes of <sup>/<sub>; empty omits them\n\
             # render.aria_labels      add aria-label=\"superscript …\" labels\n\
             # output.default_format   html, text, markdown or json\n\
             # performance.batch_size  inputs per parallel work unit\n\
             # performance.threads     worker threads, 0 = all available\n\
             \n{body}"
        ))
    }
}
