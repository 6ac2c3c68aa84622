//! CLI command implementations

use crate::error::CliResult;
use clap::Subcommand;
use std::io::{self, Write};
use supsub_core::{Catalog, PatternFamily};

pub mod generate_config;
pub mod process;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Annotate text files with superscripts and subscripts
    Process(process::ProcessArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a configuration file populated with the defaults
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration file
    Validate(validate::ValidateArgs),
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List pattern families in precedence order
    Families,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::List { subcommand } => subcommand.write_to(&mut io::stdout().lock()),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Write the listing
    pub fn write_to(&self, out: &mut impl Write) -> CliResult<()> {
        match self {
            ListCommands::Families => {
                writeln!(out, "Pattern families (earlier wins on overlap):")?;
                for (position, (family, source)) in
                    Catalog::shared(true).patterns().into_iter().enumerate()
                {
                    writeln!(out, "  {}. {:<17} {}", position + 1, family.name(), source)?;
                    writeln!(out, "     {}", family.description())?;
                }
                writeln!(
                    out,
                    "\n'{}' is skipped when ordinals are disabled.",
                    PatternFamily::Ordinal
                )?;
            }
            ListCommands::Formats => {
                writeln!(out, "Output formats:")?;
                for format in process::OutputFormat::ALL {
                    writeln!(out, "  {:<9} {}", format.name(), format.description())?;
                }
            }
        }
        Ok(())
    }
}
