//! supsub command-line entry point

use anyhow::Result;
use clap::Parser;
use supsub_cli::commands::Commands;

/// Superscript and subscript annotation for trademarks, ordinals, chemical
/// formulas and math notation
#[derive(Debug, Parser)]
#[command(name = "supsub", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
