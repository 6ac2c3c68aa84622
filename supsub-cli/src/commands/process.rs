//! Process command implementation

use crate::config::load_config;
use crate::error::{CliError, CliResult};
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, Document};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use supsub_core::{Config, ProcessingStats, TextProcessor};

/// Source name used for standard input
pub const STDIN_SOURCE: &str = "<stdin>";

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob); reads stdin when omitted
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from configuration, else html)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "SUPSUB_CONFIG")]
    pub config: Option<PathBuf>,

    /// Leave ordinal suffixes such as 1st and 2nd alone
    #[arg(long)]
    pub no_ordinals: bool,

    /// Worker threads (0 = all available)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Inline HTML with <sup> and <sub> elements
    Html,
    /// Plain text with canonical symbols and no markup
    Text,
    /// Pandoc-style Markdown (^sup^ and ~sub~)
    Markdown,
    /// JSON array of segment lists
    Json,
}

impl OutputFormat {
    /// Every format, in listing order
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Html,
        OutputFormat::Text,
        OutputFormat::Markdown,
        OutputFormat::Json,
    ];

    /// Name as used on the command line and in configuration
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Text => "text",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Json => "json",
        }
    }

    /// One-line description
    pub fn description(self) -> &'static str {
        match self {
            OutputFormat::Html => "inline HTML with <sup>/<sub> elements",
            OutputFormat::Text => "plain text with canonical symbols",
            OutputFormat::Markdown => "Pandoc-style ^superscript^ and ~subscript~",
            OutputFormat::Json => "JSON array of segments per document",
        }
    }

    /// Parse a configuration name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|format| format.name() == name)
    }
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> CliResult<()> {
        // Initialize logging based on verbosity
        self.init_logging();

        log::info!("Starting text processing");
        log::debug!("Arguments: {:?}", self);

        let config = self.effective_config()?;
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_name(&config.output.default_format).ok_or_else(|| {
                CliError::ConfigError(format!(
                    "unknown output format {:?}",
                    config.output.default_format
                ))
            })?,
        };
        log::info!("Output format: {}", format.name());

        let documents = self.read_documents()?;
        let processor = TextProcessor::with_config(config.clone())
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        let texts: Vec<&str> = documents.iter().map(|(_, text)| text.as_str()).collect();
        let segmentations = processor.process_batch(&texts);

        let mut progress = ProgressReporter::new(self.quiet || documents.len() < 2);
        progress.init_files(documents.len() as u64);

        let writer = self.open_output()?;
        let mut formatter = create_formatter(format, writer, &config);
        let mut stats = ProcessingStats::default();
        for ((source, _), segmentation) in documents.iter().zip(&segmentations) {
            stats.record(segmentation);
            formatter.format_document(&Document {
                source,
                segmentation,
            })?;
            progress.file_written(source);
        }
        formatter.finish()?;
        progress.finish();

        log::info!(
            "Annotated {} of {} inputs ({} superscripts, {} subscripts)",
            stats.annotated_inputs,
            stats.inputs,
            stats.superscripts,
            stats.subscripts
        );

        Ok(())
    }

    /// Configuration file merged with command-line overrides
    pub fn effective_config(&self) -> Result<Config> {
        let mut config = load_config(self.config.as_deref())?;

        if self.no_ordinals {
            config.processing.ordinals = false;
        }
        if let Some(threads) = self.threads {
            config.performance.threads = threads;
        }
        if let Some(format) = self.format {
            config.output.default_format = format.name().to_string();
        }

        let threads = match config.performance.threads {
            0 => num_cpus::get(),
            n => n,
        };
        log::debug!("Using {} worker threads", threads);

        Ok(config)
    }

    /// Read every input as `(source name, text)`, in sorted path order
    fn read_documents(&self) -> Result<Vec<(String, String)>> {
        if self.input.is_empty() {
            log::info!("Reading from standard input");
            let text = FileReader::read_stdin()?;
            return Ok(vec![(STDIN_SOURCE.to_string(), text)]);
        }

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} files to process", files.len());

        files
            .par_iter()
            .map(|path| {
                let text = FileReader::read_text(path)?;
                Ok((path.display().to_string(), text))
            })
            .collect()
    }

    fn open_output(&self) -> Result<Box<dyn Write + Send + Sync>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(io::stdout())),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running in-process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}
