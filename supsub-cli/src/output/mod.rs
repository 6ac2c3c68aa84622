//! Output formatting module

use crate::commands::process::OutputFormat;
use anyhow::Result;
use std::io::Write;
use supsub_core::{Config, HtmlRenderer, MarkdownRenderer, PlainTextRenderer, Segmentation};

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::RenderedFormatter;

/// One processed input
#[derive(Debug, Clone, Copy)]
pub struct Document<'a> {
    /// File path or `<stdin>`
    pub source: &'a str,
    /// Segments of the whole input
    pub segmentation: &'a Segmentation,
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single document
    fn format_document(&mut self, document: &Document<'_>) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Build the formatter for `format`
pub fn create_formatter<'w, W: Write + 'w>(
    format: OutputFormat,
    writer: W,
    config: &Config,
) -> Box<dyn OutputFormatter + 'w> {
    match format {
        OutputFormat::Html => Box::new(RenderedFormatter::new(
            writer,
            HtmlRenderer::from_config(&config.render),
        )),
        OutputFormat::Text => Box::new(RenderedFormatter::new(writer, PlainTextRenderer)),
        OutputFormat::Markdown => Box::new(RenderedFormatter::new(writer, MarkdownRenderer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, config.output.pretty_json)),
    }
}
