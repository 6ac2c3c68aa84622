//! JSON output formatter

use super::{Document, OutputFormatter};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use supsub_core::Segment;

/// JSON formatter - outputs documents as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    documents: Vec<DocumentData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentData {
    /// File path or `<stdin>`
    pub source: String,
    /// Whether any superscript or subscript was produced
    pub annotated: bool,
    /// Segments in source order
    pub segments: Vec<Segment>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            documents: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, document: &Document<'_>) -> Result<()> {
        self.documents.push(DocumentData {
            source: document.source.to_string(),
            annotated: document.segmentation.has_annotations(),
            segments: document.segmentation.segments().to_vec(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.documents)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
