//! Renderer-backed output formatter for HTML, plain text and Markdown

use super::{Document, OutputFormatter};
use anyhow::Result;
use std::io::Write;
use supsub_core::Renderer;

/// Writes each document through a [`Renderer`], one after another
pub struct RenderedFormatter<W: Write, R: Renderer> {
    writer: W,
    renderer: R,
}

impl<W: Write, R: Renderer> RenderedFormatter<W, R> {
    /// Create a new formatter
    pub fn new(writer: W, renderer: R) -> Self {
        Self { writer, renderer }
    }
}

impl<W: Write, R: Renderer> OutputFormatter for RenderedFormatter<W, R> {
    fn format_document(&mut self, document: &Document<'_>) -> Result<()> {
        let rendered = self.renderer.render(document.segmentation.segments());
        self.writer.write_all(rendered.as_bytes())?;
        // Keep documents on separate lines
        if !rendered.is_empty() && !rendered.ends_with('\n') {
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use supsub_core::{segment, HtmlRenderer, PlainTextRenderer, SegmentOptions};

    fn format_all<R: Renderer>(renderer: R, inputs: &[&str]) -> String {
        let mut out = Vec::new();
        {
            let mut formatter = RenderedFormatter::new(&mut out, renderer);
            for input in inputs {
                let segmentation = segment(input, SegmentOptions::default());
                formatter
                    .format_document(&Document {
                        source: "test",
                        segmentation: &segmentation,
                    })
                    .unwrap();
            }
            formatter.finish().unwrap();
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_plain_text_documents_on_separate_lines() {
        let out = format_all(PlainTextRenderer, &["Acme(TM)", "(C) 2024\n", ""]);
        assert_eq!(out, "Acme™\n© 2024\n");
    }

    #[test]
    fn test_html_document() {
        let out = format_all(HtmlRenderer::default(), &["x_2 & y"]);
        assert_eq!(
            out,
            "x<sub class=\"auto-sub\" aria-label=\"subscript 2\">2</sub> &amp; y\n"
        );
    }
}
