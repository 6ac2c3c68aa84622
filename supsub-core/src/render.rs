//! Renderers turning segments into markup

use crate::config::RenderConfig;
use crate::segment::{Segment, SegmentKind};

/// Converts a segment sequence into output text
pub trait Renderer: Send + Sync {
    /// Render segments in order
    fn render(&self, segments: &[Segment]) -> String;
}

/// Inline HTML with `<sup>`/`<sub>` elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlRenderer {
    super_class: String,
    sub_class: String,
    aria_labels: bool,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::from_config(&RenderConfig::default())
    }
}

impl HtmlRenderer {
    /// Renderer using the class names and labelling from `config`
    pub fn from_config(config: &RenderConfig) -> Self {
        Self {
            super_class: config.super_class.clone(),
            sub_class: config.sub_class.clone(),
            aria_labels: config.aria_labels,
        }
    }

    fn push_element(&self, out: &mut String, tag: &str, class: &str, label: &str, content: &str) {
        let content = html_escape(content);
        out.push('<');
        out.push_str(tag);
        if !class.is_empty() {
            out.push_str(" class=\"");
            out.push_str(class);
            out.push('"');
        }
        if self.aria_labels {
            out.push_str(" aria-label=\"");
            out.push_str(label);
            out.push(' ');
            out.push_str(&content);
            out.push('"');
        }
        out.push('>');
        out.push_str(&content);
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, segments: &[Segment]) -> String {
        let mut out = String::new();
        for segment in segments {
            match segment.kind {
                SegmentKind::Plain => out.push_str(&html_escape(&segment.content)),
                SegmentKind::Super => self.push_element(
                    &mut out,
                    "sup",
                    &self.super_class,
                    "superscript",
                    &segment.content,
                ),
                SegmentKind::Sub => self.push_element(
                    &mut out,
                    "sub",
                    &self.sub_class,
                    "subscript",
                    &segment.content,
                ),
            }
        }
        out
    }
}

/// Contents concatenated without any markup
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextRenderer;

impl Renderer for PlainTextRenderer {
    fn render(&self, segments: &[Segment]) -> String {
        segments.iter().map(|s| s.content.as_str()).collect()
    }
}

/// Pandoc-flavoured Markdown: `^sup^` and `~sub~`
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, segments: &[Segment]) -> String {
        let mut out = String::new();
        for segment in segments {
            let delimiter = match segment.kind {
                SegmentKind::Plain => {
                    markdown_escape_into(&mut out, &segment.content, false);
                    continue;
                }
                SegmentKind::Super => '^',
                SegmentKind::Sub => '~',
            };
            out.push(delimiter);
            markdown_escape_into(&mut out, &segment.content, true);
            out.push(delimiter);
        }
        out
    }
}

/// Backslash-escape Pandoc script delimiters; spaces only inside a script
fn markdown_escape_into(out: &mut String, text: &str, in_script: bool) {
    for ch in text.chars() {
        match ch {
            '\\' | '^' | '~' => {
                out.push('\\');
                out.push(ch);
            }
            ' ' if in_script => out.push_str("\\ "),
            _ => out.push(ch),
        }
    }
}

/// Escape HTML special characters
pub fn html_escape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}
