//! Segment value types produced by the segmenter

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a segment is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// Literal text
    Plain,
    /// Superscript
    Super,
    /// Subscript
    Sub,
}

impl SegmentKind {
    /// Whether this kind requires markup when rendered
    pub fn is_annotation(self) -> bool {
        !matches!(self, SegmentKind::Plain)
    }

    /// Lowercase name used in serialized output
    pub fn as_str(self) -> &'static str {
        match self {
            SegmentKind::Plain => "plain",
            SegmentKind::Super => "super",
            SegmentKind::Sub => "sub",
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified run of output text
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    /// Rendering kind
    pub kind: SegmentKind,
    /// Text carried by the segment
    pub content: String,
}

impl Segment {
    /// Create a segment of the given kind
    pub fn new(kind: SegmentKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }

    /// Literal text segment
    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(SegmentKind::Plain, content)
    }

    /// Superscript segment
    pub fn sup(content: impl Into<String>) -> Self {
        Self::new(SegmentKind::Super, content)
    }

    /// Subscript segment
    pub fn sub(content: impl Into<String>) -> Self {
        Self::new(SegmentKind::Sub, content)
    }

    /// Whether the segment requires superscript or subscript markup
    pub fn is_annotation(&self) -> bool {
        self.kind.is_annotation()
    }
}

/// Ordered segments for one input string
///
/// Always holds at least one segment. Contents concatenate back to the input
/// apart from symbol canonicalization and stripped math delimiters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Segment>", into = "Vec<Segment>")]
pub struct Segmentation {
    segments: Vec<Segment>,
}

impl Segmentation {
    pub(crate) fn from_segments(segments: Vec<Segment>) -> Self {
        debug_assert!(!segments.is_empty());
        Self { segments }
    }

    /// Single plain segment holding the whole text
    pub(crate) fn unchanged(text: &str) -> Self {
        Self {
            segments: vec![Segment::plain(text)],
        }
    }

    /// Borrow the segments in source order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Take ownership of the segments
    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterate over the segments
    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// True when any superscript or subscript segment was produced.
    ///
    /// A caller should leave its source text untouched when this is false.
    pub fn has_annotations(&self) -> bool {
        self.segments.iter().any(Segment::is_annotation)
    }

    /// Count of segments of a given kind
    pub fn count(&self, kind: SegmentKind) -> usize {
        self.segments.iter().filter(|s| s.kind == kind).count()
    }

    /// Contents joined without markup
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(|s| s.content.as_str()).collect()
    }
}

impl TryFrom<Vec<Segment>> for Segmentation {
    type Error = &'static str;

    fn try_from(segments: Vec<Segment>) -> Result<Self, Self::Error> {
        if segments.is_empty() {
            return Err("a segmentation holds at least one segment");
        }
        Ok(Self { segments })
    }
}

impl From<Segmentation> for Vec<Segment> {
    fn from(segmentation: Segmentation) -> Self {
        segmentation.segments
    }
}

impl<'a> IntoIterator for &'a Segmentation {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl IntoIterator for Segmentation {
    type Item = Segment;
    type IntoIter = std::vec::IntoIter<Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}
