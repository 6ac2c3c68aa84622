//! Superscript and subscript segmentation for running text
//!
//! Finds trademark, registered and copyright marks, ordinal suffixes,
//! chemical-formula digits and math `^`/`_` notation in plain text, and
//! returns an ordered list of typed segments for a renderer to turn into
//! markup.
//!
//! # Architecture
//!
//! - **Catalog** ([`catalog`]): the pattern families and their fixed
//!   precedence, compiled once and shared
//! - **Segmenter** ([`segmenter`]): one left-to-right pass with per-family
//!   classifiers
//! - **Rendering** ([`render`]): HTML, plain text and Markdown output
//! - **Processing** ([`processor`]): configured entry point with parallel
//!   batches
//!
//! # Example
//!
//! ```rust
//! use supsub_core::{segment, Segment, SegmentOptions};
//!
//! let result = segment("Water is H2O today.", SegmentOptions::default());
//!
//! assert_eq!(
//!     result.segments(),
//!     &[
//!         Segment::plain("Water is "),
//!         Segment::plain("H"),
//!         Segment::sub("2"),
//!         Segment::plain("O today."),
//!     ]
//! );
//! assert!(result.has_annotations());
//! ```

#![warn(missing_docs)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod processor;
pub mod render;
pub mod segment;
pub mod segmenter;

pub use catalog::{Catalog, PatternFamily, ScanMatch};
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use processor::{ProcessingStats, TextProcessor};
pub use render::{HtmlRenderer, MarkdownRenderer, PlainTextRenderer, Renderer};
pub use segment::{Segment, SegmentKind, Segmentation};
pub use segmenter::{segment, SegmentOptions};
