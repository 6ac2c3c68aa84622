//! Configured entry point for single strings and batches

use crate::config::Config;
use crate::error::Result;
use crate::render::{html_escape, HtmlRenderer, Renderer};
use crate::segment::{SegmentKind, Segmentation};
use crate::segmenter::{segment, SegmentOptions};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Segments text according to a [`Config`]
///
/// Cheap to share: it holds no mutable state, so one processor can serve any
/// number of threads.
#[derive(Debug)]
pub struct TextProcessor {
    config: Config,
    options: SegmentOptions,
    renderer: HtmlRenderer,
    #[cfg(feature = "parallel")]
    pool: Option<rayon::ThreadPool>,
}

impl TextProcessor {
    /// Processor with the default configuration
    pub fn new() -> Self {
        Self::from_valid_config(Config::default(), None)
    }

    /// Processor with a custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;

        #[cfg(feature = "parallel")]
        let pool = match config.performance.threads {
            0 => None,
            threads => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| crate::Error::ThreadPool(e.to_string()))?,
            ),
        };
        #[cfg(not(feature = "parallel"))]
        let pool = None;

        Ok(Self::from_valid_config(config, pool))
    }

    #[cfg(feature = "parallel")]
    fn from_valid_config(config: Config, pool: Option<rayon::ThreadPool>) -> Self {
        Self {
            options: config.segment_options(),
            renderer: HtmlRenderer::from_config(&config.render),
            config,
            pool,
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn from_valid_config(config: Config, _pool: Option<()>) -> Self {
        Self {
            options: config.segment_options(),
            renderer: HtmlRenderer::from_config(&config.render),
            config,
        }
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Segment one string
    pub fn process(&self, text: &str) -> Segmentation {
        segment(text, self.options)
    }

    /// Segment many strings; results keep input order
    pub fn process_batch<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Vec<Segmentation> {
        let batch_size = self.config.performance.batch_size.max(1);
        log::trace!(
            "segmenting {} inputs in batches of {}",
            texts.len(),
            batch_size
        );

        #[cfg(feature = "parallel")]
        {
            let run = || -> Vec<Segmentation> {
                texts
                    .par_chunks(batch_size)
                    .flat_map_iter(|chunk| chunk.iter().map(|t| self.process(t.as_ref())))
                    .collect()
            };
            match &self.pool {
                Some(pool) => pool.install(run),
                None => run(),
            }
        }

        #[cfg(not(feature = "parallel"))]
        {
            texts
                .chunks(batch_size)
                .flat_map(|chunk| chunk.iter().map(|t| self.process(t.as_ref())))
                .collect()
        }
    }

    /// Segment and render as HTML. Text with nothing to annotate is only
    /// escaped.
    pub fn render_html(&self, text: &str) -> String {
        let segmentation = self.process(text);
        if segmentation.has_annotations() {
            self.renderer.render(segmentation.segments())
        } else {
            html_escape(&segmentation.plain_text())
        }
    }
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Totals over a batch of segmentations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessingStats {
    /// Inputs seen
    pub inputs: usize,
    /// Inputs with at least one superscript or subscript
    pub annotated_inputs: usize,
    /// Superscript segments
    pub superscripts: usize,
    /// Subscript segments
    pub subscripts: usize,
}

impl ProcessingStats {
    /// Tally a batch
    pub fn from_segmentations<'a>(items: impl IntoIterator<Item = &'a Segmentation>) -> Self {
        items.into_iter().fold(Self::default(), |mut stats, seg| {
            stats.record(seg);
            stats
        })
    }

    /// Add one segmentation to the totals
    pub fn record(&mut self, segmentation: &Segmentation) {
        self.inputs += 1;
        if segmentation.has_annotations() {
            self.annotated_inputs += 1;
        }
        self.superscripts += segmentation.count(SegmentKind::Super);
        self.subscripts += segmentation.count(SegmentKind::Sub);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::Segment;

    #[test]
    fn test_process_uses_config_options() {
        let config = Config::builder().ordinals(false).build().unwrap();
        let processor = TextProcessor::with_config(config).unwrap();
        let seg = processor.process("1st place");
        assert_eq!(seg.segments(), &[Segment::plain("1st place")]);
    }

    #[test]
    fn test_batch_preserves_order() {
        let config = Config::builder().batch_size(2).threads(2).build().unwrap();
        let processor = TextProcessor::with_config(config).unwrap();
        let inputs: Vec<String> = (0..25).map(|i| format!("item {i} H{i}")).collect();

        let results = processor.process_batch(&inputs);

        assert_eq!(results.len(), inputs.len());
        for (i, seg) in results.iter().enumerate() {
            assert_eq!(seg.plain_text(), inputs[i]);
            assert_eq!(seg.segments().last(), Some(&Segment::sub(i.to_string())));
        }
    }

    #[test]
    fn test_batch_of_str_slices() {
        let processor = TextProcessor::new();
        let results = processor.process_batch(&["(TM)", "plain"]);
        assert!(results[0].has_annotations());
        assert!(!results[1].has_annotations());
    }

    #[test]
    fn test_render_html_leaves_unannotated_text_alone() {
        let processor = TextProcessor::new();
        assert_eq!(processor.render_html("(C) <b>"), "© &lt;b&gt;");
        assert_eq!(
            processor.render_html("CO2"),
            r#"CO<sub class="auto-sub" aria-label="subscript 2">2</sub>"#
        );
    }

    #[test]
    fn test_with_config_rejects_invalid() {
        let mut config = Config::default();
        config.performance.batch_size = 0;
        assert!(TextProcessor::with_config(config).is_err());
    }

    #[test]
    fn test_stats() {
        let processor = TextProcessor::new();
        let results = processor.process_batch(&["H2O", "nothing", "1st and 2nd"]);
        let stats = ProcessingStats::from_segmentations(&results);
        assert_eq!(
            stats,
            ProcessingStats {
                inputs: 3,
                annotated_inputs: 2,
                superscripts: 2,
                subscripts: 1,
            }
        );
    }
}
