//! Configuration
//!
//! Loaded from TOML. Every section is optional and falls back to defaults:
//!
//! ```toml
//! [processing]
//! ordinals = true
//!
//! [render]
//! super_class = "auto-super"
//! sub_class = "auto-sub"
//! aria_labels = true
//!
//! [output]
//! default_format = "html"
//! pretty_json = true
//!
//! [performance]
//! batch_size = 50
//! threads = 0
//! ```

use crate::error::{Error, Result};
use crate::segmenter::SegmentOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration constants
pub mod defaults {
    /// Class attribute of generated `<sup>` elements
    pub const SUPER_CLASS: &str = "auto-super";

    /// Class attribute of generated `<sub>` elements
    pub const SUB_CLASS: &str = "auto-sub";

    /// Strings handed to one parallel work unit
    pub const BATCH_SIZE: usize = 50;

    /// Output format used when none is requested
    pub const OUTPUT_FORMAT: &str = "html";
}

/// Output formats understood by `output.default_format`
pub const OUTPUT_FORMATS: [&str; 4] = ["html", "text", "markdown", "json"];

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Recognition settings
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Markup settings
    #[serde(default)]
    pub render: RenderConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Batch and threading settings
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Recognition settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Superscript ordinal suffixes (`1st`, `2nd`)
    pub ordinals: bool,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self { ordinals: true }
    }
}

/// HTML markup settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Class for `<sup>`; empty omits the attribute
    pub super_class: String,

    /// Class for `<sub>`; empty omits the attribute
    pub sub_class: String,

    /// Emit `aria-label="superscript …"` style labels
    pub aria_labels: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            super_class: defaults::SUPER_CLASS.to_string(),
            sub_class: defaults::SUB_CLASS.to_string(),
            aria_labels: true,
        }
    }
}

/// Output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// One of [`OUTPUT_FORMATS`]
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: defaults::OUTPUT_FORMAT.to_string(),
            pretty_json: true,
        }
    }
}

/// Batch and threading settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PerformanceConfig {
    /// Strings per parallel work unit
    pub batch_size: usize,

    /// Worker threads (0 = all available)
    pub threads: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            batch_size: defaults::BATCH_SIZE,
            threads: 0,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse and validate TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Serialize as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Segmenter options implied by this configuration
    pub fn segment_options(&self) -> SegmentOptions {
        SegmentOptions::with_ordinals(self.processing.ordinals)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        validate_class("render.super_class", &self.render.super_class)?;
        validate_class("render.sub_class", &self.render.sub_class)?;

        if !OUTPUT_FORMATS.contains(&self.output.default_format.as_str()) {
            return Err(Error::Configuration(format!(
                "output.default_format must be one of {}, got {:?}",
                OUTPUT_FORMATS.join(", "),
                self.output.default_format
            )));
        }

        if self.performance.batch_size == 0 {
            return Err(Error::Configuration(
                "performance.batch_size must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

fn validate_class(field: &str, value: &str) -> Result<()> {
    let bad = value
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '<' | '>' | '&'));
    if bad {
        return Err(Error::Configuration(format!(
            "{field} must be a single class name without quotes or markup, got {value:?}"
        )));
    }
    Ok(())
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    ordinals: Option<bool>,
    super_class: Option<String>,
    sub_class: Option<String>,
    aria_labels: Option<bool>,
    default_format: Option<String>,
    pretty_json: Option<bool>,
    batch_size: Option<usize>,
    threads: Option<usize>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable ordinal recognition
    pub fn ordinals(mut self, enabled: bool) -> Self {
        self.ordinals = Some(enabled);
        self
    }

    /// Set the `<sup>` class
    pub fn super_class(mut self, class: impl Into<String>) -> Self {
        self.super_class = Some(class.into());
        self
    }

    /// Set the `<sub>` class
    pub fn sub_class(mut self, class: impl Into<String>) -> Self {
        self.sub_class = Some(class.into());
        self
    }

    /// Enable or disable aria labels
    pub fn aria_labels(mut self, enabled: bool) -> Self {
        self.aria_labels = Some(enabled);
        self
    }

    /// Set the default output format
    pub fn default_format(mut self, format: impl Into<String>) -> Self {
        self.default_format = Some(format.into());
        self
    }

    /// Enable or disable pretty JSON
    pub fn pretty_json(mut self, enabled: bool) -> Self {
        self.pretty_json = Some(enabled);
        self
    }

    /// Set the batch size
    pub fn batch_size(mut self, size: usize) -> Self {
        self.batch_size = Some(size);
        self
    }

    /// Set the number of worker threads (0 = all available)
    pub fn threads(mut self, count: usize) -> Self {
        self.threads = Some(count);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(enabled) = self.ordinals {
            config.processing.ordinals = enabled;
        }
        if let Some(class) = self.super_class {
            config.render.super_class = class;
        }
        if let Some(class) = self.sub_class {
            config.render.sub_class = class;
        }
        if let Some(enabled) = self.aria_labels {
            config.render.aria_labels = enabled;
        }
        if let Some(format) = self.default_format {
            config.output.default_format = format;
        }
        if let Some(enabled) = self.pretty_json {
            config.output.pretty_json = enabled;
        }
        if let Some(size) = self.batch_size {
            config.performance.batch_size = size;
        }
        if let Some(count) = self.threads {
            config.performance.threads = count;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.processing.ordinals);
        assert_eq!(config.render.super_class, "auto-super");
        assert_eq!(config.render.sub_class, "auto-sub");
        assert!(config.render.aria_labels);
        assert_eq!(config.output.default_format, "html");
        assert_eq!(config.performance.batch_size, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = Config::from_toml_str(
            r#"
[processing]
ordinals = false

[render]
sub_class = "chem"
"#,
        )
        .unwrap();
        assert!(!config.processing.ordinals);
        assert_eq!(config.render.sub_class, "chem");
        assert_eq!(config.render.super_class, "auto-super");
        assert!(!config.segment_options().ordinals_enabled);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = Config::from_toml_str("[processing]\nordinal = true\n");
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_validation_failures() {
        assert!(Config::builder().batch_size(0).build().is_err());
        assert!(Config::builder().super_class("a b").build().is_err());
        assert!(Config::builder().sub_class("x\"y").build().is_err());
        assert!(Config::builder().default_format("pdf").build().is_err());
    }

    #[test]
    fn test_builder() {
        let config = Config::builder()
            .ordinals(false)
            .super_class("sup")
            .aria_labels(false)
            .default_format("json")
            .pretty_json(false)
            .batch_size(8)
            .threads(2)
            .build()
            .unwrap();
        assert!(!config.processing.ordinals);
        assert_eq!(config.render.super_class, "sup");
        assert!(!config.render.aria_labels);
        assert_eq!(config.output.default_format, "json");
        assert!(!config.output.pretty_json);
        assert_eq!(config.performance.batch_size, 8);
        assert_eq!(config.performance.threads, 2);
    }

    #[test]
    fn test_toml_round_trip_of_defaults() {
        let text = Config::default().to_toml_string().unwrap();
        assert!(text.contains("[processing]"));
        assert!(text.contains("ordinals = true"));
        assert_eq!(Config::from_toml_str(&text).unwrap(), Config::default());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[performance]\nbatch_size = 10\n").unwrap();
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.performance.batch_size, 10);
    }

    #[test]
    fn test_from_missing_file() {
        let result = Config::from_file("/nonexistent/supsub.toml");
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
