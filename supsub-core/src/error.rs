//! Error types for configuration and I/O
//!
//! Segmentation itself never fails; these errors only come from loading,
//! validating or writing configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for supsub operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration value rejected by validation
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Configuration file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration text is not valid TOML for the schema
    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration could not be serialized
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Worker pool setup failed
    #[error("Thread pool error: {0}")]
    ThreadPool(String),
}

/// Result type for supsub operations
pub type Result<T> = std::result::Result<T, Error>;
