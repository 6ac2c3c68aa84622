//! File reading utilities

use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let bytes = fs::read(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => {
                anyhow::Error::new(CliError::FileNotFound(path.display().to_string()))
            }
            _ => anyhow::Error::new(e)
                .context(format!("Failed to read file: {}", path.display())),
        })?;

        String::from_utf8(bytes)
            .map_err(|_| CliError::InvalidText(path.display().to_string()).into())
    }

    /// Read all of standard input as UTF-8 text
    pub fn read_stdin() -> Result<String> {
        Self::read_from(io::stdin().lock(), crate::commands::process::STDIN_SOURCE)
    }

    /// Read any reader as UTF-8 text, naming it `source` in errors
    pub fn read_from(mut reader: impl Read, source: &str) -> Result<String> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .with_context(|| format!("Failed to read {source}"))?;

        String::from_utf8(bytes).map_err(|_| CliError::InvalidText(source.to_string()).into())
    }
}
