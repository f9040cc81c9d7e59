//! Structured document loading and serialization
//!
//! JSON and YAML files are both parsed into a `serde_json::Value` tree so
//! the merge strategies operate on a single in-memory model.

use crate::error::InitError;
use crate::system::System;
use anyhow::{Context as _, Result};
use serde_json::Value;
use std::path::Path;

/// On-disk format of a structured document, dispatched by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Determine the format from a file extension
    ///
    /// # Errors
    ///
    /// Returns an error naming the supported set for any other extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);
        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            _ => Err(InitError::merge(format!(
                "unsupported file type for '{}'. Supported types: .json, .yaml, .yml",
                path.display()
            ))
            .into()),
        }
    }

    /// Parse document text into a value tree
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid in this format.
    pub fn parse(self, content: &str) -> Result<Value> {
        match self {
            Self::Json => serde_json::from_str(content).context("Failed to parse JSON document"),
            Self::Yaml => serde_yaml::from_str(content).context("Failed to parse YAML document"),
        }
    }

    /// Serialize a value tree back to document text
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be represented in this format.
    pub fn serialize(self, value: &Value) -> Result<String> {
        match self {
            Self::Json => {
                let mut text = serde_json::to_string_pretty(value)
                    .context("Failed to serialize JSON document")?;
                text.push('\n');
                Ok(text)
            }
            Self::Yaml => serde_yaml::to_string(value).context("Failed to serialize YAML document"),
        }
    }
}

/// Load a structured document from disk
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load(system: &dyn System, path: &Path) -> Result<Value> {
    let format = Format::from_path(path)?;
    let content = system
        .read_to_string(path)
        .with_context(|| format!("Failed to read document: {}", path.display()))?;
    format
        .parse(&content)
        .with_context(|| format!("Failed to parse document: {}", path.display()))
}
