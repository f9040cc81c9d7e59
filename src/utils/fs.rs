//! File system utilities

use crate::system::System;
use anyhow::{Context as _, Result};
use std::io::Read as _;
use std::path::Path;

/// Known text file extensions for binary detection
const TEXT_EXTENSIONS: &[&str] = &[
    "bash",
    "c",
    "cc",
    "cfg",
    "cjs",
    "conf",
    "config",
    "cpp",
    "css",
    "csv",
    "dockerfile",
    "dockerignore",
    "editorconfig",
    "env",
    "gitignore",
    "h",
    "htm",
    "html",
    "ini",
    "js",
    "json",
    "jsx",
    "log",
    "makefile",
    "markdown",
    "md",
    "mjs",
    "properties",
    "py",
    "pyi",
    "rs",
    "rst",
    "sh",
    "sql",
    "toml",
    "ts",
    "tsv",
    "tsx",
    "txt",
    "xml",
    "yaml",
    "yml",
    "zsh",
];

/// Check if a file is binary by examining its extension and content
pub fn is_binary_file(system: &dyn System, file_path: &Path) -> Result<bool> {
    // If it's a directory, it's not a binary file
    if !system.is_file(file_path)? {
        return Ok(false);
    }

    // Check if it has a known text file extension
    if let Some(extension) = file_path.extension().and_then(|e| e.to_str()) {
        let ext = extension.to_lowercase();
        if TEXT_EXTENSIONS.contains(&ext.as_str()) {
            return Ok(false); // Known text file extension
        }
    }

    // Fallback: check file content
    let mut file = system
        .open(file_path)
        .with_context(|| format!("Failed to open file: {}", file_path.display()))?;

    let mut buffer = vec![0; 8192];
    let bytes_read = file
        .read(&mut buffer)
        .with_context(|| format!("Failed to read from file: {}", file_path.display()))?;

    if bytes_read == 0 {
        return Ok(false); // Empty file is text
    }

    // Check for null bytes - text files don't have them
    for &byte in &buffer[..bytes_read] {
        if byte == 0 {
            return Ok(true); // Has null byte = binary
        }
    }

    // Check if it's valid UTF-8
    if core::str::from_utf8(&buffer[..bytes_read]).is_ok() {
        return Ok(false); // Valid UTF-8 = text
    }

    // Not valid UTF-8 and no null bytes = assume binary
    Ok(true)
}
