//! Bulk literal text rewriting
//!
//! Walks every non-binary, non-ignored file under a root and applies an
//! ordered list of literal search/replace pairs. File contents are loaded
//! once and the specs run sequentially against the in-memory copies, so a
//! dry run counts exactly what a real run would write, including matches
//! introduced by an earlier spec.

use crate::error::InitError;
use crate::system::System;
use crate::utils::fs::is_binary_file;
use anyhow::{Context as _, Result};
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use tracing::debug;

/// One literal search/replace pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementSpec {
    /// Literal text to search for; regex metacharacters have no meaning
    pub search: String,
    /// Literal replacement text
    pub replacement: String,
    /// Human-readable label for logs
    pub description: String,
}

impl ReplacementSpec {
    /// Create a new replacement spec
    pub fn new<S, R, D>(search: S, replacement: R, description: D) -> Self
    where
        S: Into<String>,
        R: Into<String>,
        D: Into<String>,
    {
        Self {
            search: search.into(),
            replacement: replacement.into(),
            description: description.into(),
        }
    }
}

/// Per-file replacement counts for one rewrite pass
///
/// Returned by the engine instead of being accumulated in process-wide
/// state, so the engine stays testable in isolation.
#[derive(Debug, Default, Clone)]
pub struct FileRewriteReport {
    files: BTreeMap<PathBuf, usize>,
    total: usize,
}

impl FileRewriteReport {
    /// Create an empty report
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `count` replacements in `path`
    pub fn record<P: Into<PathBuf>>(&mut self, path: P, count: usize) {
        if count == 0 {
            return;
        }
        *self.files.entry(path.into()).or_insert(0) += count;
        self.total += count;
    }

    /// Total replacements across all files
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Whether nothing was replaced
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterate per-file counts in path order
    pub fn files(&self) -> impl Iterator<Item = (&PathBuf, &usize)> {
        self.files.iter()
    }

    /// Count recorded for a specific file, if any
    #[must_use]
    pub fn count_for(&self, path: &Path) -> Option<usize> {
        self.files.get(path).copied()
    }
}

/// Apply `specs` in declared order to every candidate file under `root`
///
/// Candidates are regular, non-binary files; `.git/` and gitignored paths
/// are excluded by the walker, and `excludes` (paths relative to `root`)
/// are skipped on top of that. When `dry_run` is set no file is written,
/// but the returned report is identical to a real run's.
///
/// # Errors
///
/// Returns an error if:
/// - A spec has an empty search string
/// - The tree cannot be walked
/// - A changed file cannot be written back
pub fn rewrite(
    system: &dyn System,
    root: &Path,
    specs: &[ReplacementSpec],
    excludes: &[PathBuf],
    dry_run: bool,
) -> Result<FileRewriteReport> {
    for spec in specs {
        if spec.search.is_empty() {
            return Err(InitError::validation(format!(
                "replacement '{}' has an empty search string",
                spec.description
            ))
            .into());
        }
    }

    let excluded: HashSet<PathBuf> = excludes.iter().map(|p| root.join(p)).collect();
    let mut documents = load_candidates(system, root, &excluded)?;

    let mut report = FileRewriteReport::new();
    for spec in specs {
        let mut spec_matches = 0;
        for document in &mut documents {
            let count = document.content.matches(spec.search.as_str()).count();
            if count == 0 {
                continue;
            }
            document.content = document.content.replace(&spec.search, &spec.replacement);
            document.changed = true;
            spec_matches += count;

            let display = document
                .path
                .strip_prefix(root)
                .unwrap_or(&document.path)
                .to_path_buf();
            report.record(display, count);
        }
        debug!(
            "Replacement '{}': {spec_matches} occurrences",
            spec.description
        );
    }

    if !dry_run {
        for document in &documents {
            if !document.changed {
                continue;
            }
            system
                .write(&document.path, document.content.as_bytes())
                .with_context(|| {
                    format!(
                        "Failed to write file after text replacement: {}",
                        document.path.display()
                    )
                })?;
        }
    }

    Ok(report)
}

/// A candidate file loaded into memory
struct Document {
    path: PathBuf,
    content: String,
    changed: bool,
}

/// Enumerate and load every rewrite candidate under `root`
fn load_candidates(
    system: &dyn System,
    root: &Path,
    excluded: &HashSet<PathBuf>,
) -> Result<Vec<Document>> {
    let entries = system
        .walk_dir(root, false, true)
        .with_context(|| format!("Failed to walk directory: {}", root.display()))?;

    let mut documents = Vec::new();
    for entry in entries {
        if !entry.is_file {
            continue;
        }
        if excluded.contains(&entry.path) {
            debug!("Skipping excluded file: {}", entry.path.display());
            continue;
        }
        if is_binary_file(system, &entry.path)? {
            debug!("Skipping binary file: {}", entry.path.display());
            continue;
        }

        let content = match system.read_to_string(&entry.path) {
            Ok(content) => content,
            Err(err) => {
                // Not valid UTF-8 after all; leave it alone
                debug!("Skipping unreadable file {}: {err}", entry.path.display());
                continue;
            }
        };

        documents.push(Document {
            path: entry.path,
            content,
            changed: false,
        });
    }

    Ok(documents)
}
