//! Real system implementation using `std::env`, `std::fs` and the `ignore` walker

use super::{System, WalkEntry};
use ignore::WalkBuilder;
use std::env::VarError;
use std::ffi::OsStr;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Production implementation of System trait
///
/// This implementation directly delegates to the standard library's
/// environment and filesystem functions. It's a zero-cost abstraction
/// that provides no overhead in production.
#[derive(Debug, Clone, Copy)]
pub struct RealSystem;

impl RealSystem {
    /// Create a new `RealSystem` instance
    #[must_use]
    pub const fn new() -> Self {
        return Self;
    }
}

impl Default for RealSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for RealSystem {
    fn env_var(&self, key: &str) -> Result<String, VarError> {
        std::env::var(key)
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        fs::write(path, contents)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to)
    }

    fn exists(&self, path: &Path) -> io::Result<bool> {
        Ok(path.exists())
    }

    fn is_file(&self, path: &Path) -> io::Result<bool> {
        Ok(path.is_file())
    }

    fn is_dir(&self, path: &Path) -> io::Result<bool> {
        Ok(path.is_dir())
    }

    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + '_>> {
        let file = fs::File::open(path)?;
        Ok(Box::new(file))
    }

    fn walk_dir(
        &self,
        path: &Path,
        follow_links: bool,
        include_hidden: bool,
    ) -> io::Result<Vec<WalkEntry>> {
        let mut builder = WalkBuilder::new(path);
        builder
            .follow_links(follow_links)
            .hidden(!include_hidden)
            // Honor .gitignore files even when the tree is not a git repository
            .require_git(false)
            .filter_entry(|entry| entry.file_name() != OsStr::new(".git"));

        let mut entries = Vec::new();
        for result in builder.build() {
            let entry = result.map_err(|e| io::Error::other(e.to_string()))?;
            // Skip the root directory itself
            if entry.depth() == 0 {
                continue;
            }
            let is_file = entry.file_type().is_some_and(|t| t.is_file());
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            entries.push(WalkEntry {
                path: entry.into_path(),
                is_file,
                is_dir,
            });
        }

        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(entries)
    }
}
