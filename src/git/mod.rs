//! Read-only git inspection
//!
//! The initializer never writes to the repository through git; it only reads
//! the origin remote, the commit count, and the dirty state so the detector
//! can classify the tree.

use crate::error::InitError;
use anyhow::Result;
use git2::{ErrorCode, Repository, StatusOptions};
use std::path::Path;
use tracing::debug;

/// Point-in-time view of the repository's git state
#[derive(Debug, Clone)]
pub struct GitSnapshot {
    /// URL of the `origin` remote, if configured
    pub remote_url: Option<String>,
    /// Number of commits reachable from HEAD (0 for an unborn branch)
    pub commit_count: usize,
    /// Whether tracked files have uncommitted changes
    pub is_dirty: bool,
}

impl GitSnapshot {
    /// owner/repo slug derived from the origin remote, if any
    #[must_use]
    pub fn remote_slug(&self) -> Option<String> {
        self.remote_url.as_deref().and_then(slug_from_remote_url)
    }
}

/// Take a snapshot of the repository at `root`
///
/// Returns `Ok(None)` when `root` is not under version control.
///
/// # Errors
///
/// Returns an error if the repository exists but cannot be inspected.
pub fn snapshot(root: &Path) -> Result<Option<GitSnapshot>> {
    let repo = match Repository::open(root) {
        Ok(repo) => repo,
        Err(err) if err.code() == ErrorCode::NotFound => {
            debug!("No git repository at {}", root.display());
            return Ok(None);
        }
        Err(err) => return Err(InitError::git(err.to_string()).into()),
    };

    let remote_url = repo
        .find_remote("origin")
        .ok()
        .and_then(|remote| remote.url().map(ToOwned::to_owned));

    let commit_count = count_commits(&repo)?;
    let is_dirty = working_tree_dirty(&repo);

    Ok(Some(GitSnapshot {
        remote_url,
        commit_count,
        is_dirty,
    }))
}

/// Count commits reachable from HEAD
fn count_commits(repo: &Repository) -> Result<usize> {
    let mut walk = repo
        .revwalk()
        .map_err(|err| InitError::git(err.to_string()))?;

    // An unborn HEAD (no commits yet) is not an error
    if walk.push_head().is_err() {
        return Ok(0);
    }

    Ok(walk.count())
}

/// Check whether tracked files have uncommitted modifications
fn working_tree_dirty(repo: &Repository) -> bool {
    let mut options = StatusOptions::new();
    options.include_untracked(false).include_ignored(false);

    repo.statuses(Some(&mut options))
        .map(|statuses| !statuses.is_empty())
        .unwrap_or(false)
}

/// Derive an owner/repo slug from a git remote URL
///
/// Handles HTTPS (`https://github.com/owner/repo.git`), SSH
/// (`git@github.com:owner/repo.git`), and bare `owner/repo` forms.
#[must_use]
pub fn slug_from_remote_url(url: &str) -> Option<String> {
    let trimmed = url.trim().trim_end_matches('/');
    let trimmed = trimmed.strip_suffix(".git").unwrap_or(trimmed);

    // Normalizes the scp-like SSH form into path segments
    let normalized = trimmed.replace(':', "/");

    let mut segments = normalized.rsplit('/').filter(|s| !s.is_empty());
    let repo = segments.next()?;
    let owner = segments.next()?;

    if repo.is_empty() || owner.is_empty() || owner.contains('@') {
        return None;
    }

    Some(format!("{owner}/{repo}"))
}
