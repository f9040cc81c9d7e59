//! Repository state detection
//!
//! Classifies the working tree as a pristine template or an already
//! customized project before anything is mutated. Each signal evaluator
//! returns a definitive classification or `None` for inconclusive; they run
//! in a fixed order and the first definitive answer wins. Every ambiguous
//! case resolves to `Customized`: initialization is irreversible, so running
//! twice is far more costly than declining to run.

use crate::git::GitSnapshot;
use crate::system::System;
use crate::template;
use anyhow::Result;
use std::path::Path;
use tracing::debug;

/// Classification of the working tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryState {
    /// Freshly generated from the template; safe to initialize
    Pristine,
    /// Already customized (or too ambiguous to tell); refuse to act
    Customized,
}

/// A classification together with the signal that produced it
#[derive(Debug, Clone)]
pub struct Detection {
    pub state: RepositoryState,
    pub reason: String,
}

impl Detection {
    fn pristine<S: Into<String>>(reason: S) -> Self {
        Self {
            state: RepositoryState::Pristine,
            reason: reason.into(),
        }
    }

    fn customized<S: Into<String>>(reason: S) -> Self {
        Self {
            state: RepositoryState::Customized,
            reason: reason.into(),
        }
    }

    /// Whether initialization may proceed without `--force`
    #[must_use]
    pub const fn is_pristine(&self) -> bool {
        matches!(self.state, RepositoryState::Pristine)
    }
}

/// Classify the repository at `root`
///
/// `git` is the snapshot taken by [`crate::git::snapshot`], or `None` when
/// the tree is not under version control.
///
/// # Errors
///
/// Returns an error if a filesystem probe fails.
pub fn detect(
    system: &dyn System,
    root: &Path,
    git: Option<&GitSnapshot>,
) -> Result<Detection> {
    let signals: &[fn(&dyn System, &Path, Option<&GitSnapshot>) -> Result<Option<Detection>>] = &[
        component_dir_signal,
        manifest_signal,
        readme_signal,
        git_signal,
    ];

    for signal in signals {
        if let Some(detection) = signal(system, root, git)? {
            debug!("Detector: {:?} ({})", detection.state, detection.reason);
            return Ok(detection);
        }
    }

    // Not under version control and nothing definitive: refuse to guess
    Ok(Detection::customized(
        "the repository is not under version control, so its history cannot be inspected",
    ))
}

/// Signal 1: the sentinel component directory was renamed or removed
fn component_dir_signal(
    system: &dyn System,
    root: &Path,
    _git: Option<&GitSnapshot>,
) -> Result<Option<Detection>> {
    let dir = root.join(template::component_dir());
    if system.is_dir(&dir)? {
        return Ok(None);
    }
    Ok(Some(Detection::customized(format!(
        "the sentinel component directory '{}' no longer exists",
        template::component_dir().display()
    ))))
}

/// Signal 2: the manifest domain field was changed from the sentinel value
fn manifest_signal(
    system: &dyn System,
    root: &Path,
    _git: Option<&GitSnapshot>,
) -> Result<Option<Detection>> {
    let manifest = root.join(template::manifest_path());
    if !system.is_file(&manifest)? {
        return Ok(None);
    }

    let content = match system.read_to_string(&manifest) {
        Ok(content) => content,
        Err(err) => {
            debug!("Manifest unreadable, signal inconclusive: {err}");
            return Ok(None);
        }
    };

    let value: serde_json::Value = match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(err) => {
            debug!("Manifest unparsable, signal inconclusive: {err}");
            return Ok(None);
        }
    };

    match value.get("domain").and_then(serde_json::Value::as_str) {
        Some(domain) if domain != template::SENTINEL_DOMAIN => {
            Ok(Some(Detection::customized(format!(
                "the manifest domain is already '{domain}'"
            ))))
        }
        _ => Ok(None),
    }
}

/// Signal 3: the README heading no longer matches the template
fn readme_signal(
    system: &dyn System,
    root: &Path,
    _git: Option<&GitSnapshot>,
) -> Result<Option<Detection>> {
    let readme = root.join(template::README);
    if !system.is_file(&readme)? {
        return Ok(None);
    }

    let content = match system.read_to_string(&readme) {
        Ok(content) => content,
        Err(err) => {
            debug!("README unreadable, signal inconclusive: {err}");
            return Ok(None);
        }
    };

    if content.contains(template::SENTINEL_README_HEADING) {
        return Ok(None);
    }
    Ok(Some(Detection::customized(
        "the README no longer carries the template heading",
    )))
}

/// Signal 4: remote URL and commit count heuristics
///
/// Definitive whenever a git snapshot exists; inconclusive only when the
/// tree has no version control at all.
fn git_signal(
    _system: &dyn System,
    _root: &Path,
    git: Option<&GitSnapshot>,
) -> Result<Option<Detection>> {
    let Some(snapshot) = git else {
        return Ok(None);
    };

    let Some(slug) = snapshot.remote_slug() else {
        return Ok(Some(Detection::customized(
            "no usable 'origin' remote is configured; configure one or re-run with --force",
        )));
    };

    if slug == template::SENTINEL_REPO {
        return Ok(Some(Detection::pristine(
            "the origin remote is the canonical template repository",
        )));
    }

    let commits = snapshot.commit_count;
    let repo_name = slug.rsplit('/').next().unwrap_or(&slug);

    if repo_name.contains("blueprint") {
        if commits <= 2 {
            return Ok(Some(Detection::pristine(format!(
                "remote '{slug}' looks freshly generated from the template ({commits} commits)"
            ))));
        }
        return Ok(Some(Detection::customized(format!(
            "remote '{slug}' has {commits} commits of history"
        ))));
    }

    if commits == 1 {
        return Ok(Some(Detection::pristine(format!(
            "fork '{slug}' has a single commit"
        ))));
    }
    Ok(Some(Detection::customized(format!(
        "fork '{slug}' has {commits} commits of history"
    ))))
}
