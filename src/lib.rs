//! `bpinit` - A CLI tool for initializing Home Assistant integration blueprint repositories
//!
//! This library customizes a freshly generated integration blueprint in one
//! pass: it detects whether the tree is still pristine, collects the new
//! domain/title/repository/author (interactively or unattended), rewrites
//! every template reference in place, and retires the template-only
//! artifacts. It also ships a standalone structured-config merge utility
//! for keeping forks in sync with the template.

pub mod cli;
pub mod collect;
pub mod detect;
pub mod error;
pub mod git;
pub mod merge;
pub mod operations;
pub mod prompt;
pub mod registry;
pub mod rewrite;
pub mod system;
pub mod template;
pub mod ui;
pub mod utils;

use anyhow::Result;
use cli::Args;
use merge::{KeyPath, Strategy};
use operations::init::InitOperation;
use prompt::TerminalPrompter;
use std::path::Path;
use system::RealSystem;

/// Run the initialization command
///
/// # Errors
///
/// Returns an error if the initialization fails; see
/// [`operations::init::InitOperation::execute`].
pub fn run(args: Args) -> Result<()> {
    let system = RealSystem::new();
    let prompter = TerminalPrompter::new();
    let operation = InitOperation::new(args, &system, &prompter);
    operation.execute()
}

/// Run the merge command and return the serialized merged document
///
/// # Errors
///
/// Returns an error if the strategy or a key path is invalid, or if the
/// merge itself fails; see [`merge::merge_files`].
pub fn run_merge(source: &str, target: &str, strategy: &str, keep_keys: &[String]) -> Result<String> {
    let system = RealSystem::new();
    let strategy = strategy.parse::<Strategy>()?;
    let keep_paths = keep_keys
        .iter()
        .map(|key| KeyPath::parse(key))
        .collect::<Result<Vec<_>>>()?;

    merge::merge_files(
        &system,
        Path::new(source),
        Path::new(target),
        strategy,
        &keep_paths,
    )
}
