//! Initialization run coordination

use crate::cli::Args;
use crate::collect::{self, InitConfig};
use crate::detect;
use crate::error::InitError;
use crate::git::{self, GitSnapshot};
use crate::operations::finalize::finalize;
use crate::prompt::Prompter;
use crate::registry::{RegistryClient, RegistryEndpoints};
use crate::rewrite;
use crate::system::System;
use crate::template;
use crate::ui;
use anyhow::Result;
use tracing::{debug, info};

/// Coordinates one complete initialization run
#[non_exhaustive]
#[expect(clippy::module_name_repetitions, reason = "InitOperation")]
pub struct InitOperation<'run> {
    args: Args,
    system: &'run dyn System,
    prompter: &'run dyn Prompter,
}

impl<'run> InitOperation<'run> {
    /// Create a new initialization operation
    #[must_use]
    pub fn new(args: Args, system: &'run dyn System, prompter: &'run dyn Prompter) -> Self {
        Self {
            args,
            system,
            prompter,
        }
    }

    /// Run detection, collection, rewriting, and finalization
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails, a confirmed registry conflict
    /// blocks an unattended run, the operator cancels, or a filesystem step
    /// fails. An already-customized tree is an early success, not an error.
    pub fn execute(&self) -> Result<()> {
        let root = self.system.current_dir()?;
        ui::header("Integration blueprint setup");

        // Detection runs fresh every invocation; its verdict is never cached
        let snapshot = git::snapshot(&root)?;
        let detection = detect::detect(self.system, &root, snapshot.as_ref())?;
        if !detection.is_pristine() && !self.args.force {
            ui::info(&format!(
                "This repository looks already customized: {}.",
                detection.reason
            ));
            ui::info("Nothing to do. Re-run with --force to override.");
            return Ok(());
        }
        debug!("Detection verdict: {}", detection.reason);

        if let Some(snap) = snapshot.as_ref()
            && snap.is_dirty
        {
            ui::warn("The working tree has uncommitted changes; they will be rewritten in place");
        }

        let unattended = collect::is_unattended(&self.args);
        let config = if unattended {
            collect::unattended(&self.args)?
        } else {
            let detected_repo = snapshot.as_ref().and_then(GitSnapshot::remote_slug);
            collect::interactive(self.prompter, detected_repo.as_deref())?
        };
        info!(
            "Initializing domain '{}' for repository '{}'",
            config.domain, config.repository
        );

        self.check_availability(&config, unattended)?;
        self.apply(&root, &config)?;

        if self.args.dry_run {
            ui::success("Dry run complete; no files were modified");
        } else {
            ui::success(&format!(
                "Repository initialized as '{}' ({})",
                config.title, config.domain
            ));
        }
        Ok(())
    }

    /// Best-effort online availability check for the chosen domain
    ///
    /// Inconclusive probes degrade to warnings. A confirmed conflict is
    /// fatal in unattended mode and requires explicit confirmation in
    /// interactive mode.
    fn check_availability(&self, config: &InitConfig, unattended: bool) -> Result<()> {
        ui::step(&format!(
            "Checking '{}' against public registries",
            config.domain
        ));

        let endpoints = RegistryEndpoints::from_env(self.system);
        let report = RegistryClient::new(endpoints)?.check_domain(&config.domain);

        for warning in &report.warnings {
            ui::warn(warning);
        }
        if report.is_clear() {
            ui::success("No conflicting names found");
            return Ok(());
        }

        for conflict in &report.conflicts {
            ui::warn(conflict);
        }
        if unattended {
            return Err(InitError::conflict(format!(
                "the domain '{}' conflicts with an existing published integration",
                config.domain
            ))
            .into());
        }
        if !self
            .prompter
            .confirm("The domain appears to be taken. Proceed anyway?", false)?
        {
            return Err(InitError::cancelled("initialization cancelled").into());
        }
        Ok(())
    }

    /// Run the bulk rewrite and, for a real run, the finalization step
    fn apply(&self, root: &std::path::Path, config: &InitConfig) -> Result<()> {
        let specs = template::replacement_specs(config);
        let excludes = template::retired_artifacts();

        ui::step("Rewriting template references");
        let report = rewrite::rewrite(self.system, root, &specs, &excludes, self.args.dry_run)?;
        ui::print_report(&report, self.args.dry_run);

        if !self.args.dry_run {
            ui::step("Retiring template artifacts");
            finalize(self.system, root, &config.domain)?;
        }
        Ok(())
    }
}
