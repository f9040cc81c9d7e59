//! Template-artifact retirement
//!
//! Runs once after a successful real initialization: renames the sentinel
//! component directory, promotes the template README, and deletes the
//! template-only files so the tool cannot customize the same tree twice.
//! Every step is best-effort and individually logged; the completed rewrite
//! is never rolled back because an optional artifact was already gone.

use crate::system::System;
use crate::template;
use crate::ui;
use anyhow::{Context as _, Result};
use std::path::Path;
use tracing::debug;

/// Retire all template-only artifacts under `root`
///
/// Only the component-directory rename is load-bearing enough to fail the
/// run; everything else degrades to a warning.
///
/// # Errors
///
/// Returns an error if the sentinel component directory exists but cannot
/// be renamed.
pub fn finalize(system: &dyn System, root: &Path, domain: &str) -> Result<()> {
    rename_component_dir(system, root, domain)?;

    if let Err(err) = promote_readme(system, root) {
        ui::warn(&format!("Could not promote the template README: {err}"));
    }
    if let Err(err) = remove_post_attach_hook(system, root) {
        ui::warn(&format!("Could not remove the post-attach hook: {err}"));
    }
    remove_legacy_scripts(system, root);

    Ok(())
}

/// Rename `custom_components/<sentinel>` to the chosen domain
fn rename_component_dir(system: &dyn System, root: &Path, domain: &str) -> Result<()> {
    let from = root.join(template::component_dir());
    let to = root.join(template::COMPONENTS_DIR).join(domain);

    if !system.is_dir(&from)? {
        ui::warn(&format!(
            "Component directory '{}' not found; skipping rename",
            template::component_dir().display()
        ));
        return Ok(());
    }

    system.rename(&from, &to).with_context(|| {
        format!(
            "Failed to rename component directory to '{}'",
            to.display()
        )
    })?;
    ui::success(&format!(
        "Renamed component directory to {}/{domain}",
        template::COMPONENTS_DIR
    ));
    Ok(())
}

/// Promote README.template.md over README.md and drop the how-to doc
fn promote_readme(system: &dyn System, root: &Path) -> Result<()> {
    let template_readme = root.join(template::README_TEMPLATE);
    if system.is_file(&template_readme)? {
        let content = system.read_to_string(&template_readme)?;
        system.write(&root.join(template::README), content.as_bytes())?;
        system.remove_file(&template_readme)?;
        ui::success("Replaced the placeholder README");
    } else {
        ui::warn("No template README found; keeping the existing README");
    }

    let how_to = root.join(template::HOW_TO_DOC);
    if system.is_file(&how_to)? {
        system.remove_file(&how_to)?;
        debug!("Removed {}", how_to.display());
    }
    Ok(())
}

/// Delete the devcontainer post-attach hook and its registration line
fn remove_post_attach_hook(system: &dyn System, root: &Path) -> Result<()> {
    let hook = root.join(template::POST_ATTACH_HOOK);
    if system.is_file(&hook)? {
        system.remove_file(&hook)?;
        ui::success("Removed the devcontainer post-attach hook");
    }

    let config = root.join(template::DEVCONTAINER_CONFIG);
    if !system.is_file(&config)? {
        return Ok(());
    }

    let content = system.read_to_string(&config)?;
    let hook_name = Path::new(template::POST_ATTACH_HOOK)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(template::POST_ATTACH_HOOK);
    if !content.contains(hook_name) {
        return Ok(());
    }

    let stripped: Vec<&str> = content
        .lines()
        .filter(|line| !line.contains(hook_name))
        .collect();
    let mut stripped = stripped.join("\n");
    if content.ends_with('\n') {
        stripped.push('\n');
    }
    system.write(&config, stripped.as_bytes())?;
    debug!("Stripped hook registration from {}", config.display());
    Ok(())
}

/// Delete the legacy shell initializer and its helper libraries
fn remove_legacy_scripts(system: &dyn System, root: &Path) {
    for script in template::LEGACY_SCRIPTS {
        let path = root.join(script);
        match system.is_file(&path) {
            Ok(true) => match system.remove_file(&path) {
                Ok(()) => debug!("Removed {script}"),
                Err(err) => ui::warn(&format!("Could not remove {script}: {err}")),
            },
            Ok(false) => debug!("{script} already absent"),
            Err(err) => ui::warn(&format!("Could not inspect {script}: {err}")),
        }
    }
}
