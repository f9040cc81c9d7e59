//! Sentinel values and artifact paths shipped by the integration blueprint
//!
//! Everything the initializer searches for, rewrites, or retires is declared
//! here so the rest of the crate never hard-codes template knowledge.

use crate::collect::{InitConfig, owner_of};
use crate::rewrite::ReplacementSpec;
use std::path::PathBuf;

/// Domain identifier the template ships with
pub const SENTINEL_DOMAIN: &str = "ha_integration_domain";

/// Display title the template ships with
pub const SENTINEL_TITLE: &str = "Integration Blueprint";

/// Heading the template README starts with
pub const SENTINEL_README_HEADING: &str = "# Integration Blueprint";

/// owner/repo slug of the upstream template repository
pub const SENTINEL_REPO: &str = "ha-blueprint/integration-blueprint";

/// Owner half of the upstream template slug
pub const SENTINEL_OWNER: &str = "ha-blueprint";

/// Author placeholder the template ships with
pub const SENTINEL_AUTHOR: &str = "Blueprint Author";

/// Directory holding Home Assistant custom components
pub const COMPONENTS_DIR: &str = "custom_components";

/// README replacement promoted over the placeholder README after a real run
pub const README_TEMPLATE: &str = "README.template.md";

/// The repository README
pub const README: &str = "README.md";

/// Template usage doc removed after a real run
pub const HOW_TO_DOC: &str = "docs/HOW_TO_USE_THIS_TEMPLATE.md";

/// Devcontainer post-attach hook removed after a real run
pub const POST_ATTACH_HOOK: &str = ".devcontainer/post-attach.sh";

/// Devcontainer config holding the post-attach hook registration line
pub const DEVCONTAINER_CONFIG: &str = ".devcontainer/devcontainer.json";

/// Legacy shell initializer retired after a real run
pub const LEGACY_SCRIPTS: &[&str] = &[
    "scripts/initialize.sh",
    "scripts/lib/output.sh",
    "scripts/lib/merge.sh",
];

/// Sentinel component directory, relative to the repository root
#[must_use]
pub fn component_dir() -> PathBuf {
    PathBuf::from(COMPONENTS_DIR).join(SENTINEL_DOMAIN)
}

/// Manifest file inside the sentinel component directory
#[must_use]
pub fn manifest_path() -> PathBuf {
    component_dir().join("manifest.json")
}

/// Template-only artifact paths, relative to the repository root
///
/// These are excluded from the bulk rewrite (they are about to be deleted)
/// and removed by the finalization step.
#[must_use]
pub fn retired_artifacts() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from(README_TEMPLATE),
        PathBuf::from(HOW_TO_DOC),
        PathBuf::from(POST_ATTACH_HOOK),
    ];
    paths.extend(LEGACY_SCRIPTS.iter().map(PathBuf::from));
    paths
}

/// Build the ordered replacement specs for one initialization run
///
/// Order matters: the full repository slug must be rewritten before the
/// owner-only reference, or the owner substitution would corrupt every
/// remaining slug occurrence.
#[must_use]
pub fn replacement_specs(config: &InitConfig) -> Vec<ReplacementSpec> {
    vec![
        ReplacementSpec::new(SENTINEL_DOMAIN, &config.domain, "integration domain"),
        ReplacementSpec::new(SENTINEL_TITLE, &config.title, "display title"),
        ReplacementSpec::new(SENTINEL_REPO, &config.repository, "repository reference"),
        ReplacementSpec::new(
            SENTINEL_OWNER,
            owner_of(&config.repository),
            "repository owner",
        ),
        ReplacementSpec::new(SENTINEL_AUTHOR, &config.author, "author name"),
    ]
}
