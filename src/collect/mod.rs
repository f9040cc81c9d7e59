//! Configuration collection and validation
//!
//! Gathers the four initialization fields (domain, title, repository,
//! author) either interactively with re-prompt-on-invalid, or from a fully
//! specified unattended parameter set where any validation failure is fatal.

use crate::cli::Args;
use crate::error::InitError;
use crate::prompt::Prompter;
use crate::ui;
use anyhow::Result;
use regex::Regex;

/// Maximum length of a domain identifier
pub const MAX_DOMAIN_LENGTH: usize = 50;

/// The four fields an initialization run needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitConfig {
    /// Slug-style integration domain (`my_thing`)
    pub domain: String,
    /// Free-text display title (`My Thing`)
    pub title: String,
    /// owner/repo reference (`someone/my-thing`)
    pub repository: String,
    /// Author name; defaults to the owner half of `repository`
    pub author: String,
}

/// Validate a domain identifier
///
/// Accepts `^[a-z][a-z0-9_]*$` up to 50 characters; every rejection carries
/// the specific reason so prompts and error messages can surface it.
///
/// # Errors
///
/// Returns the rejection reason as a `String`.
pub fn validate_domain(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("the domain must not be empty".to_owned());
    }
    if value.len() > MAX_DOMAIN_LENGTH {
        return Err(format!(
            "the domain must be at most {MAX_DOMAIN_LENGTH} characters (got {})",
            value.len()
        ));
    }

    let mut chars = value.chars();
    if let Some(first) = chars.next()
        && !first.is_ascii_lowercase()
    {
        return Err(format!(
            "the domain must start with a lowercase letter (found '{first}')"
        ));
    }
    for c in chars {
        if !(c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_') {
            return Err(format!(
                "the domain may only contain lowercase letters, digits and underscores (found '{c}')"
            ));
        }
    }
    Ok(())
}

/// Validate a display title (free text, non-empty)
///
/// # Errors
///
/// Returns the rejection reason as a `String`.
pub fn validate_title(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err("the title must not be empty".to_owned());
    }
    Ok(())
}

/// Validate an `owner/repo` reference
///
/// # Errors
///
/// Returns the rejection reason as a `String`.
pub fn validate_repository(value: &str) -> Result<(), String> {
    let pattern = Regex::new(r"^[\w.-]+/[\w.-]+$").map_err(|e| e.to_string())?;
    if pattern.is_match(value) {
        return Ok(());
    }
    Err(format!(
        "the repository must be in 'owner/repo' form (got '{value}')"
    ))
}

/// Owner half of an `owner/repo` reference
#[must_use]
pub fn owner_of(repository: &str) -> &str {
    repository.split('/').next().unwrap_or(repository)
}

/// Whether the CLI invocation selects unattended mode
#[must_use]
pub fn is_unattended(args: &Args) -> bool {
    args.domain.is_some() || args.title.is_some() || args.repo.is_some() || args.author.is_some()
}

/// Collect configuration from a fully specified parameter set
///
/// # Errors
///
/// Returns a validation error if a required field is missing or malformed,
/// or if a mutating run was requested without `--force`.
pub fn unattended(args: &Args) -> Result<InitConfig> {
    let domain = args.domain.clone().ok_or_else(|| {
        InitError::validation("unattended mode requires --domain")
    })?;
    let title = args.title.clone().ok_or_else(|| {
        InitError::validation("unattended mode requires --title")
    })?;
    let repository = args.repo.clone().ok_or_else(|| {
        InitError::validation("unattended mode requires --repo")
    })?;

    validate_domain(&domain).map_err(InitError::validation)?;
    validate_title(&title).map_err(InitError::validation)?;
    validate_repository(&repository).map_err(InitError::validation)?;

    // Unattended runs mutate without any confirmation prompt; demand an
    // explicit acknowledgment before touching the tree
    if !args.force && !args.dry_run {
        return Err(InitError::validation(
            "unattended initialization rewrites the repository in place; pass --force to acknowledge",
        )
        .into());
    }

    let author = match args.author.clone() {
        Some(author) if !author.trim().is_empty() => author,
        _ => owner_of(&repository).to_owned(),
    };

    Ok(InitConfig {
        domain,
        title,
        repository,
        author,
    })
}

/// Collect configuration interactively
///
/// `detected_repo` is the owner/repo slug derived from the git remote, if
/// one exists; the operator confirms it instead of retyping it.
///
/// # Errors
///
/// Returns an error if the terminal prompt fails.
pub fn interactive(prompter: &dyn Prompter, detected_repo: Option<&str>) -> Result<InitConfig> {
    let domain = prompt_validated(
        prompter,
        "Integration domain (lowercase, e.g. my_integration)",
        validate_domain,
    )?;
    let title = prompt_validated(
        prompter,
        "Display title (e.g. My Integration)",
        validate_title,
    )?;

    let mut repository = None;
    if let Some(slug) = detected_repo
        && prompter.confirm(&format!("Use repository '{slug}' from the git remote?"), true)?
    {
        repository = Some(slug.to_owned());
    }
    let repository = match repository {
        Some(slug) => slug,
        None => prompt_validated(
            prompter,
            "Repository reference (owner/repo)",
            validate_repository,
        )?,
    };

    let owner = owner_of(&repository).to_owned();
    let author = prompter.input("Author name", Some(&owner))?;
    let author = if author.trim().is_empty() { owner } else { author };

    Ok(InitConfig {
        domain,
        title,
        repository,
        author,
    })
}

/// Prompt until the validator accepts, surfacing each specific reason
fn prompt_validated(
    prompter: &dyn Prompter,
    prompt: &str,
    validate: fn(&str) -> Result<(), String>,
) -> Result<String> {
    loop {
        let value = prompter.input(prompt, None)?;
        match validate(&value) {
            Ok(()) => return Ok(value),
            Err(reason) => ui::warn(&reason),
        }
    }
}
