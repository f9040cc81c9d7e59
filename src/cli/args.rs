use clap::{Parser, Subcommand};

/// Command-line arguments for bpinit
#[derive(Parser, Debug, Clone)]
#[command(name = "bpinit")]
#[command(about = "A CLI tool for initializing Home Assistant integration blueprint repositories")]
#[command(long_about = None)]
#[command(version)]
pub struct Args {
    /// Preview the initialization without modifying any file
    #[arg(long, visible_alias = "simulate")]
    pub dry_run: bool,

    /// Integration domain (activates unattended mode)
    #[arg(long, value_name = "DOMAIN")]
    pub domain: Option<String>,

    /// Display title (activates unattended mode)
    #[arg(long, value_name = "TITLE")]
    pub title: Option<String>,

    /// Repository reference in owner/repo form (activates unattended mode)
    #[arg(long, value_name = "OWNER/REPO")]
    pub repo: Option<String>,

    /// Author name; defaults to the repository owner (activates unattended mode)
    #[arg(long, value_name = "NAME")]
    pub author: Option<String>,

    /// Skip confirmations; required before any unattended mutation
    #[arg(long)]
    pub force: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Auxiliary subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Merge a template-provided config file with a user-customized one
    Merge {
        /// Template-provided document (.json, .yaml, .yml)
        source: String,

        /// User-customized document of the same format
        target: String,

        /// Merge strategy
        #[arg(value_parser = ["additive", "selective"], default_value = "additive")]
        strategy: String,

        /// Dotted key paths to keep from the target (selective strategy)
        #[arg(value_name = "KEY_PATH")]
        keep_keys: Vec<String>,
    },
}
