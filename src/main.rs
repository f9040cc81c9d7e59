//! # `bpinit`
//!
//! One-time setup tool for repositories generated from the Home Assistant
//! integration blueprint, plus a structured-config merge utility for
//! ongoing template-to-fork synchronization.
//!
//! ## Usage
//!
//! **Interactive setup:**
//! ```sh
//! bpinit
//! ```
//!
//! **Unattended setup:**
//! ```sh
//! bpinit --domain my_thing --title "My Thing" --repo someone/my-thing --force
//! ```
//!
//! **Config merge:**
//! ```sh
//! bpinit merge template/pyproject.toml.json pyproject.toml.json additive
//! ```
//!
//! See `bpinit --help` for all options.

use anyhow::Result;
use bpinit::cli::{Args, Command};
use bpinit::error::InitError;
use clap::Parser as _;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing subscriber based on verbose flag
    // Merge mode writes its result to stdout, keep logging to errors there
    let log_level = if matches!(args.command, Some(Command::Merge { .. })) {
        "error"
    } else if args.verbose {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    // Diagnostics go to stderr; stdout is reserved for merge output
    fmt()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Some(Command::Merge {
        source,
        target,
        strategy,
        keep_keys,
    }) = args.command.clone()
    {
        match bpinit::run_merge(&source, &target, &strategy, &keep_keys) {
            Ok(output) => {
                // Merged document goes to stdout (not using logging)
                print!("{output}");
                std::process::exit(0);
            }
            Err(err) => {
                error!("{}", err);
                std::process::exit(
                    err.downcast_ref::<InitError>()
                        .map_or(1, InitError::exit_code),
                );
            }
        }
    }

    match bpinit::run(args) {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            error!("{}", err);
            std::process::exit(
                err.downcast_ref::<InitError>()
                    .map_or(1, InitError::exit_code),
            );
        }
    }
}
