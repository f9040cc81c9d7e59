//! User-facing terminal output
//!
//! Styled status lines and the run header. Diagnostic logging goes through
//! `tracing`; everything here is presentation for the operator.

use crate::rewrite::FileRewriteReport;
use console::style;

/// Print a boxed header for a major phase
pub fn header(title: &str) {
    let width = console::measure_text_width(title) + 4;
    let bar = "─".repeat(width);
    println!("╭{bar}╮");
    println!("│  {}  │", style(title).bold());
    println!("╰{bar}╯");
}

/// Print a step marker
pub fn step(message: &str) {
    println!("{} {message}", style("==>").cyan().bold());
}

/// Print a success line
pub fn success(message: &str) {
    println!("{} {message}", style("✓").green().bold());
}

/// Print an informational line
pub fn info(message: &str) {
    println!("{} {message}", style("i").blue().bold());
}

/// Print a warning line
pub fn warn(message: &str) {
    println!("{} {message}", style("!").yellow().bold());
}

/// Print the per-file replacement summary
pub fn print_report(report: &FileRewriteReport, dry_run: bool) {
    if report.is_empty() {
        info("No template references found to rewrite");
        return;
    }

    let heading = if dry_run {
        "Replacements that would be applied:"
    } else {
        "Replacements applied:"
    };
    step(heading);
    for (path, count) in report.files() {
        println!("  {}: {count}", path.display());
    }
    println!(
        "  {} {}",
        style("total:").bold(),
        style(report.total()).bold()
    );
}
