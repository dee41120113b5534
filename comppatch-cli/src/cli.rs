//! Command-line interface for the completion patcher.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use comppatch::{GlobSet, Markers, PatchConfig, output, patch_file};
use tracing::info;

/// Scope path completion in a generated shell-completion file to a glob set.
///
/// Patches the file in place: a glob-restriction clause is inserted after
/// every path-parameter spec and placeholder marker, everything else is
/// preserved byte-for-byte, and the file is replaced atomically.
#[derive(Parser, Debug)]
#[command(name = "comppatch", version, about, long_about = None)]
pub struct Cli {
    /// Completion file to patch in place
    pub file: PathBuf,

    /// Filename globs allowed for path completion (default: common image formats)
    pub globs: Vec<String>,

    /// Marker opening a named path-parameter spec (closed by the next ':')
    #[arg(long, default_value = ":path ")]
    pub path_marker: String,

    /// Generic placeholder token; every occurrence on a line is patched
    #[arg(long, default_value = ":IMG:")]
    pub placeholder_marker: String,

    /// Print the patch report as JSON instead of the human summary
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Build the engine configuration from parsed arguments.
///
/// # Errors
///
/// Returns an error when the supplied globs are not a valid glob set.
pub fn build_config(cli: &Cli) -> Result<PatchConfig> {
    let globs = if cli.globs.is_empty() {
        GlobSet::default()
    } else {
        GlobSet::new(cli.globs.iter().cloned())?
    };

    let mut markers = Markers::default();
    markers.path_param = cli.path_marker.clone();
    markers.placeholder = cli.placeholder_marker.clone();

    Ok(PatchConfig::new(markers, globs))
}

/// Execute one patch run and print the report.
///
/// # Errors
///
/// Returns an error for any patch failure; `main` maps it to exit code 1.
pub fn run(cli: &Cli) -> Result<()> {
    let config = build_config(cli)?;
    let report = patch_file(&cli.file, &config)?;
    info!(
        clauses = report.clauses_inserted,
        changed = report.changed,
        "patch run complete"
    );

    let mut stdout = io::stdout();
    if cli.json {
        output::write_json(&report, &mut stdout)?;
        return Ok(());
    }

    output::write_human(&report, &mut stdout)?;
    if report.matched() {
        println!(
            "{} patched {} ({} clause(s) inserted)",
            "ok:".green().bold(),
            cli.file.display(),
            report.clauses_inserted
        );
    } else {
        println!(
            "{} no completion-rule markers found in {}",
            "warning:".yellow().bold(),
            cli.file.display()
        );
    }

    Ok(())
}
