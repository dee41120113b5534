// These Clippy lints are disabled because this is a CLI binary, not a library:
// - print_stdout/print_stderr: CLI tools are expected to print to stdout/stderr for user output.
// - exit: Calling `std::process::exit()` is standard for CLI apps to signal failure to the shell.
#![allow(clippy::print_stdout, clippy::print_stderr, clippy::exit)]

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use comppatch_cli::cli::{self, Cli};

fn main() {
    let args = Cli::parse();
    init_logging(args.verbose);

    if let Err(e) = cli::run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Logging goes to stderr so stdout stays reserved for the report.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
