//! # comppatch
//!
//! Rewrites generated shell-completion definitions so path-taking arguments
//! complete only filenames matching a configured glob set.
//!
//! Completion generators emit unconstrained file completion for path
//! arguments. This crate locates the two argument-completion markers in the
//! generated file (a named path-parameter spec and a generic placeholder
//! token), inserts a glob-restriction clause after each, and atomically
//! replaces the file. Everything else is preserved byte-for-byte.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use comppatch::{GlobSet, Markers, PatchConfig, patch_file};
//!
//! let globs = GlobSet::new(["*.png", "*.jpg"]).unwrap();
//! let config = PatchConfig::new(Markers::default(), globs);
//!
//! let report = patch_file(Path::new("completions/_fswww"), &config).unwrap();
//! println!("clauses inserted: {}", report.clauses_inserted);
//! println!("changed: {}", report.changed);
//! ```

use std::path::Path;

use tracing::debug;

mod config;
mod error;
pub mod output;
mod render;
mod report;
mod rules;
mod write;

pub use config::{DEFAULT_IMAGE_GLOBS, GlobSet, Markers, PatchConfig};
pub use error::PatchError;
pub use render::render_clause;
pub use report::PatchReport;
pub use rules::PatchStats;

use rules::PatchRules;

/// Patch a completion file in place.
///
/// This is the primary public API: reads the file, applies both completion
/// rules to every line, and atomically replaces the file with the result.
/// The replacement happens even when no rule matched; `changed` on the
/// returned report records whether the content actually differs.
///
/// # Errors
///
/// - [`PatchError::NotFound`] when `path` does not exist.
/// - [`PatchError::Io`] when reading, writing the temporary file, or the
///   final rename fails; the original file is untouched in every such case.
/// - [`PatchError::InvalidConfig`] when the glob set or markers violate
///   their invariants.
pub fn patch_file(path: &Path, config: &PatchConfig) -> Result<PatchReport, PatchError> {
    let rules = PatchRules::new(config)?;

    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PatchError::NotFound {
                path: path.to_owned(),
            }
        } else {
            PatchError::io(path, e)
        }
    })?;

    let (patched, stats) = rules.patch_content(&content);
    let changed = patched != content;
    write::replace_file(path, &patched)?;

    debug!(
        file = %path.display(),
        clauses = stats.clauses_inserted,
        changed,
        "patched completion file"
    );

    Ok(PatchReport::from_stats(
        path.to_owned(),
        stats,
        changed,
        rules.clause().to_owned(),
    ))
}

/// Apply the patch rules to content in memory, without touching the
/// filesystem. Exposed for callers that manage I/O themselves.
///
/// # Errors
///
/// Returns [`PatchError::InvalidConfig`] when the glob set or markers
/// violate their invariants.
pub fn patch_content(
    content: &str,
    config: &PatchConfig,
) -> Result<(String, PatchStats), PatchError> {
    let rules = PatchRules::new(config)?;
    Ok(rules.patch_content(content))
}
