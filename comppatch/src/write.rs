//! Atomic in-place file replacement.
//!
//! The transformed content goes to a temporary file created in the
//! destination directory, then replaces the original via rename. The
//! original is therefore either fully replaced or left untouched; an
//! interrupted run abandons the temporary file and nothing else.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::PatchError;

/// Replace the file at `path` with `content` atomically.
///
/// The temporary file lives in the same directory as `path` so the final
/// rename never crosses a filesystem boundary.
///
/// # Errors
///
/// Returns [`PatchError::Io`] when the temporary file cannot be created or
/// written, or when the rename fails. The original file is unchanged in
/// every error case.
pub fn replace_file(path: &Path, content: &str) -> Result<(), PatchError> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| PatchError::io(path, e))?;
    tmp.write_all(content.as_bytes())
        .map_err(|e| PatchError::io(path, e))?;
    tmp.persist(path).map_err(|e| PatchError::io(path, e.error))?;

    Ok(())
}
