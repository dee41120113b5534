//! Clause rendering for the target completion engine.

use crate::config::GlobSet;

/// The completion-engine action that restricts file suggestions to globs.
const FILES_ACTION: &str = "_files -g";

/// Separator the completion engine treats as OR inside the glob argument.
const OR_SEPARATOR: &str = "|";

/// Render the glob-restriction clause for a glob set.
///
/// `["*.png", "*.jpg"]` renders as `_files -g "*.png|*.jpg"`. The glob set's
/// construction invariants guarantee no pattern contains the quote or
/// separator characters used here.
#[must_use]
pub fn render_clause(globs: &GlobSet) -> String {
    format!("{FILES_ACTION} \"{}\"", globs.patterns().join(OR_SEPARATOR))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_render_two_globs() {
        let globs = GlobSet::new(["*.png", "*.jpg"]).unwrap();
        assert_eq!(render_clause(&globs), "_files -g \"*.png|*.jpg\"");
    }

    #[test]
    fn test_render_single_glob_has_no_separator() {
        let globs = GlobSet::new(["*.png"]).unwrap();
        assert_eq!(render_clause(&globs), "_files -g \"*.png\"");
    }

    #[test]
    fn test_render_preserves_order() {
        let globs = GlobSet::new(["*.webp", "*.png"]).unwrap();
        assert_eq!(render_clause(&globs), "_files -g \"*.webp|*.png\"");
    }
}
