//! Patch report types.

use std::path::PathBuf;

use serde::Serialize;

use crate::rules::PatchStats;

/// Result of one patch run.
///
/// A run with `clauses_inserted == 0` is not an error: the file simply
/// contained no completion-rule markers. Callers that expect markers should
/// check [`PatchReport::matched`].
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct PatchReport {
    /// The patched file.
    pub file: PathBuf,
    /// Total lines in the input.
    pub lines_total: usize,
    /// Lines where the path-parameter rule matched.
    pub path_rule_lines: usize,
    /// Placeholder occurrences patched across all lines.
    pub placeholder_hits: usize,
    /// Clauses inserted across both rules.
    pub clauses_inserted: usize,
    /// Whether the replacement differs from the input.
    pub changed: bool,
    /// The rendered glob-restriction clause.
    pub clause: String,
}

impl PatchReport {
    /// Assemble a report from the run's statistics.
    #[must_use]
    pub(crate) fn from_stats(
        file: PathBuf,
        stats: PatchStats,
        changed: bool,
        clause: String,
    ) -> Self {
        Self {
            file,
            lines_total: stats.lines_total,
            path_rule_lines: stats.path_rule_lines,
            placeholder_hits: stats.placeholder_hits,
            clauses_inserted: stats.clauses_inserted,
            changed,
            clause,
        }
    }

    /// Whether any completion-rule marker matched.
    #[must_use]
    pub fn matched(&self) -> bool {
        self.clauses_inserted > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matched_reflects_clause_count() {
        let stats = PatchStats {
            lines_total: 10,
            path_rule_lines: 1,
            placeholder_hits: 2,
            clauses_inserted: 3,
        };
        let report = PatchReport::from_stats(
            PathBuf::from("_fswww"),
            stats,
            true,
            "_files -g \"*.png\"".to_owned(),
        );
        assert!(report.matched());
        assert_eq!(report.clauses_inserted, 3);

        let report = PatchReport::from_stats(
            PathBuf::from("_fswww"),
            PatchStats::default(),
            false,
            "_files -g \"*.png\"".to_owned(),
        );
        assert!(!report.matched());
    }
}
