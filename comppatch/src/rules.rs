//! The two completion-rule match rules and the content transform.
//!
//! Path rule: the line contains the `path_param` marker followed eventually
//! by a closing `:`; the clause goes immediately after that colon. First
//! occurrence per line.
//!
//! Placeholder rule: the clause goes immediately after **every** occurrence
//! of the `placeholder` marker on the line.
//!
//! The rules are independent and applied in order. A line may match both,
//! or neither, in which case it passes through byte-for-byte.

use regex::Regex;
use tracing::debug;

use crate::config::PatchConfig;
use crate::error::PatchError;
use crate::render::render_clause;

/// Per-run match statistics, accumulated over the whole file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct PatchStats {
    /// Total lines in the input.
    pub lines_total: usize,
    /// Lines where the path-parameter rule matched.
    pub path_rule_lines: usize,
    /// Placeholder occurrences patched; a single line may contribute several.
    pub placeholder_hits: usize,
    /// Clauses inserted across both rules.
    pub clauses_inserted: usize,
}

/// Result of patching one line.
struct LinePatch {
    line: String,
    path_matched: bool,
    placeholder_hits: usize,
}

/// Compiled form of a [`PatchConfig`], ready to transform content.
#[derive(Debug)]
pub struct PatchRules {
    path_rule: Regex,
    placeholder: String,
    clause: String,
}

impl PatchRules {
    /// Compile the rules for a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PatchError::InvalidConfig`] when the markers violate their
    /// invariants, or when the rendered clause contains the placeholder
    /// marker (the patched output would admit new matches).
    pub fn new(config: &PatchConfig) -> Result<Self, PatchError> {
        config.markers.validate()?;

        let pattern = format!("{}[^:]*:", regex::escape(&config.markers.path_param));
        let path_rule = Regex::new(&pattern).map_err(|e| {
            PatchError::invalid(format!("path-parameter rule failed to compile: {e}"))
        })?;

        let clause = render_clause(&config.globs);
        if clause.contains(&config.markers.placeholder) {
            return Err(PatchError::invalid(format!(
                "placeholder marker '{}' occurs in the rendered clause",
                config.markers.placeholder
            )));
        }

        Ok(Self {
            path_rule,
            placeholder: config.markers.placeholder.clone(),
            clause,
        })
    }

    /// The rendered glob-restriction clause.
    #[must_use]
    pub fn clause(&self) -> &str {
        &self.clause
    }

    /// Apply both rules to a single line (terminator excluded).
    fn patch_line(&self, line: &str) -> LinePatch {
        // Path rule: first path-parameter spec; clause after its closing ':'.
        let (mut patched, path_matched) = match self.path_rule.find(line) {
            Some(m) => {
                let mut out = String::with_capacity(line.len() + self.clause.len());
                out.push_str(&line[..m.end()]);
                out.push_str(&self.clause);
                out.push_str(&line[m.end()..]);
                (out, true)
            }
            None => (line.to_owned(), false),
        };

        // Placeholder rule: every occurrence. The clause never contains the
        // placeholder (checked at compile), so this is a single pass.
        let placeholder_hits = patched.matches(self.placeholder.as_str()).count();
        if placeholder_hits > 0 {
            let replacement = format!("{}{}", self.placeholder, self.clause);
            patched = patched.replace(self.placeholder.as_str(), &replacement);
        }

        LinePatch {
            line: patched,
            path_matched,
            placeholder_hits,
        }
    }

    /// Transform a whole completion-file body.
    ///
    /// Line terminators (`\n` and `\r\n`) and a missing final newline are
    /// preserved exactly; lines matching neither rule are byte-identical in
    /// the output.
    #[must_use]
    pub fn patch_content(&self, content: &str) -> (String, PatchStats) {
        let mut out = String::with_capacity(content.len() + 256);
        let mut stats = PatchStats::default();

        for (idx, raw) in content.split_inclusive('\n').enumerate() {
            stats.lines_total += 1;
            let (line, terminator) = split_line_terminator(raw);
            let patched = self.patch_line(line);

            if patched.path_matched {
                stats.path_rule_lines += 1;
                stats.clauses_inserted += 1;
                debug!(line = idx + 1, "path-parameter rule matched");
            }
            if patched.placeholder_hits > 0 {
                stats.placeholder_hits += patched.placeholder_hits;
                stats.clauses_inserted += patched.placeholder_hits;
                debug!(
                    line = idx + 1,
                    hits = patched.placeholder_hits,
                    "placeholder rule matched"
                );
            }

            out.push_str(&patched.line);
            out.push_str(terminator);
        }

        (out, stats)
    }
}

/// Split a `split_inclusive` chunk into its body and terminator.
fn split_line_terminator(raw: &str) -> (&str, &str) {
    if let Some(body) = raw.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = raw.strip_suffix('\n') {
        (body, "\n")
    } else {
        (raw, "")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::{GlobSet, Markers};

    fn rules_for(globs: &[&str]) -> PatchRules {
        let config = PatchConfig::new(
            Markers::default(),
            GlobSet::new(globs.iter().copied()).unwrap(),
        );
        PatchRules::new(&config).unwrap()
    }

    #[test]
    fn test_path_rule_contract_example() {
        let rules = rules_for(&["*.png", "*.jpg"]);
        let (out, stats) = rules.patch_content("'img':path ':");
        assert_eq!(out, "'img':path ':_files -g \"*.png|*.jpg\"");
        assert_eq!(stats.path_rule_lines, 1);
        assert_eq!(stats.clauses_inserted, 1);
    }

    #[test]
    fn test_placeholder_rule_contract_example() {
        let rules = rules_for(&["*.png", "*.jpg"]);
        let (out, stats) = rules.patch_content("set :IMG: or :IMG:");
        assert_eq!(
            out,
            "set :IMG:_files -g \"*.png|*.jpg\" or :IMG:_files -g \"*.png|*.jpg\""
        );
        assert_eq!(stats.placeholder_hits, 2);
        assert_eq!(stats.clauses_inserted, 2);
    }

    #[test]
    fn test_non_matching_line_passes_through() {
        let rules = rules_for(&["*.png"]);
        let input = "#compdef fswww\n_arguments -s\n";
        let (out, stats) = rules.patch_content(input);
        assert_eq!(out, input);
        assert_eq!(stats.lines_total, 2);
        assert_eq!(stats.clauses_inserted, 0);
    }

    #[test]
    fn test_path_rule_requires_closing_colon() {
        let rules = rules_for(&["*.png"]);
        let input = "uses :path but never closes";
        let (out, stats) = rules.patch_content(input);
        assert_eq!(out, input);
        assert_eq!(stats.path_rule_lines, 0);
    }

    #[test]
    fn test_path_rule_first_occurrence_only() {
        let rules = rules_for(&["*.png"]);
        let (out, stats) = rules.patch_content("a:path x: b:path y:");
        assert_eq!(out, "a:path x:_files -g \"*.png\" b:path y:");
        assert_eq!(stats.path_rule_lines, 1);
        assert_eq!(stats.clauses_inserted, 1);
    }

    #[test]
    fn test_both_rules_on_one_line() {
        let rules = rules_for(&["*.png"]);
        let (out, stats) = rules.patch_content("'-i':path ': and :IMG: here");
        assert_eq!(
            out,
            "'-i':path ':_files -g \"*.png\" and :IMG:_files -g \"*.png\" here"
        );
        assert_eq!(stats.path_rule_lines, 1);
        assert_eq!(stats.placeholder_hits, 1);
        assert_eq!(stats.clauses_inserted, 2);
    }

    #[test]
    fn test_crlf_terminators_preserved() {
        let rules = rules_for(&["*.png"]);
        let (out, _) = rules.patch_content("plain\r\n:IMG:\r\n");
        assert_eq!(out, "plain\r\n:IMG:_files -g \"*.png\"\r\n");
    }

    #[test]
    fn test_missing_final_newline_preserved() {
        let rules = rules_for(&["*.png"]);
        let (out, _) = rules.patch_content("first\n:IMG:");
        assert_eq!(out, "first\n:IMG:_files -g \"*.png\"");
    }

    #[test]
    fn test_empty_content() {
        let rules = rules_for(&["*.png"]);
        let (out, stats) = rules.patch_content("");
        assert_eq!(out, "");
        assert_eq!(stats.lines_total, 0);
    }

    #[test]
    fn test_custom_markers() {
        let mut markers = Markers::default();
        markers.path_param = ":file ".to_owned();
        markers.placeholder = ":PIC:".to_owned();
        let config = PatchConfig::new(markers, GlobSet::new(["*.gif"]).unwrap());
        let rules = PatchRules::new(&config).unwrap();

        let (out, _) = rules.patch_content("'img':file ': and :PIC: too");
        assert_eq!(
            out,
            "'img':file ':_files -g \"*.gif\" and :PIC:_files -g \"*.gif\" too"
        );
    }

    #[test]
    fn test_placeholder_inside_clause_rejected() {
        // A placeholder of "g" appears in the rendered "_files -g" clause.
        let mut markers = Markers::default();
        markers.placeholder = "g".to_owned();
        let config = PatchConfig::new(markers, GlobSet::new(["*.png"]).unwrap());
        let result = PatchRules::new(&config);
        assert!(result.is_err());
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("rendered clause"), "got: {msg}");
    }

    #[test]
    fn test_regex_metacharacters_in_marker_are_literal() {
        let mut markers = Markers::default();
        markers.path_param = ":p.th ".to_owned();
        let config = PatchConfig::new(markers, GlobSet::new(["*.png"]).unwrap());
        let rules = PatchRules::new(&config).unwrap();

        // ":path " must NOT match a ":p.th " marker taken literally.
        let (out, stats) = rules.patch_content("'img':path ':");
        assert_eq!(out, "'img':path ':");
        assert_eq!(stats.clauses_inserted, 0);

        let (out, _) = rules.patch_content("'img':p.th ':");
        assert_eq!(out, "'img':p.th ':_files -g \"*.png\"");
    }
}
