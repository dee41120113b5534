//! Configuration types for completion patching.
//!
//! Split into the glob set (which filenames stay completable) and the marker
//! strings (where the restriction clause is inserted). Both are explicit
//! parameters of every patch run; the engine keeps no ambient state.

use glob::Pattern;

use crate::error::PatchError;

/// Default glob set: raster formats commonly accepted by wallpaper tools.
pub const DEFAULT_IMAGE_GLOBS: &[&str] = &[
    "*.png", "*.jpg", "*.jpeg", "*.gif", "*.bmp", "*.webp", "*.tif", "*.tiff",
];

/// Characters that would corrupt the rendered clause (`"`, `|`) or the
/// marker syntax (`:`) if they appeared inside a glob pattern.
const FORBIDDEN_GLOB_CHARS: &[char] = &['"', '|', ':'];

/// An ordered, validated set of filename globs.
///
/// Invariants, enforced at construction: non-empty; every entry parses as a
/// glob; no entry contains a clause-breaking character or whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobSet {
    patterns: Vec<String>,
}

impl GlobSet {
    /// Build a glob set from raw pattern strings, preserving order.
    ///
    /// # Errors
    ///
    /// Returns [`PatchError::InvalidConfig`] when `patterns` is empty, when
    /// an entry is not a valid glob, or when an entry contains `"`, `|`,
    /// `:`, or whitespace.
    pub fn new<I, S>(patterns: I) -> Result<Self, PatchError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut validated = Vec::new();
        for pattern in patterns {
            let pattern = pattern.into();
            if pattern.is_empty() {
                return Err(PatchError::invalid("glob pattern is empty"));
            }
            if let Some(c) = pattern
                .chars()
                .find(|c| FORBIDDEN_GLOB_CHARS.contains(c) || c.is_whitespace())
            {
                return Err(PatchError::invalid(format!(
                    "glob pattern '{pattern}' contains '{c}', which would corrupt the completion clause"
                )));
            }
            Pattern::new(&pattern).map_err(|e| {
                PatchError::invalid(format!("invalid glob pattern '{pattern}': {e}"))
            })?;
            validated.push(pattern);
        }

        if validated.is_empty() {
            return Err(PatchError::invalid("glob set is empty"));
        }

        Ok(Self {
            patterns: validated,
        })
    }

    /// The validated patterns, in configuration order.
    #[must_use]
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Number of patterns in the set. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for GlobSet {
    /// The [`DEFAULT_IMAGE_GLOBS`] set. The entries are compile-time
    /// constants that satisfy every `new()` invariant.
    fn default() -> Self {
        Self {
            patterns: DEFAULT_IMAGE_GLOBS.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}

/// Marker strings identifying completion rules in the generated file.
///
/// The defaults match the output of the upstream completion generator; both
/// can be overridden when the generator's syntax changes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Markers {
    /// Sentinel opening a named path-parameter spec. The rule closes at the
    /// next `:` on the line and the clause is inserted after it.
    pub path_param: String,
    /// Generic placeholder token. Every occurrence on a line is patched.
    pub placeholder: String,
}

impl Markers {
    /// Check the marker invariants: both non-empty, and the placeholder free
    /// of clause delimiter characters.
    ///
    /// # Errors
    ///
    /// Returns [`PatchError::InvalidConfig`] describing the violated
    /// invariant.
    pub fn validate(&self) -> Result<(), PatchError> {
        if self.path_param.is_empty() {
            return Err(PatchError::invalid("path-parameter marker is empty"));
        }
        if self.placeholder.is_empty() {
            return Err(PatchError::invalid("placeholder marker is empty"));
        }
        if let Some(c) = self.placeholder.chars().find(|c| *c == '"' || *c == '|') {
            return Err(PatchError::invalid(format!(
                "placeholder marker contains '{c}', which collides with the clause syntax"
            )));
        }
        Ok(())
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            path_param: ":path ".to_owned(),
            placeholder: ":IMG:".to_owned(),
        }
    }
}

/// Full configuration for one patch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct PatchConfig {
    /// Where the restriction clause is inserted.
    pub markers: Markers,
    /// Which filenames stay completable.
    pub globs: GlobSet,
}

impl PatchConfig {
    /// Assemble a configuration from its parts.
    #[must_use]
    pub fn new(markers: Markers, globs: GlobSet) -> Self {
        Self { markers, globs }
    }
}
