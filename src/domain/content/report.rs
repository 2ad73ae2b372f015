//! Outcome of resolving `content` globs against a scan root.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use super::Diagnostics;
use crate::domain::config::ContentGlob;

/// Files one pattern resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    pub pattern: ContentGlob,
    /// Root-relative paths, sorted.
    pub files: Vec<PathBuf>,
}

impl PatternMatch {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Per-pattern scan results, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentReport {
    pub root: PathBuf,
    pub patterns: Vec<PatternMatch>,
}

impl ContentReport {
    pub fn new(root: &Path) -> Self {
        Self { root: root.to_path_buf(), patterns: Vec::new() }
    }

    pub fn push(&mut self, pattern: ContentGlob, files: Vec<PathBuf>) {
        self.patterns.push(PatternMatch { pattern, files });
    }

    /// Patterns that matched nothing.
    pub fn unmatched(&self) -> impl Iterator<Item = &ContentGlob> {
        self.patterns.iter().filter(|m| m.is_empty()).map(|m| &m.pattern)
    }

    /// Distinct files across all patterns.
    pub fn unique_files(&self) -> BTreeSet<&Path> {
        self.patterns.iter().flat_map(|m| m.files.iter().map(PathBuf::as_path)).collect()
    }

    /// Zero-match patterns become warnings; the generator simply finds no
    /// classes there.
    pub fn diagnostics(&self) -> Diagnostics {
        let mut diagnostics = Diagnostics::default();
        for pattern in self.unmatched() {
            diagnostics.push_warning(
                "content",
                format!(
                    "pattern '{}' matched no files under {} (no classes will be found)",
                    pattern,
                    self.root.display()
                ),
            );
        }
        diagnostics
    }
}
