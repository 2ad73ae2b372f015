use std::fmt;

use globset::{GlobBuilder, GlobMatcher};
use serde::Serialize;

use super::ConfigError;

const GLOB_META: [char; 5] = ['*', '?', '[', '{', '\\'];

/// A `content` scan target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ContentGlob(String);

impl ContentGlob {
    /// Validate that `pattern` compiles.
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        if pattern.trim().is_empty() {
            return Err(ConfigError::InvalidGlobPattern {
                pattern: pattern.to_string(),
                details: "pattern is blank".to_string(),
            });
        }
        let glob = Self(pattern.to_string());
        glob.compile()?;
        Ok(glob)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Pattern relative to the scan root, without a leading `./`.
    pub fn relative_pattern(&self) -> &str {
        let mut pattern = self.0.as_str();
        while let Some(rest) = pattern.strip_prefix("./") {
            pattern = rest;
        }
        pattern
    }

    /// Split into the literal directory the pattern starts from and the glob
    /// part below it: `../shared/**/*.html` is `("../shared", "**/*.html")`.
    ///
    /// The base is empty when the pattern starts with a glob, and absolute
    /// when the pattern is.
    pub fn split_base(&self) -> (&str, &str) {
        let pattern = self.relative_pattern();
        let glob_start = pattern.find(|c: char| GLOB_META.contains(&c)).unwrap_or(pattern.len());
        match pattern[..glob_start].rfind('/') {
            Some(0) => ("/", &pattern[1..]),
            Some(slash) => (&pattern[..slash], &pattern[slash + 1..]),
            None => ("", pattern),
        }
    }

    /// Compile the glob part of `split_base` into a matcher for paths
    /// relative to the base directory.
    pub fn compile_within_base(&self) -> Result<GlobMatcher, ConfigError> {
        let (_, tail) = self.split_base();
        self.build_matcher(tail)
    }

    /// Compile into a matcher for root-relative paths. `*` does not cross
    /// directory separators; `**` does.
    pub fn compile(&self) -> Result<GlobMatcher, ConfigError> {
        self.build_matcher(self.relative_pattern())
    }

    fn build_matcher(&self, pattern: &str) -> Result<GlobMatcher, ConfigError> {
        GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map(|glob| glob.compile_matcher())
            .map_err(|err| ConfigError::InvalidGlobPattern {
                pattern: self.0.clone(),
                details: err.to_string(),
            })
    }
}

impl fmt::Display for ContentGlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
