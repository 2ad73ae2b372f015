//! Content glob resolution.
//!
//! The descriptor never reads source files itself; resolving `content`
//! patterns to files is delegated through this port.

use std::path::{Path, PathBuf};

use crate::domain::{AppError, ContentGlob};

/// Port for resolving a content glob to the files it matches.
pub trait ContentScanner {
    /// Return the files matching `glob`, sorted. Paths are relative to
    /// `root`; a pattern that leaves the root (`../shared/*.html`) yields
    /// paths that do too, and an absolute pattern yields absolute paths.
    /// An empty result is not an error.
    fn scan(&self, root: &Path, glob: &ContentGlob) -> Result<Vec<PathBuf>, AppError>;
}
