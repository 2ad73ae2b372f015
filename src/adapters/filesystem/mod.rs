//! Filesystem adapter for `ContentScanner`.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::domain::{AppError, ContentGlob};
use crate::ports::ContentScanner;

/// Walks the scan root and matches files against content globs.
///
/// `.gitignore`, `.ignore` and hidden entries are skipped the same way the
/// generator skips them, whether or not the root is a git repository.
#[derive(Debug, Clone, Default)]
pub struct FilesystemScanner {
    include_hidden: bool,
}

impl FilesystemScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also descend into hidden files and directories.
    pub fn include_hidden(mut self, include_hidden: bool) -> Self {
        self.include_hidden = include_hidden;
        self
    }
}

impl ContentScanner for FilesystemScanner {
    fn scan(&self, root: &Path, glob: &ContentGlob) -> Result<Vec<PathBuf>, AppError> {
        let matcher = glob.compile_within_base()?;
        let (base, _) = glob.split_base();
        let base = Path::new(base);
        let walk_root = root.join(base);
        if !walk_root.is_dir() {
            tracing::debug!(
                pattern = %glob,
                base = %walk_root.display(),
                "pattern base is not a directory"
            );
            return Ok(Vec::new());
        }

        let walker =
            WalkBuilder::new(&walk_root).hidden(!self.include_hidden).require_git(false).build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!(
                        root = %walk_root.display(),
                        error = %err,
                        "skipping unreadable entry"
                    );
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|kind| kind.is_file()) {
                continue;
            }
            let Ok(relative) = entry.path().strip_prefix(&walk_root) else {
                continue;
            };
            if matcher.is_match(relative) {
                files.push(base.join(relative));
            }
        }
        files.sort();

        tracing::debug!(pattern = %glob, matched = files.len(), "resolved content pattern");
        Ok(files)
    }
}
