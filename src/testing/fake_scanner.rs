use std::path::{Path, PathBuf};

use crate::domain::{AppError, ContentGlob};
use crate::ports::ContentScanner;

/// In-memory `ContentScanner` over a fixed file list.
#[derive(Debug, Default, Clone)]
pub struct FakeScanner {
    files: Vec<PathBuf>,
}

impl FakeScanner {
    pub fn with_files(files: &[&str]) -> Self {
        Self { files: files.iter().map(PathBuf::from).collect() }
    }
}

impl ContentScanner for FakeScanner {
    fn scan(&self, _root: &Path, glob: &ContentGlob) -> Result<Vec<PathBuf>, AppError> {
        let matcher = glob.compile()?;
        let mut matched: Vec<PathBuf> =
            self.files.iter().filter(|file| matcher.is_match(file)).cloned().collect();
        matched.sort();
        Ok(matched)
    }
}
