//! Resolution of `content` globs against a scan root.

use std::path::Path;

use crate::domain::{AppError, BuildConfig, ContentReport};
use crate::ports::ContentScanner;

/// Resolve every `content` pattern of `config` under `root`.
///
/// Patterns are resolved in declaration order. A pattern with no matches is
/// recorded, not rejected; see `ContentReport::diagnostics`.
pub fn resolve_content<S: ContentScanner + ?Sized>(
    config: &BuildConfig,
    root: &Path,
    scanner: &S,
) -> Result<ContentReport, AppError> {
    let mut report = ContentReport::new(root);
    for glob in &config.content {
        let files = scanner.scan(root, glob)?;
        if files.is_empty() {
            tracing::debug!(
                pattern = %glob,
                root = %root.display(),
                "content pattern matched no files"
            );
        }
        report.push(glob.clone(), files);
    }
    Ok(report)
}
