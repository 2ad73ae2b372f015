use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::app::config::load_config;
use crate::app::content::resolve_content;
use crate::domain::config::fingerprint;
use crate::domain::{AppError, BuildConfig, ContentReport, Diagnostics};
use crate::ports::ContentScanner;

#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Scan root for content globs. Defaults to the descriptor's directory.
    pub root: Option<PathBuf>,
    /// Also scan hidden files and directories.
    pub include_hidden: bool,
}

#[derive(Debug)]
pub struct CheckOutcome {
    pub path: PathBuf,
    pub config: BuildConfig,
    pub report: ContentReport,
    pub diagnostics: Diagnostics,
    pub fingerprint: String,
}

impl CheckOutcome {
    /// Exit code under the given strictness. Warnings only fail a strict check.
    pub fn exit_code(&self, strict: bool) -> i32 {
        if strict && self.diagnostics.has_warnings() {
            1
        } else {
            0
        }
    }
}

/// Load, validate and resolve the descriptor at `path`.
pub fn execute<S: ContentScanner>(
    ctx: &AppContext<S>,
    path: &Path,
    options: &CheckOptions,
) -> Result<CheckOutcome, AppError> {
    let config = load_config(path)?;
    let root = match &options.root {
        Some(root) => root.clone(),
        None => match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        },
    };

    let report = resolve_content(&config, &root, ctx.scanner())?;
    let diagnostics = report.diagnostics();
    let fingerprint = fingerprint(&config)?;

    Ok(CheckOutcome { path: path.to_path_buf(), config, report, diagnostics, fingerprint })
}
