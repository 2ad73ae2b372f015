//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation,
//! descriptor discovery and command execution.

use std::path::Path;

use crate::adapters::{FilesystemScanner, default_palette};
use crate::app::{
    AppContext,
    commands::{check, fingerprint, init, show, tokens},
    config::resolve_config_path,
};

pub use crate::app::commands::check::{CheckOptions, CheckOutcome};
pub use crate::app::commands::init::InitOptions;
pub use crate::domain::{AppError, ConfigFormat, DarkModeStrategy, Palette};

/// Create an `AppContext` backed by `scanner` and the built-in palette.
fn create_context(scanner: FilesystemScanner) -> Result<AppContext<FilesystemScanner>, AppError> {
    Ok(AppContext::new(scanner, default_palette()?))
}

/// Validate the descriptor found in (or given relative to) the current directory.
pub fn check(config: Option<&Path>, options: CheckOptions) -> Result<CheckOutcome, AppError> {
    check_at(&std::env::current_dir()?, config, options)
}

/// Validate the descriptor found in (or given relative to) `dir`.
pub fn check_at(
    dir: &Path,
    config: Option<&Path>,
    mut options: CheckOptions,
) -> Result<CheckOutcome, AppError> {
    let ctx = create_context(FilesystemScanner::new().include_hidden(options.include_hidden))?;
    let path = resolve_config_path(config, dir)?;
    options.root = options.root.map(|root| if root.is_absolute() { root } else { dir.join(root) });
    check::execute(&ctx, &path, &options)
}

/// Normalized descriptor text.
pub fn show(config: Option<&Path>, format: Option<ConfigFormat>) -> Result<String, AppError> {
    show_at(&std::env::current_dir()?, config, format)
}

pub fn show_at(
    dir: &Path,
    config: Option<&Path>,
    format: Option<ConfigFormat>,
) -> Result<String, AppError> {
    let path = resolve_config_path(config, dir)?;
    show::execute(&path, format)
}

/// Merged color token table.
pub fn tokens(config: Option<&Path>, category: Option<&str>) -> Result<Palette, AppError> {
    tokens_at(&std::env::current_dir()?, config, category)
}

pub fn tokens_at(
    dir: &Path,
    config: Option<&Path>,
    category: Option<&str>,
) -> Result<Palette, AppError> {
    let ctx = create_context(FilesystemScanner::new())?;
    let path = resolve_config_path(config, dir)?;
    tokens::execute(&ctx, &path, category)
}

/// SHA-256 fingerprint of the normalized descriptor.
pub fn fingerprint(config: Option<&Path>) -> Result<String, AppError> {
    fingerprint_at(&std::env::current_dir()?, config)
}

pub fn fingerprint_at(dir: &Path, config: Option<&Path>) -> Result<String, AppError> {
    let path = resolve_config_path(config, dir)?;
    fingerprint::execute(&path)
}

/// Write a starter descriptor into the current directory.
pub fn init(options: InitOptions) -> Result<std::path::PathBuf, AppError> {
    init_at(&std::env::current_dir()?, options)
}

pub fn init_at(dir: &Path, options: InitOptions) -> Result<std::path::PathBuf, AppError> {
    init::execute(dir, options)
}
