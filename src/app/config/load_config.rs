use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::config::{self, paths};
use crate::domain::{AppError, BuildConfig, ConfigError, ConfigFormat};

/// Load and validate the build descriptor at `path`.
///
/// The format follows the file extension. Reading the same unchanged file
/// always yields an equal `BuildConfig`.
pub fn load_config(path: &Path) -> Result<BuildConfig, ConfigError> {
    let format = ConfigFormat::from_path(path)?;
    let content = fs::read_to_string(path)
        .map_err(|source| ConfigError::Io { path: path.display().to_string(), source })?;

    tracing::debug!(path = %path.display(), format = format.label(), "loading build descriptor");
    let config = config::parse_config_content(&content, format)?;
    tracing::debug!(
        dark_mode = %config.dark_mode,
        patterns = config.content.len(),
        plugins = config.plugins.len(),
        "loaded build descriptor"
    );
    Ok(config)
}

/// Find the descriptor in `dir`, trying each known file name in priority order.
pub fn discover_config(dir: &Path) -> Result<PathBuf, AppError> {
    paths::candidates(dir).find(|path| path.is_file()).ok_or_else(|| AppError::ConfigNotFound {
        dir: dir.display().to_string(),
        candidates: paths::CONFIG_FILE_NAMES.join(", "),
    })
}

/// Use `explicit` when given, otherwise discover a descriptor in `dir`.
pub fn resolve_config_path(explicit: Option<&Path>, dir: &Path) -> Result<PathBuf, AppError> {
    match explicit {
        Some(path) if path.is_absolute() => Ok(path.to_path_buf()),
        Some(path) => Ok(dir.join(path)),
        None => discover_config(dir),
    }
}
