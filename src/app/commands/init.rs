use std::fs;
use std::path::{Path, PathBuf};

use crate::adapters::{STARTER_CONTENT, render_starter_config};
use crate::domain::config::paths;
use crate::domain::{AppError, ConfigFormat, DarkModeStrategy};

#[derive(Debug, Clone, Copy, Default)]
pub struct InitOptions {
    pub format: ConfigFormat,
    pub dark_mode: DarkModeStrategy,
    /// Overwrite an existing descriptor of the same format.
    pub force: bool,
}

/// Write a starter descriptor into `dir`. Returns the written path.
pub fn execute(dir: &Path, options: InitOptions) -> Result<PathBuf, AppError> {
    let target = paths::config_file(dir, options.format);

    // A descriptor in another format would shadow the new one during discovery.
    for existing in paths::candidates(dir).filter(|path| path.exists()) {
        if !(options.force && existing == target) {
            return Err(AppError::ConfigExists(existing.display().to_string()));
        }
    }

    let rendered = render_starter_config(options.format, options.dark_mode, &STARTER_CONTENT)?;
    fs::create_dir_all(dir)?;
    fs::write(&target, rendered)?;
    Ok(target)
}
