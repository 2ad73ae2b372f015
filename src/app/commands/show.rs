use std::path::Path;

use crate::app::config::load_config;
use crate::domain::config::to_artifact_string;
use crate::domain::{AppError, ConfigFormat};

/// Render the normalized descriptor at `path`, in `format` or its own format.
pub fn execute(path: &Path, format: Option<ConfigFormat>) -> Result<String, AppError> {
    let config = load_config(path)?;
    let format = match format {
        Some(format) => format,
        None => ConfigFormat::from_path(path)?,
    };
    Ok(to_artifact_string(&config, format)?)
}
