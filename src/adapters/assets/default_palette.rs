//! Built-in color token table embedded in the binary.

use std::collections::BTreeMap;

use include_dir::{Dir, include_dir};

use crate::domain::config::ColorValueDto;
use crate::domain::{AppError, Palette};

static ASSETS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets");

const DEFAULT_COLORS_FILE: &str = "default_colors.toml";

/// The generator's default color tokens that `theme.extend.colors` merges onto.
pub fn default_palette() -> Result<Palette, AppError> {
    let file = ASSETS_DIR.get_file(DEFAULT_COLORS_FILE).ok_or_else(|| {
        AppError::InternalError(format!("Embedded asset '{}' is missing", DEFAULT_COLORS_FILE))
    })?;
    let content = file.contents_utf8().ok_or_else(|| {
        AppError::InternalError(format!("Embedded asset '{}' is not UTF-8", DEFAULT_COLORS_FILE))
    })?;
    let raw: BTreeMap<String, ColorValueDto> = toml::from_str(content).map_err(|err| {
        AppError::InternalError(format!(
            "Embedded asset '{}' is invalid: {}",
            DEFAULT_COLORS_FILE, err
        ))
    })?;
    Ok(Palette::from_dto("defaults", raw)?)
}
