use std::path::{Path, PathBuf};

use super::ConfigFormat;

/// Base name shared by every discoverable descriptor file.
pub const CONFIG_STEM: &str = "utilcfg";

/// Discoverable descriptor file names, in lookup priority order.
pub const CONFIG_FILE_NAMES: [&str; 4] =
    ["utilcfg.toml", "utilcfg.json", "utilcfg.yaml", "utilcfg.yml"];

/// `utilcfg.<ext>` inside `dir`.
pub fn config_file(dir: &Path, format: ConfigFormat) -> PathBuf {
    dir.join(format!("{}.{}", CONFIG_STEM, format.extension()))
}

/// Every discoverable descriptor path inside `dir`, in priority order.
pub fn candidates(dir: &Path) -> impl Iterator<Item = PathBuf> + '_ {
    CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name))
}
