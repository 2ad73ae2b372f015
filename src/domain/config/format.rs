use std::fmt;
use std::path::Path;

use super::ConfigError;

/// Serialization format of a build descriptor file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ConfigFormat {
    #[default]
    Toml,
    Json,
    Yaml,
}

impl ConfigFormat {
    pub const ALL: [ConfigFormat; 3] = [ConfigFormat::Toml, ConfigFormat::Json, ConfigFormat::Yaml];

    /// Canonical file extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ConfigFormat::Toml => "toml",
            ConfigFormat::Json => "json",
            ConfigFormat::Yaml => "yaml",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConfigFormat::Toml => "TOML",
            ConfigFormat::Json => "JSON",
            ConfigFormat::Yaml => "YAML",
        }
    }

    pub fn from_extension(extension: &str) -> Option<ConfigFormat> {
        match extension.to_ascii_lowercase().as_str() {
            "toml" => Some(ConfigFormat::Toml),
            "json" => Some(ConfigFormat::Json),
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            _ => None,
        }
    }

    /// Detect the format from a file path's extension.
    pub fn from_path(path: &Path) -> Result<ConfigFormat, ConfigError> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(ConfigFormat::from_extension)
            .ok_or_else(|| ConfigError::UnsupportedFormat { path: path.display().to_string() })
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
