use std::io;

/// Build descriptor load/validation error.
///
/// Every variant names the offending key or file so the build can abort with
/// a message the user can act on.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required field '{key}'")]
    MissingRequiredField { key: String },

    #[error("Invalid value '{value}' for '{key}': expected one of {expected}")]
    InvalidEnumValue { key: String, value: String, expected: String },

    #[error("Malformed color literal '{value}' at '{key}'")]
    MalformedColorLiteral { key: String, value: String },

    #[error("Invalid glob pattern '{pattern}' in 'content': {details}")]
    InvalidGlobPattern { pattern: String, details: String },

    #[error("Invalid plugin reference at 'plugins[{index}]': {details}")]
    InvalidPluginReference { index: usize, details: String },

    #[error("Unsupported config format for '{path}': expected .toml, .json, .yaml or .yml")]
    UnsupportedFormat { path: String },

    #[error("Failed to parse {format} config: {details}")]
    Parse { format: &'static str, details: String },

    #[error("Failed to serialize config as {format}: {details}")]
    Serialize { format: &'static str, details: String },

    #[error("Failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl ConfigError {
    /// Key path the error refers to, when the error is tied to one.
    pub fn key(&self) -> Option<&str> {
        match self {
            ConfigError::MissingRequiredField { key }
            | ConfigError::InvalidEnumValue { key, .. }
            | ConfigError::MalformedColorLiteral { key, .. } => Some(key),
            ConfigError::InvalidGlobPattern { .. } => Some("content"),
            ConfigError::InvalidPluginReference { .. } => Some("plugins"),
            ConfigError::UnsupportedFormat { .. }
            | ConfigError::Parse { .. }
            | ConfigError::Serialize { .. }
            | ConfigError::Io { .. } => None,
        }
    }
}
