use std::io;

use thiserror::Error;

use crate::domain::config::ConfigError;

/// Library-wide error type for utilcfg operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Build descriptor failed to load or validate.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// No build descriptor found in the searched directory.
    #[error("No config found in {dir} (looked for {candidates})")]
    ConfigNotFound { dir: String, candidates: String },

    /// A build descriptor already exists where `init` would write one.
    #[error("Config already exists: {0} (use --force to overwrite)")]
    ConfigExists(String),

    /// Token category requested by name is not part of the merged table.
    #[error("Token category '{name}' not found. Available: {available}")]
    CategoryNotFound { name: String, available: String },

    /// Embedded template failed to render.
    #[error("Template error: {0}")]
    Template(String),

    /// Interactive prompt failed or was aborted.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// Embedded asset is missing or invalid.
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    /// Provide an `io::ErrorKind`-like view for callers mapping errors to exit behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Config(ConfigError::Io { source, .. }) => source.kind(),
            AppError::Config(_) | AppError::CategoryNotFound { .. } => {
                io::ErrorKind::InvalidInput
            }
            AppError::ConfigNotFound { .. } => io::ErrorKind::NotFound,
            AppError::ConfigExists(_) => io::ErrorKind::AlreadyExists,
            AppError::Template(_) | AppError::Prompt(_) | AppError::InternalError(_) => {
                io::ErrorKind::Other
            }
        }
    }
}

impl From<minijinja::Error> for AppError {
    fn from(err: minijinja::Error) -> Self {
        AppError::Template(err.to_string())
    }
}
