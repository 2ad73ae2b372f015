//! Pure parse/validate/serialize for build descriptors.

use sha2::{Digest, Sha256};

use super::{BuildConfig, BuildConfigDto, ConfigError, ConfigFormat};

/// Parse and validate a build descriptor from `content` in `format`.
pub fn parse_config_content(
    content: &str,
    format: ConfigFormat,
) -> Result<BuildConfig, ConfigError> {
    let parse_error = |details: String| ConfigError::Parse { format: format.label(), details };

    let dto: BuildConfigDto = match format {
        ConfigFormat::Toml => toml::from_str(content).map_err(|err| parse_error(err.to_string()))?,
        ConfigFormat::Json => {
            serde_json::from_str(content).map_err(|err| parse_error(err.to_string()))?
        }
        ConfigFormat::Yaml => {
            serde_yaml::from_str(content).map_err(|err| parse_error(err.to_string()))?
        }
    };
    BuildConfig::try_from(dto)
}

/// Serialize `config` back to the artifact form.
pub fn to_artifact_string(
    config: &BuildConfig,
    format: ConfigFormat,
) -> Result<String, ConfigError> {
    let serialize_error =
        |details: String| ConfigError::Serialize { format: format.label(), details };

    match format {
        ConfigFormat::Toml => {
            toml::to_string_pretty(config).map_err(|err| serialize_error(err.to_string()))
        }
        ConfigFormat::Json => serde_json::to_string_pretty(config)
            .map(|json| json + "\n")
            .map_err(|err| serialize_error(err.to_string())),
        ConfigFormat::Yaml => {
            serde_yaml::to_string(config).map_err(|err| serialize_error(err.to_string()))
        }
    }
}

/// SHA-256 of the canonical JSON form, as lowercase hex.
///
/// Structurally equal configs always share a fingerprint, regardless of the
/// format or key order they were loaded from.
pub fn fingerprint(config: &BuildConfig) -> Result<String, ConfigError> {
    let canonical = serde_json::to_string(config).map_err(|err| ConfigError::Serialize {
        format: ConfigFormat::Json.label(),
        details: err.to_string(),
    })?;
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    Ok(digest.iter().map(|byte| format!("{:02x}", byte)).collect())
}
