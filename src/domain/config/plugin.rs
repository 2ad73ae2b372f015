use serde::Serialize;

use super::ConfigError;

/// Opaque reference to a generator plugin (module name or path).
///
/// The descriptor only carries these through; it never resolves or runs them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PluginRef(String);

impl PluginRef {
    pub fn new(index: usize, reference: &str) -> Result<Self, ConfigError> {
        if reference.trim().is_empty() {
            return Err(ConfigError::InvalidPluginReference {
                index,
                details: "reference is blank".to_string(),
            });
        }
        Ok(Self(reference.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
