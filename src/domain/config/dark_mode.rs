use std::fmt;

use serde::Serialize;

use super::ConfigError;

/// How dark-mode-scoped utility classes are activated downstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DarkModeStrategy {
    /// `prefers-color-scheme` media query.
    #[default]
    Media,
    /// Explicit `dark` class on an ancestor element.
    Class,
}

impl DarkModeStrategy {
    /// All recognized strategies in declaration order.
    pub const ALL: [DarkModeStrategy; 2] = [DarkModeStrategy::Media, DarkModeStrategy::Class];

    /// Value as written in the artifact.
    pub fn as_str(&self) -> &'static str {
        match self {
            DarkModeStrategy::Media => "media",
            DarkModeStrategy::Class => "class",
        }
    }

    /// Short explanation shown by interactive prompts.
    pub fn description(&self) -> &'static str {
        match self {
            DarkModeStrategy::Media => "follow the operating system preference",
            DarkModeStrategy::Class => "toggle manually with a `dark` class",
        }
    }

    pub fn from_name(name: &str) -> Option<DarkModeStrategy> {
        Self::ALL.into_iter().find(|strategy| strategy.as_str() == name)
    }

    /// Parse the `darkMode` artifact value, failing with `InvalidEnumValue`.
    pub fn parse(value: &str) -> Result<DarkModeStrategy, ConfigError> {
        Self::from_name(value).ok_or_else(|| ConfigError::InvalidEnumValue {
            key: "darkMode".to_string(),
            value: value.to_string(),
            expected: Self::ALL.map(|strategy| strategy.as_str()).join(", "),
        })
    }
}

impl fmt::Display for DarkModeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
