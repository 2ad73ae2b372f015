//! Raw artifact shape and its conversion into the validated model.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::{
    BuildConfig, ColorValueDto, ConfigError, ContentGlob, DarkModeStrategy, Palette, PluginRef,
    RawScalar, ThemeConfig, ThemeExtend,
};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct BuildConfigDto {
    pub dark_mode: Option<RawScalar>,
    pub content: Option<Vec<RawScalar>>,
    pub theme: Option<ThemeDto>,
    pub plugins: Option<Vec<RawScalar>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeDto {
    pub colors: Option<BTreeMap<String, ColorValueDto>>,
    pub extend: Option<ThemeExtendDto>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeExtendDto {
    pub colors: Option<BTreeMap<String, ColorValueDto>>,
}

impl TryFrom<BuildConfigDto> for BuildConfig {
    type Error = ConfigError;

    fn try_from(dto: BuildConfigDto) -> Result<Self, Self::Error> {
        let dark_mode = match dto.dark_mode {
            Some(value) => DarkModeStrategy::parse(value.rendered())?,
            None => DarkModeStrategy::default(),
        };

        let patterns = dto.content.unwrap_or_default();
        if patterns.is_empty() {
            return Err(ConfigError::MissingRequiredField { key: "content".to_string() });
        }
        let content = patterns
            .iter()
            .map(|pattern| match pattern.as_text() {
                Some(text) => ContentGlob::new(text),
                None => Err(ConfigError::InvalidGlobPattern {
                    pattern: pattern.rendered().to_string(),
                    details: "expected a string".to_string(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let theme = match dto.theme {
            Some(theme) => ThemeConfig::try_from(theme)?,
            None => ThemeConfig::default(),
        };

        let plugins = dto
            .plugins
            .unwrap_or_default()
            .iter()
            .enumerate()
            .map(|(index, reference)| match reference.as_text() {
                Some(text) => PluginRef::new(index, text),
                None => Err(ConfigError::InvalidPluginReference {
                    index,
                    details: format!("expected a string, found {}", reference.rendered()),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(BuildConfig { dark_mode, content, plugins, theme })
    }
}

impl TryFrom<ThemeDto> for ThemeConfig {
    type Error = ConfigError;

    fn try_from(dto: ThemeDto) -> Result<Self, Self::Error> {
        let colors = dto.colors.map(|raw| Palette::from_dto("theme.colors", raw)).transpose()?;
        let extend_colors = match dto.extend.and_then(|extend| extend.colors) {
            Some(raw) => Palette::from_dto("theme.extend.colors", raw)?,
            None => Palette::default(),
        };
        Ok(ThemeConfig { colors, extend: ThemeExtend { colors: extend_colors } })
    }
}
