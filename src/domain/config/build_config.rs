//! Build descriptor domain model.

use serde::Serialize;

use super::{ContentGlob, DarkModeStrategy, MergePolicy, Palette, PluginRef};

/// Validated build descriptor consumed by the utility-class generator.
///
/// Serializes back to the artifact layout (`darkMode`, `content`, `plugins`,
/// `theme`), so a serialized config reloads to an equal value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    /// Dark-mode activation mechanism.
    pub dark_mode: DarkModeStrategy,
    /// Scan targets, in declaration order. Never empty.
    pub content: Vec<ContentGlob>,
    /// Plugin references, in declaration order.
    pub plugins: Vec<PluginRef>,
    /// Theme token sources.
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ThemeConfig {
    /// Replaces the built-in palette when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Palette>,
    /// Additive tokens merged over the base palette.
    pub extend: ThemeExtend,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ThemeExtend {
    pub colors: Palette,
}

impl ThemeConfig {
    /// Token sources with their merge policy, in application order.
    pub fn color_layers(&self) -> Vec<(MergePolicy, &Palette)> {
        let mut layers = Vec::with_capacity(2);
        if let Some(colors) = &self.colors {
            layers.push((MergePolicy::Replace, colors));
        }
        layers.push((MergePolicy::Extend, &self.extend.colors));
        layers
    }

    /// Merge this theme onto the generator's default color table.
    pub fn merge_colors(&self, defaults: &Palette) -> Palette {
        let mut table = defaults.clone();
        for (policy, layer) in self.color_layers() {
            table.apply(layer, policy);
        }
        table
    }
}

impl BuildConfig {
    /// Resolved color token table for this descriptor.
    pub fn resolve_colors(&self, defaults: &Palette) -> Palette {
        let table = self.theme.merge_colors(defaults);
        tracing::debug!(
            default_categories = defaults.len(),
            extended_categories = self.theme.extend.colors.len(),
            replaced = self.theme.colors.is_some(),
            resolved_tokens = table.token_count(),
            "merged color tokens"
        );
        table
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::domain::config::{ColorValueDto, RawScalar, ShadeKey};

    fn palette(prefix: &str, entries: &[(&str, &str, &str)]) -> Palette {
        let mut raw: BTreeMap<String, BTreeMap<ShadeKey, RawScalar>> = BTreeMap::new();
        for (category, shade, color) in entries {
            raw.entry(category.to_string())
                .or_default()
                .insert(ShadeKey::from(*shade), RawScalar::from(*color));
        }
        let raw = raw.into_iter().map(|(k, v)| (k, ColorValueDto::Scale(v))).collect();
        Palette::from_dto(prefix, raw).unwrap()
    }

    #[test]
    fn extend_only_theme_keeps_defaults() {
        let defaults =
            palette("defaults", &[("pink", "500", "#ec4899"), ("gray", "500", "#6b7280")]);
        let theme = ThemeConfig {
            colors: None,
            extend: ThemeExtend { colors: palette("x", &[("pink", "600", "#db2777")]) },
        };

        let merged = theme.merge_colors(&defaults);

        assert_eq!(merged.get("pink", Some("600")).unwrap().as_str(), "#db2777");
        assert_eq!(merged.get("pink", Some("500")).unwrap().as_str(), "#ec4899");
        assert_eq!(merged.get("gray", Some("500")).unwrap().as_str(), "#6b7280");
    }

    #[test]
    fn replace_then_extend() {
        let defaults = palette("defaults", &[("gray", "500", "#6b7280")]);
        let theme = ThemeConfig {
            colors: Some(palette("theme.colors", &[("brand", "500", "#112233")])),
            extend: ThemeExtend { colors: palette("x", &[("brand", "600", "#223344")]) },
        };

        let merged = theme.merge_colors(&defaults);

        assert!(merged.category("gray").is_none());
        assert_eq!(merged.get("brand", Some("500")).unwrap().as_str(), "#112233");
        assert_eq!(merged.get("brand", Some("600")).unwrap().as_str(), "#223344");
    }

    #[test]
    fn layers_are_ordered_replace_first() {
        let theme =
            ThemeConfig { colors: Some(Palette::default()), extend: ThemeExtend::default() };
        let policies: Vec<MergePolicy> =
            theme.color_layers().into_iter().map(|(policy, _)| policy).collect();
        assert_eq!(policies, [MergePolicy::Replace, MergePolicy::Extend]);
    }
}
