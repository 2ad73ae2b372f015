//! Color token tables and their merge rules.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use super::{ColorLiteral, ConfigError, RawScalar};

/// Shade key within a color scale (`"500"`, `"DEFAULT"`).
///
/// Numeric keys order numerically so scales list `50, 100, ..., 950`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ShadeKey(String);

impl ShadeKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn numeric(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl Ord for ShadeKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.numeric(), other.numeric()) {
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for ShadeKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ShadeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ShadeKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

// YAML reads `500:` as an integer key; accept both spellings.
impl<'de> Deserialize<'de> for ShadeKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ShadeKeyVisitor;

        impl Visitor<'_> for ShadeKeyVisitor {
            type Value = ShadeKey;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a shade key string or integer")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<ShadeKey, E> {
                Ok(ShadeKey::new(value))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<ShadeKey, E> {
                Ok(ShadeKey::new(value.to_string()))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<ShadeKey, E> {
                Ok(ShadeKey::new(value.to_string()))
            }
        }

        deserializer.deserialize_any(ShadeKeyVisitor)
    }
}

/// A token category: either one color or a scale of shades.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ColorValue {
    Single(ColorLiteral),
    Scale(BTreeMap<ShadeKey, ColorLiteral>),
}

/// Unvalidated category value as read from an artifact.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ColorValueDto {
    Single(RawScalar),
    Scale(BTreeMap<ShadeKey, RawScalar>),
}

/// How a token source combines with the table beneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePolicy {
    /// Union at the leaf level; the incoming value wins on conflict.
    Extend,
    /// The incoming table replaces everything beneath it.
    Replace,
}

/// Color token table: category name to value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Palette(BTreeMap<String, ColorValue>);

impl Palette {
    /// Validate a raw category table. `prefix` is the key path used in errors,
    /// e.g. `theme.extend.colors`.
    pub fn from_dto(
        prefix: &str,
        raw: BTreeMap<String, ColorValueDto>,
    ) -> Result<Palette, ConfigError> {
        let mut categories = BTreeMap::new();
        for (category, value) in raw {
            let key = format!("{}.{}", prefix, category);
            let value = match value {
                ColorValueDto::Single(color) => {
                    ColorValue::Single(ColorLiteral::from_raw(&key, &color)?)
                }
                ColorValueDto::Scale(shades) => {
                    let mut scale = BTreeMap::new();
                    for (shade, color) in shades {
                        let shade_key = format!("{}.{}", key, shade);
                        scale.insert(shade, ColorLiteral::from_raw(&shade_key, &color)?);
                    }
                    ColorValue::Scale(scale)
                }
            };
            categories.insert(category, value);
        }
        Ok(Palette(categories))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn category(&self, name: &str) -> Option<&ColorValue> {
        self.0.get(name)
    }

    /// Look up a single token. Pass `None` as `shade` for single-color categories.
    pub fn get(&self, category: &str, shade: Option<&str>) -> Option<&ColorLiteral> {
        match (self.0.get(category)?, shade) {
            (ColorValue::Single(color), None) => Some(color),
            (ColorValue::Scale(scale), Some(shade)) => scale.get(&ShadeKey::new(shade)),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColorValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Total number of leaf tokens.
    pub fn token_count(&self) -> usize {
        self.0
            .values()
            .map(|value| match value {
                ColorValue::Single(_) => 1,
                ColorValue::Scale(scale) => scale.len(),
            })
            .sum()
    }

    /// Apply `incoming` on top of this table.
    pub fn apply(&mut self, incoming: &Palette, policy: MergePolicy) {
        match policy {
            MergePolicy::Replace => self.0 = incoming.0.clone(),
            MergePolicy::Extend => {
                for (category, value) in &incoming.0 {
                    match (self.0.get_mut(category), value) {
                        (Some(ColorValue::Scale(existing)), ColorValue::Scale(shades)) => {
                            for (shade, color) in shades {
                                existing.insert(shade.clone(), color.clone());
                            }
                        }
                        _ => {
                            self.0.insert(category.clone(), value.clone());
                        }
                    }
                }
            }
        }
    }
}

impl FromIterator<(String, ColorValue)> for Palette {
    fn from_iter<I: IntoIterator<Item = (String, ColorValue)>>(iter: I) -> Self {
        Palette(iter.into_iter().collect())
    }
}
