//! Loosely typed leaf values read from an artifact.

use std::fmt;

use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// A leaf value as written in the artifact.
///
/// Wrongly typed values (`darkMode = true`, `600 = 123`) still deserialize, so
/// validation can reject them with the key they were found at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawScalar {
    Text(String),
    /// Any non-string value, rendered for error messages.
    Other(String),
}

impl RawScalar {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawScalar::Text(text) => Some(text),
            RawScalar::Other(_) => None,
        }
    }

    /// The value as written.
    pub fn rendered(&self) -> &str {
        match self {
            RawScalar::Text(value) | RawScalar::Other(value) => value,
        }
    }
}

impl From<&str> for RawScalar {
    fn from(text: &str) -> Self {
        RawScalar::Text(text.to_string())
    }
}

impl<'de> Deserialize<'de> for RawScalar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RawScalarVisitor;

        impl<'de> Visitor<'de> for RawScalarVisitor {
            type Value = RawScalar;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a scalar value")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<RawScalar, E> {
                Ok(RawScalar::Text(value.to_string()))
            }

            fn visit_string<E: de::Error>(self, value: String) -> Result<RawScalar, E> {
                Ok(RawScalar::Text(value))
            }

            fn visit_bool<E: de::Error>(self, value: bool) -> Result<RawScalar, E> {
                Ok(RawScalar::Other(value.to_string()))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<RawScalar, E> {
                Ok(RawScalar::Other(value.to_string()))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<RawScalar, E> {
                Ok(RawScalar::Other(value.to_string()))
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<RawScalar, E> {
                Ok(RawScalar::Other(value.to_string()))
            }

            fn visit_unit<E: de::Error>(self) -> Result<RawScalar, E> {
                Ok(RawScalar::Other("null".to_string()))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<RawScalar, A::Error> {
                let mut len = 0usize;
                while seq.next_element::<IgnoredAny>()?.is_some() {
                    len += 1;
                }
                Ok(RawScalar::Other(format!("an array of {} item(s)", len)))
            }
        }

        deserializer.deserialize_any(RawScalarVisitor)
    }
}
