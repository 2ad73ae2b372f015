//! Color literal validation.

use std::fmt;

use serde::Serialize;

use super::{ConfigError, RawScalar};

const FUNCTIONS: [&str; 4] = ["rgb", "rgba", "hsl", "hsla"];
const KEYWORDS: [&str; 3] = ["transparent", "currentColor", "inherit"];

/// A syntactically valid CSS color value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ColorLiteral(String);

impl ColorLiteral {
    /// Validate `value` found at `key`.
    pub fn parse(key: &str, value: &str) -> Result<Self, ConfigError> {
        if is_valid_color(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(ConfigError::MalformedColorLiteral {
                key: key.to_string(),
                value: value.to_string(),
            })
        }
    }

    /// Validate a raw artifact value; non-strings are always malformed.
    pub fn from_raw(key: &str, raw: &RawScalar) -> Result<Self, ConfigError> {
        match raw.as_text() {
            Some(value) => Self::parse(key, value),
            None => Err(ConfigError::MalformedColorLiteral {
                key: key.to_string(),
                value: raw.rendered().to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColorLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn is_valid_color(value: &str) -> bool {
    if let Some(digits) = value.strip_prefix('#') {
        return is_hex_color(digits);
    }
    if KEYWORDS.contains(&value) {
        return true;
    }
    is_functional_color(value)
}

fn is_hex_color(digits: &str) -> bool {
    matches!(digits.len(), 3 | 4 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

fn is_functional_color(value: &str) -> bool {
    let Some(open) = value.find('(') else {
        return false;
    };
    let name = value[..open].to_ascii_lowercase();
    if !FUNCTIONS.contains(&name.as_str()) {
        return false;
    }
    let Some(args) = value[open + 1..].strip_suffix(')') else {
        return false;
    };
    if args.trim().is_empty() {
        return false;
    }

    // Nested calls such as `rgb(var(--brand) / 0.5)` are allowed; the
    // argument list only has to stay balanced.
    let mut depth = 0usize;
    for c in args.chars() {
        match c {
            '(' => depth += 1,
            ')' => match depth.checked_sub(1) {
                Some(next) => depth = next,
                None => return false,
            },
            _ => {}
        }
    }
    depth == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_hex_forms() {
        for value in ["#fff", "#FFFA", "#ec4899", "#db2777cc"] {
            assert!(is_valid_color(value), "{value} should be valid");
        }
    }

    #[test]
    fn rejects_bad_hex() {
        for value in ["#", "#ff", "#ec489", "#ec48990", "#gg4899", "ec4899"] {
            assert!(!is_valid_color(value), "{value} should be invalid");
        }
    }

    #[test]
    fn accepts_functional_notation() {
        for value in [
            "rgb(236 72 153)",
            "rgba(236, 72, 153, 0.5)",
            "hsl(330 81% 60%)",
            "RGB(0,0,0)",
            "rgb(var(--brand) / 0.5)",
        ] {
            assert!(is_valid_color(value), "{value} should be valid");
        }
    }

    #[test]
    fn rejects_broken_functional_notation() {
        for value in ["rgb()", "rgb(1 2 3", "cmyk(0 0 0 0)", "rgb(1))", "rgb(var(--x)"] {
            assert!(!is_valid_color(value), "{value} should be invalid");
        }
    }

    #[test]
    fn accepts_keywords() {
        for value in KEYWORDS {
            assert!(is_valid_color(value));
        }
        assert!(!is_valid_color("pinkish"));
        assert!(!is_valid_color(""));
    }

    #[test]
    fn non_string_values_are_malformed() {
        let raw = RawScalar::Other("123".to_string());
        let err = ColorLiteral::from_raw("theme.extend.colors.pink.600", &raw).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Malformed color literal '123' at 'theme.extend.colors.pink.600'"
        );
    }

    #[test]
    fn parse_reports_key_path() {
        let err = ColorLiteral::parse("theme.extend.colors.pink.600", "#xyz").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MalformedColorLiteral { ref key, ref value }
                if key == "theme.extend.colors.pink.600" && value == "#xyz"
        ));
    }
}
