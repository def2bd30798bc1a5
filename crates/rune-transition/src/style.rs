//! Style declarations produced by transitions.
//!
//! A [`StyleDeclaration`] is the per-frame output handed to the host: an
//! ordered list of CSS properties that renders as a declaration string such
//! as `opacity: 0.25; transform: translate(4px, 0px)`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TransitionError;

/// One `property: value` pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleEntry {
    pub property: &'static str,
    pub value: String,
}

/// Ordered set of CSS declarations for a single frame. Output only, so it
/// serializes but never deserializes.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct StyleDeclaration {
    entries: Vec<StyleEntry>,
}

impl StyleDeclaration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declaration. Later entries for the same property win when the
    /// host applies the string, matching CSS cascade order.
    pub fn push(&mut self, property: &'static str, value: impl Into<String>) {
        self.entries.push(StyleEntry {
            property,
            value: value.into(),
        });
    }

    /// Builder form of [`push`](Self::push).
    pub fn with(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.push(property, value);
        self
    }

    /// Value of the last declaration for `property`.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|entry| entry.property == property)
            .map(|entry| entry.value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &StyleEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as a CSS declaration string.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StyleDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, entry) in self.entries.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}: {};", entry.property, entry.value)?;
        }
        Ok(())
    }
}

/// Join a resting CSS prefix (an element's own transform or filter) with an
/// animated function list, dropping the separator when the prefix is empty.
pub(crate) fn compose(prefix: &str, animated: &str) -> String {
    if prefix.is_empty() {
        animated.to_string()
    } else {
        format!("{prefix} {animated}")
    }
}

/// Fold negative zero into zero so it renders as `0` rather than `-0`.
pub(crate) fn unsigned_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

/// A CSS length with its unit, e.g. `50%` or `-2rem`.
///
/// Bare numbers default to `px`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CssLength {
    pub value: f64,
    pub unit: String,
}

impl CssLength {
    pub fn px(value: f64) -> Self {
        Self {
            value,
            unit: "px".to_string(),
        }
    }

    /// This length multiplied by `factor`, rendered with its unit.
    pub fn scaled_css(&self, factor: f64) -> String {
        format!("{}{}", unsigned_zero(self.value * factor), self.unit)
    }
}

impl Default for CssLength {
    fn default() -> Self {
        Self::px(0.0)
    }
}

impl From<f64> for CssLength {
    fn from(value: f64) -> Self {
        Self::px(value)
    }
}

impl FromStr for CssLength {
    type Err = TransitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // Longest numeric prefix, so `2em` splits as `2` + `em`.
        let (value, unit) = (1..=trimmed.len())
            .rev()
            .filter(|&end| trimmed.is_char_boundary(end))
            .find_map(|end| {
                let (number, unit) = trimmed.split_at(end);
                number.parse::<f64>().ok().map(|value| (value, unit))
            })
            .ok_or_else(|| TransitionError::InvalidLength(s.to_string()))?;
        let valid_unit = unit.is_empty()
            || unit == "%"
            || unit.chars().all(|c| c.is_ascii_alphabetic());
        if !value.is_finite() || !valid_unit {
            return Err(TransitionError::InvalidLength(s.to_string()));
        }

        Ok(Self {
            value,
            unit: if unit.is_empty() { "px" } else { unit }.to_string(),
        })
    }
}

impl fmt::Display for CssLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_rendering() {
        let style = StyleDeclaration::new()
            .with("opacity", "0.25")
            .with("transform", "scale(2)");
        assert_eq!(style.to_css(), "opacity: 0.25; transform: scale(2);");
        assert_eq!(style.len(), 2);
        assert_eq!(style.get("transform"), Some("scale(2)"));
        assert_eq!(style.get("filter"), None);
    }

    #[test]
    fn test_declaration_serializes() {
        let style = StyleDeclaration::new().with("opacity", "0.5");
        let text = toml::to_string(&style).unwrap();
        assert!(text.contains("property = \"opacity\""));
        assert!(text.contains("value = \"0.5\""));
    }

    #[test]
    fn test_last_declaration_wins() {
        let style = StyleDeclaration::new()
            .with("opacity", "1")
            .with("opacity", "0.5");
        assert_eq!(style.get("opacity"), Some("0.5"));
    }

    #[test]
    fn test_compose_prefix() {
        assert_eq!(compose("", "scale(1)"), "scale(1)");
        assert_eq!(compose("rotate(45deg)", "scale(1)"), "rotate(45deg) scale(1)");
    }

    #[test]
    fn test_parse_lengths() {
        assert_eq!("50%".parse::<CssLength>().unwrap(), CssLength {
            value: 50.0,
            unit: "%".to_string()
        });
        assert_eq!("-20".parse::<CssLength>().unwrap(), CssLength::px(-20.0));
        assert_eq!("1.5rem".parse::<CssLength>().unwrap().unit, "rem");
        assert_eq!("2em".parse::<CssLength>().unwrap(), CssLength {
            value: 2.0,
            unit: "em".to_string()
        });
        assert_eq!(" 5px ".parse::<CssLength>().unwrap(), CssLength::px(5.0));
    }

    #[test]
    fn test_parse_invalid_lengths() {
        assert!("px".parse::<CssLength>().is_err());
        assert!("".parse::<CssLength>().is_err());
        assert!("10p x".parse::<CssLength>().is_err());
        assert!("10#".parse::<CssLength>().is_err());
    }

    #[test]
    fn test_scaled_css() {
        let length: CssLength = "40%".parse().unwrap();
        assert_eq!(length.scaled_css(0.5), "20%");
        assert_eq!(CssLength::px(8.0).scaled_css(0.0), "0px");
        assert_eq!(CssLength::px(-8.0).scaled_css(0.0), "0px");
    }
}
