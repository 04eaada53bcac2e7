// Shared enums: output Style, ReplaceStyle, and the configuration parse error

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing a style or case mapper name fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown style: {0}")]
    UnknownStyle(String),
    #[error("unknown replace style: {0}")]
    UnknownReplaceStyle(String),
    #[error("unknown caser: {0}")]
    UnknownCaser(String),
}

/// Casing applied to ordinary (non-replaced) tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Style {
    /// Every rune lowercase: "http".
    #[default]
    Lower,
    /// First rune title case, rest uppercase: "HTTP".
    Screaming,
    /// First rune title case, rest lowercase: "Http".
    Camel,
    /// Like `Camel`, but the first emitted segment is all lowercase.
    LowerCamel,
}

/// Spelling used for tokens matched against the replacement table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ReplaceStyle {
    /// The camel spelling: "Http".
    Camel,
    /// The screaming spelling: "HTTP".
    #[default]
    Screaming,
    /// The screaming spelling lowercased: "http".
    Lower,
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Style::Lower => "lower",
            Style::Screaming => "screaming",
            Style::Camel => "camel",
            Style::LowerCamel => "lower-camel",
        })
    }
}

impl FromStr for Style {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lower" => Ok(Style::Lower),
            "screaming" | "upper" => Ok(Style::Screaming),
            "camel" => Ok(Style::Camel),
            "lower-camel" | "lowercamel" | "lower_camel" => Ok(Style::LowerCamel),
            _ => Err(ParseError::UnknownStyle(s.to_string())),
        }
    }
}

impl fmt::Display for ReplaceStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReplaceStyle::Camel => "camel",
            ReplaceStyle::Screaming => "screaming",
            ReplaceStyle::Lower => "lower",
        })
    }
}

impl FromStr for ReplaceStyle {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "camel" => Ok(ReplaceStyle::Camel),
            "screaming" | "upper" => Ok(ReplaceStyle::Screaming),
            "lower" => Ok(ReplaceStyle::Lower),
            _ => Err(ParseError::UnknownReplaceStyle(s.to_string())),
        }
    }
}
