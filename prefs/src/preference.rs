//! Preference value types.
//!
//! Every axis is a closed enumeration with an explicit default, so there is
//! no observable "unset" state once a [`StoredPreference`] is resolved.

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A stored or submitted value that is outside an axis enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {axis} value: {value:?}")]
pub struct ParseError {
    pub axis: &'static str,
    pub value: String,
}

// =============================================================================
// LANGUAGE
// =============================================================================

/// Interface language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Pl,
}

impl Language {
    pub const ALL: [Self; 2] = [Self::En, Self::Pl];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Pl => "pl",
        }
    }

    /// The other language of the pair.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Pl,
            Self::Pl => Self::En,
        }
    }
}

impl FromStr for Language {
    type Err = ParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "en" => Ok(Self::En),
            "pl" => Ok(Self::Pl),
            other => Err(ParseError { axis: "language", value: other.to_owned() }),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// THEME
// =============================================================================

/// A concrete colour scheme, as shown on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl FromStr for Theme {
    type Err = ParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseError { axis: "theme", value: other.to_owned() }),
        }
    }
}

/// The user's theme choice. `System` follows the device colour-scheme signal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    System,
}

impl ThemeMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Resolve to a concrete theme given the device signal.
    #[must_use]
    pub fn resolve(self, system: Theme) -> Theme {
        match self {
            Self::Light => Theme::Light,
            Self::Dark => Theme::Dark,
            Self::System => system,
        }
    }
}

impl From<Theme> for ThemeMode {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::Light,
            Theme::Dark => Self::Dark,
        }
    }
}

impl FromStr for ThemeMode {
    type Err = ParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(ParseError { axis: "theme", value: other.to_owned() }),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// PREFERENCE
// =============================================================================

/// The resolved pair of language and theme choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Preference {
    pub language: Language,
    pub theme: ThemeMode,
}

impl Preference {
    #[must_use]
    pub fn new(language: Language, theme: ThemeMode) -> Self {
        Self { language, theme }
    }

    /// Build from raw strings, normalizing anything unrecognized to the default.
    #[must_use]
    pub fn normalized(language: &str, theme: &str) -> Self {
        StoredPreference::parse(Some(language), Some(theme)).resolve()
    }
}

/// What a persistence backend actually found. Either axis may be missing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StoredPreference {
    pub language: Option<Language>,
    pub theme: Option<ThemeMode>,
}

impl StoredPreference {
    /// Parse raw stored strings. Values outside the enumeration count as absent.
    #[must_use]
    pub fn parse(language: Option<&str>, theme: Option<&str>) -> Self {
        Self {
            language: language.and_then(|raw| raw.parse().ok()),
            theme: theme.and_then(|raw| raw.parse().ok()),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.language.is_none() && self.theme.is_none()
    }

    /// Fill axes that are still missing from a lower-precedence source.
    #[must_use]
    pub fn or(self, fallback: Self) -> Self {
        Self { language: self.language.or(fallback.language), theme: self.theme.or(fallback.theme) }
    }

    /// Apply defaults to any absent axis.
    #[must_use]
    pub fn resolve(self) -> Preference {
        Preference { language: self.language.unwrap_or_default(), theme: self.theme.unwrap_or_default() }
    }
}

impl From<Preference> for StoredPreference {
    fn from(value: Preference) -> Self {
        Self { language: Some(value.language), theme: Some(value.theme) }
    }
}
