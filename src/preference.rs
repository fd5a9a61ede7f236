//! The two-valued theme preference.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParsePreferenceError;

/// The user's chosen UI theme.
///
/// Persisted as the lowercase strings `"light"` and `"dark"`. Anything else
/// found in storage is malformed and reads back as [`ThemePreference::Light`]
/// (see [`ThemePreference::from_stored`]).
///
/// # Example
///
/// ```rust
/// use theme_switch::ThemePreference;
///
/// let pref: ThemePreference = "dark".parse().unwrap();
/// assert_eq!(pref.toggle(), ThemePreference::Light);
/// assert_eq!(ThemePreference::from_stored("Dark"), ThemePreference::Light);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Light background, dark text.
    #[default]
    Light,
    /// Dark background, light text.
    Dark,
}

impl ThemePreference {
    /// Both variants, light first.
    pub const ALL: [ThemePreference; 2] = [ThemePreference::Light, ThemePreference::Dark];

    /// Returns the other variant.
    pub fn toggle(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    /// The persisted representation.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemePreference::Dark
    }

    /// Coerces a stored value into a preference.
    ///
    /// Only the exact strings `"light"` and `"dark"` are recognized; every
    /// other value, including the empty string, yields `Light`.
    pub fn from_stored(value: &str) -> Self {
        value.parse().unwrap_or(ThemePreference::Light)
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = ParsePreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            other => Err(ParsePreferenceError {
                value: other.to_string(),
            }),
        }
    }
}

/// Pure toggle, for callers that prefer the free-function form.
pub fn toggle(current: ThemePreference) -> ThemePreference {
    current.toggle()
}
