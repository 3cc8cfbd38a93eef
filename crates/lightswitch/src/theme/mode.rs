//! The two-valued theme preference.

use serde::{Deserialize, Serialize};

/// The user's chosen color mode.
///
/// Dark is the default: a document without the light marker is dark, and any
/// stored value other than `"light"` reads as dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    /// Returns the value written to the preference store.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Interprets a stored value.
    ///
    /// Only the exact string `"light"` selects light mode. Missing values,
    /// `"dark"`, and anything unrecognized all fall back to dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => ThemeMode::Light,
            _ => ThemeMode::Dark,
        }
    }

    /// Maps the presence of the light marker to a mode.
    pub fn from_marker(present: bool) -> Self {
        if present {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }

    /// Returns the opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_light(self) -> bool {
        self == ThemeMode::Light
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a mode name from user input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme mode '{0}' (expected 'light' or 'dark')")]
pub struct ParseModeError(pub String);

impl std::str::FromStr for ThemeMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
    }

    #[test]
    fn test_from_stored_only_exact_light() {
        assert_eq!(ThemeMode::from_stored(Some("light")), ThemeMode::Light);
        assert_eq!(ThemeMode::from_stored(Some("dark")), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_stored(None), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_stored(Some("Light")), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_stored(Some("")), ThemeMode::Dark);
    }

    #[test]
    fn test_toggled_twice_is_identity() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(mode.toggled().toggled(), mode);
            assert_ne!(mode.toggled(), mode);
        }
    }

    #[test]
    fn test_from_str_is_lenient_about_case() {
        assert_eq!(" Light ".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
        assert_eq!("DARK".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        let err = "sepia".parse::<ThemeMode>().unwrap_err();
        assert!(err.to_string().contains("sepia"));
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&ThemeMode::Light).unwrap();
        assert_eq!(json, "\"light\"");
        let back: ThemeMode = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(back, ThemeMode::Dark);
    }
}
