//! Output mode control for terminal rendering.

use serde::Deserialize;

/// Controls whether styled output carries ANSI escape codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Use color when the terminal supports it.
    #[default]
    Auto,
    /// Always emit ANSI codes.
    Term,
    /// Plain text, no escape codes.
    Text,
}

impl OutputMode {
    pub fn should_use_color(self) -> bool {
        match self {
            OutputMode::Auto => console::colors_enabled(),
            OutputMode::Term => true,
            OutputMode::Text => false,
        }
    }
}

/// Error returned for an unknown output mode name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown output mode '{0}' (expected auto, term or text)")]
pub struct ParseOutputModeError(pub String);

impl std::str::FromStr for OutputMode {
    type Err = ParseOutputModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(OutputMode::Auto),
            "term" => Ok(OutputMode::Term),
            "text" => Ok(OutputMode::Text),
            other => Err(ParseOutputModeError(other.to_string())),
        }
    }
}
