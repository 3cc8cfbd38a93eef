//! Named style collections.

use std::collections::HashMap;

use console::Style;

/// A named collection of styles used when rendering terminal output.
///
/// # Example
///
/// ```rust
/// use lightswitch::Theme;
/// use console::Style;
///
/// let theme = Theme::new()
///     .add("muted", Style::new().dim())
///     .add("accent", Style::new().cyan().bold());
///
/// assert!(theme.has("accent"));
/// assert_eq!(theme.apply("accent", "hi", false), "hi");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    /// Creates an empty theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named style, returning an updated theme for chaining.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Applies the named style to `text`.
    ///
    /// Unknown style names leave the text untouched. With `use_color` false the
    /// text is returned without escape codes even if the style has colors.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) => style
                .clone()
                .force_styling(use_color)
                .apply_to(text)
                .to_string(),
            None => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_add_concrete() {
        let theme = Theme::new().add("bold", Style::new().bold());
        assert!(theme.has("bold"));
        assert!(!theme.has("dim"));
    }

    #[test]
    fn test_theme_default_is_empty() {
        assert!(Theme::default().is_empty());
    }

    #[test]
    fn test_apply_without_color_is_plain() {
        let theme = Theme::new().add("ok", Style::new().green());
        assert_eq!(theme.apply("ok", "done", false), "done");
    }

    #[test]
    fn test_apply_with_color_emits_ansi() {
        let theme = Theme::new().add("ok", Style::new().green());
        let out = theme.apply("ok", "done", true);
        assert!(out.contains("\x1b[32"));
        assert!(out.contains("done"));
    }

    #[test]
    fn test_apply_unknown_style_passes_through() {
        let theme = Theme::new();
        assert_eq!(theme.apply("missing", "text", true), "text");
    }
}
