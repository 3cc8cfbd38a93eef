//! Light/dark theme pairs selected by the current theme mode.

use console::Style;

use super::mode::ThemeMode;
use super::theme::Theme;

/// Separate themes for light and dark mode.
///
/// Where an OS-adaptive theme would ask the desktop which variant to use, a
/// pair is resolved against the user's persisted [`ThemeMode`].
#[derive(Debug, Clone)]
pub struct ThemePair {
    light: Theme,
    dark: Theme,
}

impl ThemePair {
    pub fn new(light: Theme, dark: Theme) -> Self {
        Self { light, dark }
    }

    /// Returns the variant matching `mode`.
    pub fn resolve(&self, mode: ThemeMode) -> &Theme {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}

impl Default for ThemePair {
    /// Styles used by the `lightswitch` status output.
    ///
    /// Both variants define `mode`, `label` and `hint`. Light terminals get
    /// darker foregrounds so the text stays readable on a pale background.
    fn default() -> Self {
        let light = Theme::new()
            .add("mode", Style::new().blue().bold())
            .add("label", Style::new().black())
            .add("hint", Style::new().black().dim());
        let dark = Theme::new()
            .add("mode", Style::new().yellow().bold())
            .add("label", Style::new().white())
            .add("hint", Style::new().white().dim());
        Self::new(light, dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_picks_variant() {
        let light = Theme::new().add("tone", Style::new().green());
        let dark = Theme::new().add("tone", Style::new().red());
        let pair = ThemePair::new(light, dark);

        assert!(pair
            .resolve(ThemeMode::Dark)
            .apply("tone", "x", true)
            .contains("\x1b[31"));
        assert!(pair
            .resolve(ThemeMode::Light)
            .apply("tone", "x", true)
            .contains("\x1b[32"));
    }

    #[test]
    fn test_default_pair_defines_status_styles() {
        let pair = ThemePair::default();
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            let theme = pair.resolve(mode);
            assert!(theme.has("mode"));
            assert!(theme.has("label"));
            assert!(theme.has("hint"));
        }
    }
}
