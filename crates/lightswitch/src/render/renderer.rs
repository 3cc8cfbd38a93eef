//! Status renderer.

use minijinja::Environment;
use serde::Serialize;

use super::filters::register_filters;
use super::output::OutputMode;
use crate::error::Error;
use crate::theme::{Theme, ThemeMode};

const STATUS_TEMPLATE: &str = r#"{{ "theme" | style("label") }}: {{ mode | style("mode") }}
{{ hint | style("hint") }}"#;

#[derive(Serialize)]
struct Status<'a> {
    mode: &'a str,
    hint: String,
}

/// Renders status reports with a fixed theme.
///
/// The template reads the `label`, `mode` and `hint` styles; names the theme
/// does not define are printed unstyled.
///
/// # Example
///
/// ```rust
/// use lightswitch::{OutputMode, Renderer, Theme, ThemeMode};
/// use console::Style;
///
/// let theme = Theme::new().add("mode", Style::new().bold());
/// let renderer = Renderer::new(theme, OutputMode::Text).unwrap();
/// let out = renderer.status(ThemeMode::Light).unwrap();
/// assert!(out.starts_with("theme: light"));
/// ```
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Compiles the status template, styling with `theme`.
    pub fn new(theme: Theme, output: OutputMode) -> Result<Self, Error> {
        let mut env = Environment::new();
        register_filters(&mut env, theme, output.should_use_color());
        env.add_template("status", STATUS_TEMPLATE)
            .map_err(|source| Error::Render {
                what: "status template",
                source,
            })?;
        Ok(Self { env })
    }

    /// Reports `mode` and how to switch away from it.
    pub fn status(&self, mode: ThemeMode) -> Result<String, Error> {
        let status = Status {
            mode: mode.as_str(),
            hint: format!("run `lightswitch toggle` to switch to {}", mode.toggled()),
        };
        self.env
            .get_template("status")
            .and_then(|tmpl| tmpl.render(&status))
            .map_err(|source| Error::Render {
                what: "status",
                source,
            })
    }
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer").finish_non_exhaustive()
    }
}
