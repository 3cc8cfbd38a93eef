//! Terminal rendering of the theme status.

mod filters;
mod output;
mod renderer;

pub use output::{OutputMode, ParseOutputModeError};
pub use renderer::Renderer;

use crate::error::Error;
use crate::theme::{ThemeMode, ThemePair};

/// Renders the one-screen status report for `mode`.
///
/// Styles come from the variant of `pair` matching `mode`, so the report
/// itself is drawn in the theme it describes.
pub fn render_status(pair: &ThemePair, mode: ThemeMode, output: OutputMode) -> Result<String, Error> {
    Renderer::new(pair.resolve(mode).clone(), output)?.status(mode)
}
