//! Theme modes and style collections.
//!
//! - [`ThemeMode`]: the persisted light/dark preference
//! - [`Theme`]: a named collection of terminal styles
//! - [`ThemePair`]: light and dark themes selected by mode

mod mode;
mod pair;
#[allow(clippy::module_inception)]
mod theme;

pub use mode::{ParseModeError, ThemeMode};
pub use pair::ThemePair;
pub use theme::Theme;
