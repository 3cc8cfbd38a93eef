//! Theme controller: keeps the persisted preference and the root marker in sync.

use crate::document::ClassTarget;
use crate::error::Error;
use crate::store::PreferenceStore;
use crate::theme::ThemeMode;

/// Store key holding the preference.
pub const THEME_KEY: &str = "theme";

/// Class placed on the root element while the light theme is active.
pub const LIGHT_MARKER: &str = "light-theme";

/// Reads and writes the theme preference and reflects it on a root element.
///
/// The root starts out unmarked, which means dark. [`initialize`] runs once when
/// the document loads; [`toggle`] runs on every user click.
///
/// # Example
///
/// ```rust
/// use lightswitch::{ClassList, MemoryStore, ThemeController, ThemeMode};
///
/// let mut controller = ThemeController::new(MemoryStore::new(), ClassList::new());
/// assert_eq!(controller.initialize().unwrap(), ThemeMode::Dark);
/// assert_eq!(controller.toggle().unwrap(), ThemeMode::Light);
/// ```
///
/// [`initialize`]: ThemeController::initialize
/// [`toggle`]: ThemeController::toggle
#[derive(Debug)]
pub struct ThemeController<S, T> {
    store: S,
    root: T,
}

impl<S: PreferenceStore, T: ClassTarget> ThemeController<S, T> {
    pub fn new(store: S, root: T) -> Self {
        Self { store, root }
    }

    /// Applies the persisted preference to the root.
    ///
    /// Adds the light marker when the stored value is exactly `"light"`.
    /// Anything else, including no stored value, leaves the root as it is.
    /// Never writes to the store.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Store`] if the store cannot be read.
    pub fn initialize(&mut self) -> Result<ThemeMode, Error> {
        let stored = self.store.get_item(THEME_KEY)?;
        if let Some(value) = stored.as_deref() {
            if !matches!(value, "light" | "dark") {
                tracing::warn!(value, "ignoring unrecognized stored theme");
            }
        }

        let mode = ThemeMode::from_stored(stored.as_deref());
        if mode.is_light() {
            self.root.add_class(LIGHT_MARKER);
        }
        tracing::debug!(stored = ?stored, %mode, "initialized theme");
        Ok(self.current())
    }

    /// Flips the light marker and persists the resulting mode.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Store`] if the write fails. The marker has already been
    /// flipped by then, so the document shows the new mode even though it was
    /// not saved.
    pub fn toggle(&mut self) -> Result<ThemeMode, Error> {
        let mode = ThemeMode::from_marker(self.root.toggle_class(LIGHT_MARKER));
        self.store.set_item(THEME_KEY, mode.as_str())?;
        tracing::debug!(%mode, "toggled theme");
        Ok(mode)
    }

    /// Applies `mode` to the root and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Store`] if the write fails.
    pub fn set(&mut self, mode: ThemeMode) -> Result<(), Error> {
        if mode.is_light() {
            self.root.add_class(LIGHT_MARKER);
        } else {
            self.root.remove_class(LIGHT_MARKER);
        }
        self.store.set_item(THEME_KEY, mode.as_str())?;
        tracing::debug!(%mode, "set theme");
        Ok(())
    }

    /// Returns the mode shown by the root element.
    pub fn current(&self) -> ThemeMode {
        ThemeMode::from_marker(self.root.contains_class(LIGHT_MARKER))
    }

    pub fn root(&self) -> &T {
        &self.root
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_parts(self) -> (S, T) {
        (self.store, self.root)
    }
}
