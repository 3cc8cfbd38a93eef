//! Origin-scoped key/value preference storage.
//!
//! The controller only ever talks to a [`PreferenceStore`]. Two backends are
//! provided:
//!
//! - [`MemoryStore`]: lives for the lifetime of the value, optionally disabled
//! - [`FileStore`]: one JSON file per origin, surviving process restarts

mod file;
mod memory;

use std::path::PathBuf;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Key/value storage for string preferences.
///
/// Mirrors the shape of browser local storage: a missing key is `Ok(None)`,
/// never an error.
pub trait PreferenceStore {
    /// Reads the value stored under `key`.
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &mut S {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set_item(key, value)
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set_item(key, value)
    }
}

/// Errors raised by a preference store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Storage has been switched off.
    #[error("preference storage is unavailable")]
    Unavailable,

    #[error("failed to access preference file '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but is not a JSON object of strings.
    #[error("preference file '{}' is corrupt", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode preference file '{}'", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forwarding_through_mut_ref() {
        fn write_light<S: PreferenceStore>(mut store: S) {
            store.set_item("theme", "light").unwrap();
        }

        let mut store = MemoryStore::new();
        write_light(&mut store);
        assert_eq!(store.get_item("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_forwarding_through_box() {
        let mut boxed: Box<dyn PreferenceStore> = Box::new(MemoryStore::new());
        boxed.set_item("theme", "dark").unwrap();
        assert_eq!(boxed.get_item("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_encode_error_names_file() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = StoreError::Encode {
            path: PathBuf::from("/state/o.json"),
            source,
        };
        assert!(err.to_string().contains("/state/o.json"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_unavailable_display() {
        assert_eq!(
            StoreError::Unavailable.to_string(),
            "preference storage is unavailable"
        );
    }
}
