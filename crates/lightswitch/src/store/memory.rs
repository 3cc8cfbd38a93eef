use std::collections::HashMap;

use super::{PreferenceStore, StoreError};

/// In-memory preference store.
///
/// A disabled store models storage that the user has switched off: every read
/// and write fails with [`StoreError::Unavailable`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
    disabled: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store whose every operation fails.
    pub fn disabled() -> Self {
        Self {
            items: HashMap::new(),
            disabled: true,
        }
    }

    /// Seeds a value, returning the store for chaining.
    pub fn with_item(mut self, key: &str, value: &str) -> Self {
        self.items.insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.disabled {
            return Err(StoreError::Unavailable);
        }
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.disabled {
            return Err(StoreError::Unavailable);
        }
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
