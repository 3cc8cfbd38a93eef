use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{PreferenceStore, StoreError};

/// Preference store backed by one JSON file per origin.
///
/// The file lives at `<dir>/<origin>.json`, with every character of the origin
/// outside `[A-Za-z0-9._-]` replaced by `_`. It holds a flat JSON object of
/// string values. A missing file reads as an empty store. Reading a corrupt
/// file fails; writing over one replaces it with a fresh object.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Opens the store for `origin` inside `dir`.
    ///
    /// Nothing touches the filesystem until the first read or write.
    pub fn open(dir: impl AsRef<Path>, origin: &str) -> Self {
        let path = dir
            .as_ref()
            .join(format!("{}.json", sanitize_origin(origin)));
        Self { path }
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, items: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let io_err = |source: std::io::Error| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let body = serde_json::to_string_pretty(items).map_err(|source| StoreError::Encode {
            path: self.path.clone(),
            source,
        })?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, body).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)
    }
}

impl PreferenceStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut items = self.load()?;
        let value = items.remove(key);
        tracing::debug!(path = %self.path.display(), key, ?value, "read preference");
        Ok(value)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut items = match self.load() {
            Ok(items) => items,
            Err(StoreError::Corrupt { path, source }) => {
                tracing::warn!(path = %path.display(), error = %source, "replacing corrupt preference file");
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        items.insert(key.to_string(), value.to_string());
        self.save(&items)?;
        tracing::debug!(path = %self.path.display(), key, value, "wrote preference");
        Ok(())
    }
}

fn sanitize_origin(origin: &str) -> String {
    origin
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
