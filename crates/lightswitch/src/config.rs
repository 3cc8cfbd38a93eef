//! Configuration for the `lightswitch` command.
//!
//! Values are layered: built-in defaults, then an optional JSON file, then the
//! `LIGHTSWITCH_STATE_DIR` environment variable, then command-line flags
//! (applied by the caller).

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;

use crate::error::Error;
use crate::render::OutputMode;

/// Environment variable overriding the state directory.
pub const STATE_DIR_ENV: &str = "LIGHTSWITCH_STATE_DIR";

const APP_NAME: &str = "lightswitch";

/// Origin used when none is configured.
pub const DEFAULT_ORIGIN: &str = "file://localhost";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory holding one preference file per origin.
    pub state_dir: PathBuf,
    /// Origin the preference is scoped to.
    pub origin: String,
    pub output: OutputMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_dir: default_state_dir(),
            origin: DEFAULT_ORIGIN.to_string(),
            output: OutputMode::Auto,
        }
    }
}

impl Config {
    /// Loads the config file at `path`, or the defaults when `path` is `None`,
    /// then applies the environment override.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigRead`] or [`Error::ConfigParse`] when a given
    /// file cannot be read or is not valid.
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(config.with_env_override(std::env::var_os(STATE_DIR_ENV).map(PathBuf::from)))
    }

    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let raw = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    fn with_env_override(mut self, state_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = state_dir.filter(|d| !d.as_os_str().is_empty()) {
            tracing::debug!(dir = %dir.display(), "state dir from environment");
            self.state_dir = dir;
        }
        self
    }
}

fn default_state_dir() -> PathBuf {
    state_dir_from(ProjectDirs::from("", "", APP_NAME).as_ref())
}

/// Picks the platform state directory, then the local data directory, then
/// `./.lightswitch` when no home directory can be found.
fn state_dir_from(dirs: Option<&ProjectDirs>) -> PathBuf {
    match dirs {
        Some(dirs) => dirs
            .state_dir()
            .unwrap_or_else(|| dirs.data_local_dir())
            .to_path_buf(),
        None => PathBuf::from(".lightswitch"),
    }
}
