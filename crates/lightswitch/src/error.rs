//! Crate error type.

use std::path::PathBuf;

use crate::store::StoreError;

/// Errors returned by `lightswitch` operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The preference store failed to read or write.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A template failed to compile or render.
    #[error("failed to render {what}")]
    Render {
        what: &'static str,
        #[source]
        source: minijinja::Error,
    },

    #[error("failed to read config file '{}'", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{}'", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_store_error_is_transparent() {
        let err = Error::from(StoreError::Unavailable);
        assert_eq!(err.to_string(), "preference storage is unavailable");
    }

    #[test]
    fn test_config_parse_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::ConfigParse {
            path: PathBuf::from("/etc/lightswitch.json"),
            source,
        };
        assert!(err.to_string().contains("/etc/lightswitch.json"));
        assert!(err.source().is_some());
    }
}
