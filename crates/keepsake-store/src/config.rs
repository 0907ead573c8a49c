//! Store configuration.
//!
//! Configuration files are written in RON:
//!
//! ```ron
//! (
//!     path: Some("data/address_book.db"),
//!     cache_size: Some(4194304),
//!     create_dirs: true,
//! )
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Where and how a store is opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Database file. `None` keeps the store in memory.
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Engine page cache size in bytes. `None` uses the engine default.
    #[serde(default)]
    pub cache_size: Option<usize>,

    /// Create missing parent directories of `path` before opening.
    #[serde(default = "default_create_dirs")]
    pub create_dirs: bool,
}

fn default_create_dirs() -> bool {
    true
}

impl StoreConfig {
    /// In-memory store with engine defaults.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// File-backed store at `path`.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    /// Set the engine cache size in bytes.
    pub fn with_cache_size(mut self, bytes: usize) -> Self {
        self.cache_size = Some(bytes);
        self
    }

    /// Whether this configuration describes an in-memory store.
    pub fn is_in_memory(&self) -> bool {
        self.path.is_none()
    }

    /// Parse a configuration from a RON string.
    pub fn from_ron_str(content: &str) -> Result<Self> {
        ron::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load a configuration from a RON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_ron_str(&content)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: None,
            cache_size: None,
            create_dirs: default_create_dirs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full() {
        let content = r#"
        (
            path: Some("data/store.db"),
            cache_size: Some(1024),
            create_dirs: false,
        )
        "#;

        let config = StoreConfig::from_ron_str(content).unwrap();
        assert_eq!(config.path, Some(PathBuf::from("data/store.db")));
        assert_eq!(config.cache_size, Some(1024));
        assert!(!config.create_dirs);
        assert!(!config.is_in_memory());
    }

    #[test]
    fn test_parse_defaults() {
        let config = StoreConfig::from_ron_str("()").unwrap();
        assert_eq!(config, StoreConfig::in_memory());
        assert!(config.create_dirs);
        assert!(config.is_in_memory());
    }

    #[test]
    fn test_parse_invalid() {
        let err = StoreConfig::from_ron_str("(path: 42").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("store.ron");
        fs::write(&file, r#"(path: Some("x.db"))"#).unwrap();

        let config = StoreConfig::from_file(&file).unwrap();
        assert_eq!(config, StoreConfig::at("x.db"));
    }

    #[test]
    fn test_from_missing_file() {
        let err = StoreConfig::from_file("/nonexistent/keepsake.ron").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_builder() {
        let config = StoreConfig::at("a.db").with_cache_size(2048);
        assert_eq!(config.cache_size, Some(2048));
        assert_eq!(config.path.as_deref(), Some(Path::new("a.db")));
    }
}
