//! # Store Configuration
//!
//! Where the catalog file lives and how it is written.
//!
//! ## Path Resolution ([`StoreConfig::from_env`])
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. CATALOG_PATH environment variable (highest priority)               │
//! │  2. Platform data directory                                            │
//! │     ~/.local/share/catalog/products.json (Linux)                       │
//! │     ~/Library/Application Support/com.catalog.catalog/products.json    │
//! │  3. products.json in the working directory (lowest priority)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The path is fixed once the store is opened.

use std::path::{Path, PathBuf};

use catalog_core::DEFAULT_CATALOG_FILE;
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// Environment variable overriding the catalog file path.
pub const PATH_ENV: &str = "CATALOG_PATH";

/// Catalog store configuration.
///
/// ## Example
/// ```rust
/// use catalog_store::StoreConfig;
///
/// let config = StoreConfig::new("./data/products.json").create_missing_dirs(false);
/// assert!(!config.create_missing_dirs);
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the backing JSON file.
    pub path: PathBuf,

    /// Create the parent directory before writing.
    /// Default: true
    pub create_missing_dirs: bool,
}

impl StoreConfig {
    /// Creates a configuration for the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        StoreConfig {
            path: path.into(),
            create_missing_dirs: true,
        }
    }

    /// Sets whether the parent directory is created on save.
    pub fn create_missing_dirs(mut self, create: bool) -> Self {
        self.create_missing_dirs = create;
        self
    }

    /// Resolves the path from `CATALOG_PATH`, falling back to
    /// [`StoreConfig::default_path`].
    pub fn from_env() -> Self {
        match std::env::var(PATH_ENV) {
            Ok(path) if !path.is_empty() => {
                debug!(path = %path, "Catalog path from environment");
                Self::new(path)
            }
            _ => Self::new(Self::default_path()),
        }
    }

    /// Returns the platform data directory path, or `products.json` in the
    /// working directory when no home directory can be determined.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "catalog", "catalog")
            .map(|dirs| dirs.data_dir().join(DEFAULT_CATALOG_FILE))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_FILE))
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Validates the configuration.
    pub fn validate(&self) -> StoreResult<()> {
        if self.path.as_os_str().is_empty() {
            return Err(StoreError::InvalidConfig(
                "catalog path must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = StoreConfig::new("/tmp/products.json");
        assert_eq!(config.path(), Path::new("/tmp/products.json"));
        assert!(config.create_missing_dirs);

        let config = config.create_missing_dirs(false);
        assert!(!config.create_missing_dirs);
    }

    #[test]
    fn test_empty_path_is_invalid() {
        assert!(StoreConfig::new("").validate().is_err());
        assert!(StoreConfig::new("products.json").validate().is_ok());
    }

    #[test]
    fn test_default_path_names_catalog_file() {
        let path = StoreConfig::default_path();
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some(DEFAULT_CATALOG_FILE)
        );
    }

    #[test]
    fn test_env_override() {
        std::env::set_var(PATH_ENV, "/srv/catalog/items.json");
        let config = StoreConfig::from_env();
        std::env::remove_var(PATH_ENV);

        assert_eq!(config.path(), Path::new("/srv/catalog/items.json"));
    }
}
