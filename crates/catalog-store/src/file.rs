//! # Catalog File
//!
//! Reading and writing the backing JSON array.
//!
//! The file is always rewritten whole with two-space indentation. The write
//! is not atomic: a crash mid-write can leave a truncated file, which the next
//! load treats as malformed.

use std::path::Path;

use catalog_core::Product;
use tokio::fs;

use crate::config::StoreConfig;
use crate::error::PersistenceError;

/// Reads and parses the product array at `path`.
pub async fn read_products(path: &Path) -> Result<Vec<Product>, PersistenceError> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|source| PersistenceError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    serde_json::from_str(&content).map_err(|source| PersistenceError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Overwrites the configured file with `products`.
pub async fn write_products(
    config: &StoreConfig,
    products: &[Product],
) -> Result<(), PersistenceError> {
    let content = serde_json::to_string_pretty(products).map_err(PersistenceError::Serialize)?;

    if config.create_missing_dirs {
        if let Some(parent) = config.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| PersistenceError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }
    }

    fs::write(&config.path, content)
        .await
        .map_err(|source| PersistenceError::Write {
            path: config.path.clone(),
            source,
        })
}
