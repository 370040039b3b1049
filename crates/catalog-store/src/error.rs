//! # Store Error Types
//!
//! Error types for catalog store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  CoreError (catalog-core)          PersistenceError (this module)      │
//! │  ├── ProductNotFound               ├── Read / Parse     (load)         │
//! │  ├── DuplicateCode                 └── Serialize / CreateDir / Write   │
//! │  └── Validation                                         (save)         │
//! │       │                                   │                             │
//! │       └──────────────┬────────────────────┘                             │
//! │                      ▼                                                  │
//! │                 StoreError ──► caller                                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A `Persistence` error returned from a mutating operation means the
//! in-memory change was applied but the file was not rewritten.

use std::io;
use std::path::PathBuf;

use catalog_core::CoreError;
use thiserror::Error;

/// Backing file failures.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The file could not be read (missing, permissions, is a directory).
    #[error("Failed to read catalog file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file was read but is not a JSON array of products.
    #[error("Malformed catalog file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The catalog could not be encoded as JSON.
    #[error("Failed to serialize catalog: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The parent directory could not be created.
    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file could not be written.
    #[error("Failed to write catalog file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PersistenceError {
    /// Returns true if the backing file simply does not exist yet.
    pub fn is_missing_file(&self) -> bool {
        matches!(
            self,
            PersistenceError::Read { source, .. } if source.kind() == io::ErrorKind::NotFound
        )
    }
}

/// Catalog store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Rejected by the catalog rules; nothing changed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Reading or writing the backing file failed.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// The store configuration is unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::Core(CoreError::ProductNotFound(_)))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::Core(CoreError::Validation(_)))
    }

    pub fn is_duplicate_code(&self) -> bool {
        matches!(self, StoreError::Core(CoreError::DuplicateCode(_)))
    }

    pub fn is_persistence(&self) -> bool {
        matches!(self, StoreError::Persistence(_))
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
