//! # catalog-store: JSON File Store for the Catalog
//!
//! Keeps a [`catalog_core::Catalog`] in memory and mirrors it to one JSON
//! file: loaded once when the store opens, rewritten whole after every
//! mutation.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Catalog Data Flow                                │
//! │                                                                         │
//! │  Caller (CLI, HTTP handler, seed binary)                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  catalog-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  StoreConfig  │    │ CatalogStore  │    │    file      │  │   │
//! │  │   │  (config.rs)  │───►│  (store.rs)   │───►│  (file.rs)   │  │   │
//! │  │   │ path, env     │    │ list/get/add  │    │ read / write │  │   │
//! │  │   │               │    │ update/delete │    │ tokio::fs    │  │   │
//! │  │   └───────────────┘    └───────┬───────┘    └──────────────┘  │   │
//! │  │                                │                               │   │
//! │  └────────────────────────────────┼───────────────────────────────┘   │
//! │                                   ▼                                    │
//! │                  catalog-core (Catalog, validation)                    │
//! │                                                                         │
//! │  Disk: products.json (JSON array, 2-space indent)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`config`] - Backing file path and write options
//! - [`store`] - The catalog store and its operations
//! - [`file`] - Backing file read/write
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use catalog_core::NewProduct;
//! use catalog_store::{CatalogStore, StoreConfig};
//!
//! # async fn run() -> catalog_store::StoreResult<()> {
//! let mut store = CatalogStore::open(StoreConfig::from_env()).await?;
//! store
//!     .add(NewProduct::new("Mug", "Blue mug", 12.5, "mug.jpg", "MUG-1", 4))
//!     .await?;
//! let first = store.get_by_id(1)?;
//! println!("{} costs {}", first.title, first.price);
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod file;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::StoreConfig;
pub use error::{PersistenceError, StoreError, StoreResult};
pub use store::CatalogStore;
