//! # catalog-core: Pure Catalog Logic
//!
//! Types, validation and id bookkeeping for the product catalog, with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Catalog Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Callers (CLI, HTTP handler, seed binary)           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                catalog-store (CatalogStore)                     │   │
//! │  │         load once ─► mutate ─► rewrite products.json            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ catalog-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  catalog  │  │ validation│  │   error   │  │   │
//! │  │   │  Product  │  │  Catalog  │  │ presence  │  │ CoreError │  │   │
//! │  │   │  Patch    │  │ ids, merge│  │ code dup  │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │            NO I/O • NO FILES • NO LOGGING • PURE                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, NewProduct, ProductPatch
//! - [`catalog`] - In-memory sequence, id counter, renumbering
//! - [`validation`] - Presence and code-uniqueness checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use catalog_core::{Catalog, NewProduct};
//!
//! let mut catalog = Catalog::new();
//! catalog.add(NewProduct::new("Mug", "Blue mug", 12.5, "mug.jpg", "a", 4)).unwrap();
//! catalog.add(NewProduct::new("Cup", "Red cup", 8.0, "cup.jpg", "b", 9)).unwrap();
//!
//! catalog.remove(1).unwrap();
//! assert_eq!(catalog.get(1).unwrap().code, "b");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// File name of the catalog when no path is configured.
pub const DEFAULT_CATALOG_FILE: &str = "products.json";
