//! # Catalog Store
//!
//! The in-memory catalog mirrored to a single JSON file.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Mutating Operation                                   │
//! │                                                                         │
//! │  store.add(input).await                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Catalog::add ── Validation / DuplicateCode? ──► Err (nothing changed)  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  in-memory catalog updated                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  save(): rewrite products.json ── fails? ──► Err(Persistence)           │
//! │       │                                (memory keeps the change)        │
//! │       ▼                                                                 │
//! │  Ok(product)                                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Consistency
//! Memory is authoritative for the life of the store; the file is a
//! best-effort mirror. After a `Persistence` error the two differ until the
//! next successful save. There is no locking: two stores on one file are
//! last-write-wins.

use std::path::Path;

use catalog_core::{Catalog, NewProduct, Product, ProductPatch};
use tracing::{debug, info, warn};

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::file;

/// Product catalog backed by a JSON file.
///
/// ## Usage
/// ```rust,no_run
/// use catalog_core::{NewProduct, ProductPatch};
/// use catalog_store::{CatalogStore, StoreConfig};
///
/// # async fn run() -> catalog_store::StoreResult<()> {
/// let mut store = CatalogStore::open(StoreConfig::new("products.json")).await?;
///
/// let mug = store
///     .add(NewProduct::new("Mug", "Blue mug", 12.5, "mug.jpg", "MUG-1", 4))
///     .await?;
/// store.update(mug.id, ProductPatch::new().stock(10)).await?;
///
/// for product in store.list() {
///     println!("{} {}", product.id, product.title);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct CatalogStore {
    config: StoreConfig,
    catalog: Catalog,
}

impl CatalogStore {
    /// Opens the store, loading the backing file if it can.
    ///
    /// A missing, unreadable or malformed file is logged and leaves the
    /// store empty; only an invalid configuration is an error.
    pub async fn open(config: StoreConfig) -> StoreResult<Self> {
        config.validate()?;

        let mut store = CatalogStore {
            config,
            catalog: Catalog::new(),
        };

        match store.load().await {
            Ok(()) => {}
            Err(StoreError::Persistence(err)) if err.is_missing_file() => {
                info!(path = %store.path().display(), "No catalog file yet, starting empty");
            }
            Err(err) => {
                warn!(
                    path = %store.path().display(),
                    error = %err,
                    "Failed to load catalog, starting empty"
                );
            }
        }

        Ok(store)
    }

    /// Replaces the in-memory catalog with the file contents.
    ///
    /// On failure the current in-memory catalog is kept.
    pub async fn load(&mut self) -> StoreResult<()> {
        let products = file::read_products(&self.config.path).await?;
        self.catalog = Catalog::from_products(products);

        info!(
            path = %self.path().display(),
            count = self.catalog.len(),
            last_id = self.catalog.last_id(),
            "Catalog loaded"
        );
        Ok(())
    }

    /// Rewrites the backing file from the in-memory catalog.
    pub async fn save(&self) -> StoreResult<()> {
        if let Err(err) = file::write_products(&self.config, self.catalog.products()).await {
            warn!(error = %err, "Failed to save catalog");
            return Err(err.into());
        }

        info!(
            path = %self.path().display(),
            count = self.catalog.len(),
            "Catalog saved"
        );
        Ok(())
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Returns every product in catalog order.
    pub fn list(&self) -> &[Product] {
        self.catalog.products()
    }

    /// Gets a product by id.
    pub fn get_by_id(&self, id: u64) -> StoreResult<&Product> {
        self.catalog.get(id).map_err(|err| {
            warn!(id, "Product not found");
            err.into()
        })
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Creates a product and persists the catalog.
    ///
    /// ## Returns
    /// * `Ok(Product)` - created product with its new id
    /// * `Err(Validation)` / `Err(DuplicateCode)` - nothing changed
    /// * `Err(Persistence)` - product was added in memory but not saved
    pub async fn add(&mut self, input: NewProduct) -> StoreResult<Product> {
        debug!(code = %input.code, "Adding product");

        let created = match self.catalog.add(input) {
            Ok(product) => product.clone(),
            Err(err) => {
                warn!(error = %err, "Product rejected");
                return Err(err.into());
            }
        };

        self.save().await?;

        info!(id = created.id, code = %created.code, "Product added");
        Ok(created)
    }

    /// Merges `patch` onto a product and persists the catalog.
    ///
    /// The merged record is not re-validated; only a non-finite price in the
    /// patch is refused, with nothing changed.
    pub async fn update(&mut self, id: u64, patch: ProductPatch) -> StoreResult<Product> {
        debug!(id, "Updating product");

        let updated = match self.catalog.update(id, patch) {
            Ok(product) => product.clone(),
            Err(err) => {
                warn!(id, error = %err, "Product not updated");
                return Err(err.into());
            }
        };

        self.save().await?;

        info!(id, "Product updated");
        Ok(updated)
    }

    /// Removes a product, renumbers the remaining ids by position and
    /// persists the catalog.
    ///
    /// Returns the removed product. Any id a caller held for a product after
    /// it is stale once this succeeds.
    pub async fn delete_by_id(&mut self, id: u64) -> StoreResult<Product> {
        debug!(id, "Deleting product");

        let removed = match self.catalog.remove(id) {
            Ok(product) => product,
            Err(err) => {
                warn!(id, error = %err, "Product not deleted");
                return Err(err.into());
            }
        };

        self.save().await?;

        info!(id, code = %removed.code, remaining = self.catalog.len(), "Product deleted");
        Ok(removed)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        self.config.path()
    }

    /// Returns the configuration the store was opened with.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Returns the id counter used for the next add (minus one).
    pub fn last_id(&self) -> u64 {
        self.catalog.last_id()
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
