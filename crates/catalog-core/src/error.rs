//! # Error Types
//!
//! Domain-specific error types for catalog-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  catalog-core errors (this file)                                       │
//! │  ├── CoreError        - Not found, duplicate code                      │
//! │  └── ValidationError  - Missing field, or a price JSON cannot hold     │
//! │                                                                         │
//! │  catalog-store errors (separate crate)                                 │
//! │  └── StoreError       - CoreError or PersistenceError                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → caller               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, id, code)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Catalog logic errors.
///
/// Every variant is returned before the catalog is mutated.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No product carries the requested id.
    ///
    /// ## When This Occurs
    /// - Id was never assigned
    /// - Id went stale after a delete renumbered the catalog
    #[error("Product not found: {0}")]
    ProductNotFound(u64),

    /// Another product already uses this code.
    #[error("Product code '{0}' already exists")]
    DuplicateCode(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by [`crate::validation`] before a new product is assigned an id.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is absent or holds its zero value.
    #[error("{field} is required")]
    Required { field: String },

    /// A numeric field holds infinity or NaN, which JSON cannot store.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },
}

impl ValidationError {
    /// Creates a Required error for the given field.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }

    /// Creates a NotFinite error for the given field.
    pub fn not_finite(field: impl Into<String>) -> Self {
        ValidationError::NotFinite {
            field: field.into(),
        }
    }

    /// Returns the name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field } | ValidationError::NotFinite { field } => field,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
