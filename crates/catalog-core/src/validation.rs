//! # Validation Module
//!
//! Presence checks for new products.
//!
//! ## The Presence Rule
//! A field is present only if it is non-empty (text) or non-zero (numbers).
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  value                 present?                                         │
//! │  ─────────────────     ────────                                         │
//! │  ""                    no                                               │
//! │  "  "                  yes  (whitespace is not trimmed)                 │
//! │  0 / 0.0 / NaN         no                                               │
//! │  -5                    yes  (sign is not checked)                       │
//! │  ±inf                  rejected as not finite                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A zero stock or zero price is therefore rejected even though either is a
//! meaningful quantity. Existing callers depend on that rejection, so it
//! stays until they are migrated.
//!
//! ## Usage
//! ```rust
//! use catalog_core::validation::validate_new_product;
//! use catalog_core::NewProduct;
//!
//! let input = NewProduct::new("Mug", "Blue mug", 12.5, "mug.jpg", "MUG-1", 4);
//! assert!(validate_new_product(&input).is_ok());
//!
//! let no_stock = NewProduct::new("Mug", "Blue mug", 12.5, "mug.jpg", "MUG-1", 0);
//! assert!(validate_new_product(&no_stock).is_err());
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{NewProduct, Product, ProductPatch};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Presence Checks
// =============================================================================

/// Rejects an empty string.
pub fn require_text(field: &str, value: &str) -> ValidationResult<()> {
    if value.is_empty() {
        return Err(ValidationError::required(field));
    }
    Ok(())
}

/// Rejects zero and NaN as missing, and infinities as not finite.
pub fn require_number(field: &str, value: f64) -> ValidationResult<()> {
    if value == 0.0 || value.is_nan() {
        return Err(ValidationError::required(field));
    }
    require_finite(field, value)
}

/// Rejects NaN and the infinities; the backing file has no encoding for them.
pub fn require_finite(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::not_finite(field));
    }
    Ok(())
}

/// Rejects zero.
pub fn require_count(field: &str, value: i64) -> ValidationResult<()> {
    if value == 0 {
        return Err(ValidationError::required(field));
    }
    Ok(())
}

// =============================================================================
// Product Validators
// =============================================================================

/// Validates that all six create inputs are present.
///
/// Fields are checked in input order and the first failure is returned:
/// title, description, price, thumbnail, code, stock.
pub fn validate_new_product(input: &NewProduct) -> ValidationResult<()> {
    require_text("title", &input.title)?;
    require_text("description", &input.description)?;
    require_number("price", input.price)?;
    require_text("thumbnail", &input.thumbnail)?;
    require_text("code", &input.code)?;
    require_count("stock", input.stock)?;
    Ok(())
}

/// Checks the one patch field that could not be written back to the file.
///
/// Presence and uniqueness are deliberately not checked on update.
pub fn validate_patch(patch: &ProductPatch) -> ValidationResult<()> {
    if let Some(price) = patch.price {
        require_finite("price", price)?;
    }
    Ok(())
}

/// Fails if any product in `products` already uses `code`.
///
/// Comparison is exact: case and surrounding whitespace matter.
pub fn ensure_code_available(products: &[Product], code: &str) -> CoreResult<()> {
    if products.iter().any(|p| p.code == code) {
        return Err(CoreError::DuplicateCode(code.to_string()));
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
