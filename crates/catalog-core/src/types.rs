//! # Domain Types
//!
//! The product record and the two input shapes that produce or change it.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   NewProduct    │   │    Product      │   │  ProductPatch   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  title          │──►│  id (position)  │◄──│  title?         │       │
//! │  │  description    │   │  title          │   │  description?   │       │
//! │  │  price          │   │  description    │   │  price?         │       │
//! │  │  thumbnail      │   │  price          │   │  thumbnail?     │       │
//! │  │  code           │   │  thumbnail      │   │  code?          │       │
//! │  │  stock          │   │  code (business)│   │  stock?         │       │
//! │  └─────────────────┘   │  stock          │   └─────────────────┘       │
//! │     add()              └─────────────────┘      update()               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity
//! - `id`: sequential integer, reassigned by position after every delete
//! - `code`: business identifier, unique, never rewritten by the catalog

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Product
// =============================================================================

/// A product record, exactly as it appears in the backing JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Sequential identifier (1-based position after the last delete).
    #[ts(type = "number")]
    pub id: u64,

    /// Display title.
    pub title: String,

    /// Free-form description.
    pub description: String,

    /// Unit price. Integral prices are written without a fraction.
    #[serde(with = "json_number")]
    #[ts(type = "number")]
    pub price: f64,

    /// Image reference (file name or URL).
    pub thumbnail: String,

    /// Business key, unique across the catalog.
    pub code: String,

    /// Units on hand.
    #[ts(type = "number")]
    pub stock: i64,
}

impl Product {
    /// Shallow-merges a patch onto this record.
    ///
    /// Fields set in the patch overwrite, all others are kept. The merged
    /// values are not validated.
    pub fn merge(&mut self, patch: ProductPatch) {
        let ProductPatch {
            title,
            description,
            price,
            thumbnail,
            code,
            stock,
        } = patch;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(price) = price {
            self.price = price;
        }
        if let Some(thumbnail) = thumbnail {
            self.thumbnail = thumbnail;
        }
        if let Some(code) = code {
            self.code = code;
        }
        if let Some(stock) = stock {
            self.stock = stock;
        }
    }
}

// =============================================================================
// New Product
// =============================================================================

/// The six inputs of a create.
///
/// Every field defaults to its zero value when absent from deserialized
/// input, so a missing field is caught by the same check as an empty one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub thumbnail: String,
    pub code: String,
    #[ts(type = "number")]
    pub stock: i64,
}

impl NewProduct {
    /// Creates the create-input in the positional order callers know:
    /// title, description, price, thumbnail, code, stock.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        thumbnail: impl Into<String>,
        code: impl Into<String>,
        stock: i64,
    ) -> Self {
        NewProduct {
            title: title.into(),
            description: description.into(),
            price,
            thumbnail: thumbnail.into(),
            code: code.into(),
            stock,
        }
    }

    /// Turns the input into a record carrying `id`.
    pub fn into_product(self, id: u64) -> Product {
        Product {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            thumbnail: self.thumbnail,
            code: self.code,
            stock: self.stock,
        }
    }
}

// =============================================================================
// Product Patch
// =============================================================================

/// A partial field set for update. `None` keeps the current value.
///
/// The id is deliberately absent: ids are owned by the catalog.
///
/// ## Example
/// ```rust
/// use catalog_core::ProductPatch;
///
/// let patch = ProductPatch::new().price(250.0).stock(12);
/// assert!(!patch.is_empty());
/// assert!(patch.title.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(type = "number | null")]
    pub stock: Option<i64>,
}

impl ProductPatch {
    /// An empty patch; merging it changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn stock(mut self, stock: i64) -> Self {
        self.stock = Some(stock);
        self
    }

    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.thumbnail.is_none()
            && self.code.is_none()
            && self.stock.is_none()
    }
}

// =============================================================================
// Price Encoding
// =============================================================================

/// Writes integral prices as JSON integers (`100`, not `100.0`).
///
/// Non-finite values are an error rather than `null`, which would not read
/// back as a price.
mod json_number {
    use serde::ser::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Largest integer an f64 represents exactly (2^53).
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if !value.is_finite() {
            return Err(S::Error::custom(format!("non-finite price: {}", value)));
        }
        if value.fract() == 0.0 && value.abs() <= MAX_EXACT {
            serializer.serialize_i64(*value as i64)
        } else {
            serializer.serialize_f64(*value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        f64::deserialize(deserializer)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        NewProduct::new(
            "producto prueba",
            "Este es un producto prueba",
            100.0,
            "img1.jpg",
            "abc123",
            20,
        )
        .into_product(1)
    }

    #[test]
    fn test_product_json_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "title": "producto prueba",
                "description": "Este es un producto prueba",
                "price": 100,
                "thumbnail": "img1.jpg",
                "code": "abc123",
                "stock": 20
            })
        );
    }

    #[test]
    fn test_fractional_price_kept() {
        let mut product = sample();
        product.price = 10.99;
        let text = serde_json::to_string(&product).unwrap();
        assert!(text.contains("\"price\":10.99"));
    }

    #[test]
    fn test_non_finite_price_does_not_serialize() {
        for price in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut product = sample();
            product.price = price;
            let err = serde_json::to_string(&product).unwrap_err();
            assert!(err.to_string().contains("non-finite price"));
        }
    }

    #[test]
    fn test_integer_price_reads_as_float() {
        let product: Product = serde_json::from_str(
            r#"{"id":3,"title":"t","description":"d","price":300,"thumbnail":"x","code":"c","stock":1}"#,
        )
        .unwrap();
        assert_eq!(product.price, 300.0);
        assert_eq!(product.id, 3);
    }

    #[test]
    fn test_new_product_missing_fields_default_to_zero() {
        let input: NewProduct = serde_json::from_str(r#"{"title":"only a title"}"#).unwrap();
        assert_eq!(input.title, "only a title");
        assert!(input.description.is_empty());
        assert_eq!(input.price, 0.0);
        assert_eq!(input.stock, 0);
    }

    #[test]
    fn test_merge_overwrites_only_given_fields() {
        let mut product = sample();
        product.merge(ProductPatch::new().price(250.0).title("renamed"));

        assert_eq!(product.price, 250.0);
        assert_eq!(product.title, "renamed");
        assert_eq!(product.description, "Este es un producto prueba");
        assert_eq!(product.code, "abc123");
        assert_eq!(product.stock, 20);
        assert_eq!(product.id, 1);
    }

    #[test]
    fn test_merge_does_not_validate() {
        let mut product = sample();
        product.merge(ProductPatch::new().title("").stock(0));
        assert_eq!(product.title, "");
        assert_eq!(product.stock, 0);
    }

    #[test]
    fn test_empty_patch() {
        let mut product = sample();
        let before = product.clone();
        assert!(ProductPatch::new().is_empty());
        product.merge(ProductPatch::new());
        assert_eq!(product, before);
    }

    #[test]
    fn test_patch_deserializes_partial_object() {
        let patch: ProductPatch = serde_json::from_str(r#"{"price":250}"#).unwrap();
        assert_eq!(patch, ProductPatch::new().price(250.0));
    }
}
