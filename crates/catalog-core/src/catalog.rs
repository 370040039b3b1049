//! # Catalog
//!
//! The in-memory product sequence and its id counter.
//!
//! ## Id Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add a, b, c            ids: a=1 b=2 c=3          last_id = 3           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  remove(2)              ids: a=1 c=2              last_id = 3 (kept)    │
//! │       │                 (every id := position)                          │
//! │       ▼                                                                 │
//! │  add d                  ids: a=1 c=2 d=4          last_id = 4           │
//! │                         (gap at 3 until the next remove)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Ids are positional after a remove, so an id held by a caller can point at
//! a different product once anything before it is removed. The counter is
//! never rewound, so a fresh id can land past the dense range.
//!
//! All lookups are linear scans over the sequence.

use crate::error::{CoreError, CoreResult};
use crate::types::{NewProduct, Product, ProductPatch};
use crate::validation::{ensure_code_available, validate_new_product, validate_patch};

/// Ordered product sequence plus the counter used to number new products.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    last_id: u64,
}

impl Catalog {
    /// Creates an empty catalog with the counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopts a previously persisted sequence.
    ///
    /// The counter resumes from the id of the last element, not the largest
    /// id in the sequence.
    pub fn from_products(products: Vec<Product>) -> Self {
        let last_id = products.last().map(|p| p.id).unwrap_or(0);
        Catalog { products, last_id }
    }

    /// Returns the products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Returns the id most recently handed out (or adopted on load).
    pub fn last_id(&self) -> u64 {
        self.last_id
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Finds a product by id.
    pub fn get(&self, id: u64) -> CoreResult<&Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or(CoreError::ProductNotFound(id))
    }

    /// Validates and appends a new product, returning it.
    ///
    /// ## Steps
    /// 1. All six fields present, else `Validation`
    /// 2. Code unused, else `DuplicateCode`
    /// 3. Counter incremented, product appended with the new id
    ///
    /// Steps 1 and 2 leave the catalog untouched on failure.
    pub fn add(&mut self, input: NewProduct) -> CoreResult<&Product> {
        validate_new_product(&input)?;
        ensure_code_available(&self.products, &input.code)?;

        self.last_id += 1;
        let index = self.products.len();
        self.products.push(input.into_product(self.last_id));
        Ok(&self.products[index])
    }

    /// Merges `patch` onto the product with `id`, returning the result.
    ///
    /// The merge is not re-validated: a patch can blank a field or reuse a
    /// code that `add` would have refused. Only a non-finite price is turned
    /// away, since it could not be saved.
    pub fn update(&mut self, id: u64, patch: ProductPatch) -> CoreResult<&Product> {
        let index = self.position(id)?;
        validate_patch(&patch)?;
        self.products[index].merge(patch);
        Ok(&self.products[index])
    }

    /// Removes the product with `id` and renumbers the rest by position.
    ///
    /// The returned product keeps the id it had when removed. The counter is
    /// left as is.
    pub fn remove(&mut self, id: u64) -> CoreResult<Product> {
        let index = self.position(id)?;
        let removed = self.products.remove(index);
        self.renumber();
        Ok(removed)
    }

    fn position(&self, id: u64) -> CoreResult<usize> {
        self.products
            .iter()
            .position(|p| p.id == id)
            .ok_or(CoreError::ProductNotFound(id))
    }

    fn renumber(&mut self) {
        for (index, product) in self.products.iter_mut().enumerate() {
            product.id = index as u64 + 1;
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn input(code: &str) -> NewProduct {
        NewProduct::new(
            format!("producto {}", code),
            "Este es un producto prueba",
            100.0,
            "img.jpg",
            code,
            20,
        )
    }

    fn ids(catalog: &Catalog) -> Vec<u64> {
        catalog.products().iter().map(|p| p.id).collect()
    }

    fn codes(catalog: &Catalog) -> Vec<&str> {
        catalog.products().iter().map(|p| p.code.as_str()).collect()
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let mut catalog = Catalog::new();
        for code in ["a", "b", "c"] {
            catalog.add(input(code)).unwrap();
        }
        assert_eq!(ids(&catalog), vec![1, 2, 3]);
        assert_eq!(catalog.last_id(), 3);
    }

    #[test]
    fn test_add_returns_created_product() {
        let mut catalog = Catalog::new();
        let created = catalog.add(input("abc123")).unwrap().clone();
        assert_eq!(created.id, 1);
        assert_eq!(created.code, "abc123");
        assert_eq!(catalog.get(1).unwrap(), &created);
    }

    #[test]
    fn test_add_rejects_missing_field_without_mutation() {
        let mut catalog = Catalog::new();
        catalog.add(input("a")).unwrap();

        let mut bad = input("b");
        bad.stock = 0;
        let err = catalog.add(bad).unwrap_err();

        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Required { ref field }) if field == "stock"
        ));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.last_id(), 1);
    }

    #[test]
    fn test_add_rejects_duplicate_code_without_mutation() {
        let mut catalog = Catalog::new();
        catalog.add(input("a")).unwrap();

        let err = catalog.add(input("a")).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateCode(ref code) if code == "a"));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.last_id(), 1);
    }

    #[test]
    fn test_get_missing() {
        let catalog = Catalog::new();
        assert!(matches!(catalog.get(1), Err(CoreError::ProductNotFound(1))));
    }

    #[test]
    fn test_update_merges() {
        let mut catalog = Catalog::new();
        catalog.add(input("a")).unwrap();

        let updated = catalog
            .update(1, ProductPatch::new().price(250.0))
            .unwrap()
            .clone();
        assert_eq!(updated.price, 250.0);
        assert_eq!(updated.title, "producto a");
        assert_eq!(catalog.get(1).unwrap(), &updated);
    }

    #[test]
    fn test_update_allows_duplicate_code() {
        let mut catalog = Catalog::new();
        catalog.add(input("a")).unwrap();
        catalog.add(input("b")).unwrap();

        catalog.update(2, ProductPatch::new().code("a")).unwrap();
        assert_eq!(codes(&catalog), vec!["a", "a"]);
    }

    #[test]
    fn test_update_rejects_non_finite_price_without_mutation() {
        let mut catalog = Catalog::new();
        catalog.add(input("a")).unwrap();
        let before = catalog.clone();

        for price in [f64::NAN, f64::INFINITY] {
            let err = catalog
                .update(1, ProductPatch::new().price(price).title("x"))
                .unwrap_err();
            assert!(matches!(
                err,
                CoreError::Validation(ValidationError::NotFinite { ref field }) if field == "price"
            ));
        }
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_add_rejects_infinite_price() {
        let mut catalog = Catalog::new();
        let mut bad = input("a");
        bad.price = f64::INFINITY;

        assert!(matches!(catalog.add(bad), Err(CoreError::Validation(_))));
        assert!(catalog.is_empty());
        assert_eq!(catalog.last_id(), 0);
    }

    #[test]
    fn test_update_missing() {
        let mut catalog = Catalog::new();
        catalog.add(input("a")).unwrap();
        let before = catalog.clone();

        let err = catalog.update(9, ProductPatch::new().title("x")).unwrap_err();
        assert!(matches!(err, CoreError::ProductNotFound(9)));
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_remove_renumbers() {
        let mut catalog = Catalog::new();
        for code in ["a", "b", "c", "d"] {
            catalog.add(input(code)).unwrap();
        }

        let removed = catalog.remove(2).unwrap();
        assert_eq!(removed.code, "b");
        assert_eq!(removed.id, 2);
        assert_eq!(ids(&catalog), vec![1, 2, 3]);
        assert_eq!(codes(&catalog), vec!["a", "c", "d"]);
    }

    #[test]
    fn test_remove_keeps_counter() {
        let mut catalog = Catalog::new();
        for code in ["a", "b", "c"] {
            catalog.add(input(code)).unwrap();
        }
        catalog.remove(2).unwrap();
        assert_eq!(catalog.last_id(), 3);

        let created = catalog.add(input("d")).unwrap();
        assert_eq!(created.id, 4);
        assert_eq!(ids(&catalog), vec![1, 2, 4]);
    }

    #[test]
    fn test_remove_missing() {
        let mut catalog = Catalog::new();
        catalog.add(input("a")).unwrap();
        let before = catalog.clone();

        assert!(matches!(catalog.remove(5), Err(CoreError::ProductNotFound(5))));
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_from_products_uses_last_element_id() {
        let mut products = vec![input("a").into_product(7), input("b").into_product(2)];
        let catalog = Catalog::from_products(products.clone());
        assert_eq!(catalog.last_id(), 2);

        products.clear();
        assert_eq!(Catalog::from_products(products).last_id(), 0);
    }

    #[test]
    fn test_lookup_returns_first_match_for_repeated_id() {
        // A hand-edited file can repeat an id; the first match wins.
        let catalog = Catalog::from_products(vec![
            input("a").into_product(1),
            input("b").into_product(1),
        ]);
        assert_eq!(catalog.get(1).unwrap().code, "a");
    }
}
