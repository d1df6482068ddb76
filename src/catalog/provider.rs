//! Catalog Provider
//!
//! Holds the immutable, ordered product list supplied at startup and offers
//! lookup by id. Products are handed out as shared `Arc`s so cart lines can
//! reference them without copying.

use super::models::{Product, ProductId};
use rust_decimal::Decimal;
use std::{collections::HashSet, path::Path, sync::Arc};

/// Highest accepted unit price. Keeps `price × u32::MAX` summed over a cart
/// far below `Decimal::MAX`.
pub const MAX_UNIT_PRICE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Reasons a product list cannot become a catalog
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("product id {0} appears more than once")]
    DuplicateId(ProductId),
    #[error("product {id} has a negative price ({price})")]
    NegativePrice { id: ProductId, price: Decimal },
    #[error("product {id} price {price} exceeds {}", MAX_UNIT_PRICE)]
    PriceTooLarge { id: ProductId, price: Decimal },
    #[error("catalog file could not be read: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalog data is not valid JSON: {0}")]
    Format(#[from] serde_json::Error),
}

/// Fixed, read-only product catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Arc<Product>>,
}

impl Catalog {
    /// Builds a catalog, keeping the given order.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());

        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
            if product.price < Decimal::ZERO {
                return Err(CatalogError::NegativePrice {
                    id: product.id,
                    price: product.price,
                });
            }
            if product.price > MAX_UNIT_PRICE {
                return Err(CatalogError::PriceTooLarge {
                    id: product.id,
                    price: product.price,
                });
            }
        }

        Ok(Self {
            products: products.into_iter().map(Arc::new).collect(),
        })
    }

    /// Parses a JSON array of products.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// Reads a JSON catalog file.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// All products in catalog order
    pub fn list_products(&self) -> &[Arc<Product>] {
        &self.products
    }

    pub fn find_product(&self, id: ProductId) -> Option<Arc<Product>> {
        self.products.iter().find(|p| p.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, price: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            description: String::new(),
            price: Decimal::from(price),
            image: format!("https://example.test/{id}.png"),
        }
    }

    #[test]
    fn keeps_insertion_order() {
        let catalog = Catalog::new(vec![product(3, 1), product(1, 2), product(2, 3)]).unwrap();
        let ids: Vec<u32> = catalog.list_products().iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn listing_is_stable_across_calls() {
        let catalog = Catalog::new(vec![product(1, 10), product(2, 15)]).unwrap();
        assert_eq!(catalog.list_products(), catalog.list_products());
    }

    #[test]
    fn find_returns_shared_product() {
        let catalog = Catalog::new(vec![product(1, 10)]).unwrap();
        let found = catalog.find_product(ProductId::new(1)).unwrap();
        assert!(Arc::ptr_eq(&found, &catalog.list_products()[0]));
        assert!(catalog.find_product(ProductId::new(9)).is_none());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::new(vec![product(1, 10), product(1, 12)]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == ProductId::new(1)));
    }

    #[test]
    fn rejects_negative_prices() {
        let err = Catalog::new(vec![product(4, -1)]).unwrap_err();
        assert!(matches!(err, CatalogError::NegativePrice { .. }));
    }

    #[test]
    fn rejects_prices_above_the_unit_ceiling() {
        let json = r#"[{"id": 1, "name": "Gold", "description": "", "price": "79228162514264337593543950335", "image": ""}]"#;
        let err = Catalog::from_json_str(json).unwrap_err();
        assert!(matches!(err, CatalogError::PriceTooLarge { id, .. } if id == ProductId::new(1)));

        let mut at_limit = product(2, 0);
        at_limit.price = MAX_UNIT_PRICE;
        assert!(Catalog::new(vec![at_limit]).is_ok());
    }

    #[test]
    fn allows_free_products() {
        assert!(Catalog::new(vec![product(1, 0)]).is_ok());
    }

    #[test]
    fn loads_json_with_numeric_and_string_prices() {
        let json = r#"[
            {"id": 5, "name": "Shaker", "description": "600ml", "price": 12, "image": "https://example.test/s.png"},
            {"id": 6, "name": "Towel", "description": "Gym towel", "price": "7.50", "image": "https://example.test/t.png"}
        ]"#;

        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        let towel = catalog.find_product(ProductId::new(6)).unwrap();
        assert_eq!(towel.price, Decimal::new(750, 2));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = Catalog::from_json_str(r#"[{"id": "one"}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::Format(_)));
    }
}
