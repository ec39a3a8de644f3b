//! In-memory catalog store.

use std::collections::HashMap;

use crate::catalog::Product;
use crate::ids::ProductId;

/// The session's product catalog.
///
/// Written once when the catalog loads; read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl CatalogStore {
    /// Build a store from products in catalog order.
    ///
    /// When two products share an id the first one is kept.
    pub fn new(products: Vec<Product>) -> Self {
        let mut kept = Vec::with_capacity(products.len());
        let mut index = HashMap::with_capacity(products.len());
        for product in products {
            if index.contains_key(&product.id) {
                continue;
            }
            index.insert(product.id.clone(), kept.len());
            kept.push(product);
        }
        Self {
            products: kept,
            index,
        }
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.index.get(id).and_then(|&i| self.products.get(i))
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
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
    use crate::catalog::product::fixtures::product;

    #[test]
    fn test_lookup() {
        let store = CatalogStore::new(vec![
            product("A1", 5000, &["X"], &["S"]),
            product("B2", 7000, &["X"], &["M"]),
        ]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(&ProductId::new("B2")).unwrap().price, 7000);
        assert!(store.get(&ProductId::new("C3")).is_none());
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let store = CatalogStore::new(vec![
            product("A1", 5000, &["X"], &["S"]),
            product("A1", 9000, &["X"], &["S"]),
        ]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&ProductId::new("A1")).unwrap().price, 5000);
    }

    #[test]
    fn test_empty_store() {
        let store = CatalogStore::default();
        assert!(store.is_empty());
        assert_eq!(store.iter().count(), 0);
    }
}
