//! Product type.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are built once when the catalog loads and never mutated
/// afterwards. Every list-valued field holds at least one entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Model name shown next to the product name.
    pub model: String,
    /// Price in whole currency units.
    pub price: u64,
    /// Designers, in spreadsheet order.
    pub designers: Vec<String>,
    /// Silhouette tags.
    pub silhouettes: Vec<String>,
    /// Available colors.
    pub colors: Vec<String>,
    /// Available sizes. These are labels ("S", "42"), not numbers.
    pub sizes: Vec<String>,
    /// Category label.
    pub category: String,
    /// Image URL.
    pub image: String,
    /// Free-text description.
    pub description: String,
}

impl Product {
    /// Check whether the product is offered in `size`.
    ///
    /// Exact, case-sensitive match.
    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    pub fn has_designer(&self, designer: &str) -> bool {
        self.designers.iter().any(|d| d == designer)
    }

    pub fn has_silhouette(&self, silhouette: &str) -> bool {
        self.silhouettes.iter().any(|s| s == silhouette)
    }

    pub fn has_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Build a product with the given facets for tests.
    pub fn product(id: &str, price: u64, designers: &[&str], sizes: &[&str]) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Dress {}", id),
            model: format!("Model {}", id),
            price,
            designers: designers.iter().map(|s| s.to_string()).collect(),
            silhouettes: vec!["A-line".to_string()],
            colors: vec!["Ivory".to_string()],
            sizes: sizes.iter().map(|s| s.to_string()).collect(),
            category: "Wedding".to_string(),
            image: format!("https://img.example/{}.jpg", id),
            description: String::new(),
        }
    }
}
