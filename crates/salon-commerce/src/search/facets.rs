//! Facet option index.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// A filterable product attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facet {
    Designer,
    Silhouette,
    Color,
    Size,
}

impl Facet {
    /// All facets in control order.
    pub const ALL: [Facet; 4] = [Facet::Designer, Facet::Silhouette, Facet::Color, Facet::Size];

    pub fn as_str(&self) -> &'static str {
        match self {
            Facet::Designer => "designer",
            Facet::Silhouette => "silhouette",
            Facet::Color => "color",
            Facet::Size => "size",
        }
    }

    /// DOM id of the select control for this facet.
    pub fn control_id(&self) -> &'static str {
        match self {
            Facet::Designer => "filter-designer",
            Facet::Silhouette => "filter-silhouette",
            Facet::Color => "filter-color",
            Facet::Size => "filter-size",
        }
    }

    /// The product's values for this facet.
    pub fn values<'p>(&self, product: &'p Product) -> &'p [String] {
        match self {
            Facet::Designer => &product.designers,
            Facet::Silhouette => &product.silhouettes,
            Facet::Color => &product.colors,
            Facet::Size => &product.sizes,
        }
    }

    /// Sizes are sorted; the other facets keep first-seen order.
    fn sorted(&self) -> bool {
        matches!(self, Facet::Size)
    }
}

/// Distinct option values for each facet, derived from the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterIndex {
    pub designers: Vec<String>,
    pub silhouettes: Vec<String>,
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
}

impl FilterIndex {
    /// Build the option lists for every facet.
    pub fn build(products: &[Product]) -> Self {
        Self {
            designers: distinct(products, Facet::Designer),
            silhouettes: distinct(products, Facet::Silhouette),
            colors: distinct(products, Facet::Color),
            sizes: distinct(products, Facet::Size),
        }
    }

    /// Option values for one facet.
    pub fn options(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Designer => &self.designers,
            Facet::Silhouette => &self.silhouettes,
            Facet::Color => &self.colors,
            Facet::Size => &self.sizes,
        }
    }

    pub fn is_empty(&self) -> bool {
        Facet::ALL.iter().all(|f| self.options(*f).is_empty())
    }
}

fn distinct(products: &[Product], facet: Facet) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut values: Vec<String> = products
        .iter()
        .flat_map(|p| facet.values(p))
        .filter(|v| seen.insert(*v))
        .cloned()
        .collect();
    if facet.sorted() {
        values.sort();
    }
    values
}
