//! Filter selection and matching.

use serde::{Deserialize, Serialize};

use crate::catalog::{parse_int_prefix, Product};
use crate::search::Facet;

/// Inclusive price bounds. A missing bound does not constrain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Option<u64>,
    pub max: Option<u64>,
}

impl PriceRange {
    pub fn new(min: Option<u64>, max: Option<u64>) -> Self {
        Self { min, max }
    }

    /// Read bounds from the raw text of the price inputs.
    ///
    /// Blank, malformed or negative text leaves the bound open. A zero
    /// maximum is also treated as open, matching how the price inputs have
    /// always behaved.
    pub fn from_inputs(min: &str, max: &str) -> Self {
        Self {
            min: parse_int_prefix(min).filter(|&v| v > 0),
            max: parse_int_prefix(max).filter(|&v| v > 0),
        }
    }

    pub fn contains(&self, price: u64) -> bool {
        price >= self.min.unwrap_or(0) && self.max.map_or(true, |max| price <= max)
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.unwrap_or(0) == 0 && self.max.is_none()
    }
}

/// The current state of the filter controls.
///
/// Rebuilt from the controls every time filters are applied. A `None` facet
/// is the "any" option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub designer: Option<String>,
    pub silhouette: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    #[serde(default)]
    pub price: PriceRange,
}

impl FilterSelection {
    /// A selection that matches every product.
    pub fn any() -> Self {
        Self::default()
    }

    /// Set one facet from a control value. An empty value selects "any".
    pub fn with_facet(mut self, facet: Facet, value: impl Into<String>) -> Self {
        let value = value.into();
        let slot = match facet {
            Facet::Designer => &mut self.designer,
            Facet::Silhouette => &mut self.silhouette,
            Facet::Color => &mut self.color,
            Facet::Size => &mut self.size,
        };
        *slot = if value.is_empty() { None } else { Some(value) };
        self
    }

    pub fn with_price(mut self, price: PriceRange) -> Self {
        self.price = price;
        self
    }

    /// The selected value for a facet, if any.
    pub fn facet(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::Designer => self.designer.as_deref(),
            Facet::Silhouette => self.silhouette.as_deref(),
            Facet::Color => self.color.as_deref(),
            Facet::Size => self.size.as_deref(),
        }
        .filter(|v| !v.is_empty())
    }

    /// Check whether the selection leaves every product in.
    pub fn is_empty(&self) -> bool {
        Facet::ALL.iter().all(|f| self.facet(*f).is_none()) && self.price.is_unbounded()
    }

    /// Check one product against every constraint.
    pub fn matches(&self, product: &Product) -> bool {
        Facet::ALL.iter().all(|&facet| match self.facet(facet) {
            Some(wanted) => facet.values(product).iter().any(|v| v == wanted),
            None => true,
        }) && self.price.contains(product.price)
    }

    /// Products that pass the selection, in catalog order.
    pub fn apply<'p>(&self, products: &'p [Product]) -> Vec<&'p Product> {
        let matched: Vec<&Product> = products.iter().filter(|p| self.matches(p)).collect();
        tracing::debug!(
            selection = ?self,
            matched = matched.len(),
            total = products.len(),
            "applied filters"
        );
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::product::fixtures::product;

    fn catalog() -> Vec<Product> {
        let mut gown = product("A1", 5000, &["Pronovias"], &["S", "M", "L"]);
        gown.colors = vec!["Ivory".to_string(), "Blush".to_string()];
        let mut sheath = product("B2", 72000, &["Berta", "Pronovias"], &["40", "42"]);
        sheath.silhouettes = vec!["Sheath".to_string()];
        let mermaid = product("C3", 15000, &["Berta"], &["M"]);
        vec![gown, sheath, mermaid]
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_empty_selection_returns_full_catalog_in_order() {
        let products = catalog();
        let result = FilterSelection::any().apply(&products);
        assert_eq!(ids(&result), vec!["A1", "B2", "C3"]);
    }

    #[test]
    fn test_facets_are_conjunctive() {
        let products = catalog();
        let selection = FilterSelection::any()
            .with_facet(Facet::Designer, "Berta")
            .with_facet(Facet::Size, "M");
        assert_eq!(ids(&selection.apply(&products)), vec!["C3"]);
    }

    #[test]
    fn test_multi_value_membership() {
        let products = catalog();
        let by_designer = FilterSelection::any().with_facet(Facet::Designer, "Pronovias");
        assert_eq!(ids(&by_designer.apply(&products)), vec!["A1", "B2"]);

        let by_color = FilterSelection::any().with_facet(Facet::Color, "Blush");
        assert_eq!(ids(&by_color.apply(&products)), vec!["A1"]);

        let by_silhouette = FilterSelection::any().with_facet(Facet::Silhouette, "Sheath");
        assert_eq!(ids(&by_silhouette.apply(&products)), vec!["B2"]);
    }

    #[test]
    fn test_exact_value_match() {
        let products = catalog();
        let selection = FilterSelection::any().with_facet(Facet::Designer, "berta");
        assert!(selection.apply(&products).is_empty());
    }

    #[test]
    fn test_empty_facet_value_is_any() {
        let selection = FilterSelection::any().with_facet(Facet::Color, "");
        assert!(selection.color.is_none());
        assert!(selection.is_empty());
    }

    #[test]
    fn test_price_range_inclusive() {
        let products = catalog();
        let selection = FilterSelection::any().with_price(PriceRange::new(Some(5000), Some(15000)));
        assert_eq!(ids(&selection.apply(&products)), vec!["A1", "C3"]);

        let min_only = FilterSelection::any().with_price(PriceRange::new(Some(15001), None));
        assert_eq!(ids(&min_only.apply(&products)), vec!["B2"]);
    }

    #[test]
    fn test_price_inputs() {
        assert_eq!(PriceRange::from_inputs("", ""), PriceRange::default());
        assert_eq!(PriceRange::from_inputs("abc", "-3"), PriceRange::default());
        assert_eq!(PriceRange::from_inputs("0", "0"), PriceRange::default());
        assert_eq!(
            PriceRange::from_inputs(" 1000", "20000"),
            PriceRange::new(Some(1000), Some(20000))
        );
        assert!(PriceRange::from_inputs("", "0").contains(u64::MAX));
    }

    #[test]
    fn test_no_match_is_empty() {
        let products = catalog();
        let selection = FilterSelection::any().with_facet(Facet::Size, "XXL");
        assert!(selection.apply(&products).is_empty());
    }
}
