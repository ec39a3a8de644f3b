//! Storefront domain types and logic for a dress salon.
//!
//! This crate covers everything between the catalog CSV and the submitted order:
//!
//! - **Catalog**: CSV parsing into products, the in-memory catalog store
//! - **Search**: Facet option index and the filter engine
//! - **Cart**: Size selection, cart lines, totals
//! - **Checkout**: Order form state and order snapshots
//! - **Render**: HTML fragments for filters, product grid, cart and form
//!
//! # Example
//!
//! ```rust,ignore
//! use salon_commerce::prelude::*;
//!
//! let parsed = parse_catalog(&csv_text)?;
//! let mut shop = Storefront::with_catalog(parsed, Currency::RUB);
//!
//! // Narrow the grid
//! let selection = FilterSelection::any().with_facet(Facet::Size, "M");
//! let visible = shop.apply_filters(&selection);
//!
//! // Add a dress and check out
//! shop.select_size(&visible[0].id, Some("M"))?;
//! shop.show_form()?;
//! let order = shop.submit_order(CustomerFields::from_pairs([("name", "Anna")]))?;
//! println!("Total: {}", order.total.display());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod cart;
pub mod checkout;
pub mod render;
pub mod search;
pub mod storefront;

pub use error::{CheckoutError, CommerceError, LoadError, SelectionError};
pub use ids::*;
pub use money::{Currency, Money};
pub use storefront::{CatalogStatus, Notice, Storefront};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CheckoutError, CommerceError, LoadError, SelectionError};
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{parse_catalog, CatalogStore, LoadReport, ParsedCatalog, Product};

    // Cart
    pub use crate::cart::{AddedLine, CartLine, CartPricing, CartStore};

    // Checkout
    pub use crate::checkout::{CheckoutFlow, CustomerFields, FormState, Order};

    // Search
    pub use crate::search::{Facet, FilterIndex, FilterSelection, PriceRange};

    // Render
    pub use crate::render::Messages;

    pub use crate::storefront::{CatalogStatus, Notice, Storefront};
}
