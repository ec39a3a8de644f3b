//! Product catalog module.
//!
//! Contains the product type, CSV parsing and the in-memory catalog store.

mod loader;
pub(crate) mod product;
mod store;

pub use loader::{
    parse_catalog, parse_int_prefix, split_multi, LoadReport, ParsedCatalog, SkipReason,
    SkippedRow, REQUIRED_COLUMNS,
};
pub use product::Product;
pub use store::CatalogStore;
