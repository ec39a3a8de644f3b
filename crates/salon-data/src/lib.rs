//! Catalog sources for the salon storefront.
//!
//! This crate provides:
//! - `CatalogSource` - Anything the catalog CSV can be fetched from
//! - `HttpSource` - Published spreadsheet export over HTTP, with cache busting
//! - `FileSource` - Local CSV file
//! - `load_catalog` - Fetch and parse in one step

mod client;
mod loader;
mod source;

pub use client::*;
pub use loader::*;
pub use source::*;
