//! Search module.
//!
//! Contains the facet option index and the filter engine.

mod facets;
mod filter;

pub use facets::{Facet, FilterIndex};
pub use filter::{FilterSelection, PriceRange};
