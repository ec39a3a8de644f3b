//! Shopping cart module.
//!
//! Contains the cart store, its lines and pricing.

mod cart;
mod pricing;

pub use cart::{AddedLine, CartLine, CartStore};
pub use pricing::{CartPricing, LinePricing};
