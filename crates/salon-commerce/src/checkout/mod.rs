//! Checkout module.
//!
//! Contains the order form state machine and the order snapshot.

mod flow;
mod order;

pub use flow::{CheckoutFlow, FormState};
pub use order::{CustomerFields, Order};
