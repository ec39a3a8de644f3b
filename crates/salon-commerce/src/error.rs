//! Commerce error types.

use thiserror::Error;

/// Errors raised while turning a CSV export into a catalog.
///
/// A load error leaves the catalog empty; the storefront shows a persistent
/// fallback message instead of the product grid and never retries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The resource could not be fetched.
    #[error("Failed to fetch catalog: {0}")]
    Fetch(String),

    /// The CSV could not be read.
    #[error("Failed to parse catalog: {0}")]
    Parse(String),

    /// A required column is absent from the header row.
    #[error("Catalog header is missing required column: {0}")]
    MissingColumn(&'static str),
}

impl From<csv::Error> for LoadError {
    fn from(e: csv::Error) -> Self {
        LoadError::Parse(e.to_string())
    }
}

/// Errors raised when a size is selected for the cart.
///
/// The cart is left untouched whenever one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// No product with this id is in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// The shopper did not supply a size.
    #[error("No size selected for product {0}")]
    NoSize(String),

    /// The size is not one the product is offered in.
    #[error("Size {size:?} is not available for product {product_id}")]
    SizeUnavailable { product_id: String, size: String },

    /// Quantity or subtotal arithmetic overflowed.
    #[error("Arithmetic overflow in cart calculation")]
    Overflow,
}

/// Errors raised by the checkout form guards.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// The order form cannot be opened for an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// The order form was submitted while it was not shown.
    #[error("Order form is not open")]
    FormHidden,

    /// The order total overflowed.
    #[error("Arithmetic overflow in order total")]
    Overflow,
}

/// Errors that can occur in storefront operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}
