//! Cart and line item types.

use crate::cart::{CartPricing, LinePricing};
use crate::catalog::{CatalogStore, Product};
use crate::error::SelectionError;
use crate::ids::{CartLineId, ProductId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// One (product, size) entry in the cart.
///
/// Name, model, price and image are copied from the product when the line is
/// created; later catalog changes do not reach existing lines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLine {
    /// Composite key, `"<product id>-<size>"`.
    pub cart_id: CartLineId,
    pub product_id: ProductId,
    pub name: String,
    pub model: String,
    /// Unit price at the time the line was created.
    pub price: u64,
    pub size: String,
    pub image: String,
    /// Always at least 1.
    pub quantity: u32,
}

impl CartLine {
    fn from_product(product: &Product, size: &str) -> Self {
        Self {
            cart_id: CartLineId::for_selection(&product.id, size),
            product_id: product.id.clone(),
            name: product.name.clone(),
            model: product.model.clone(),
            price: product.price,
            size: size.to_string(),
            image: product.image.clone(),
            quantity: 1,
        }
    }

    /// `price × quantity`, or `None` on overflow.
    pub fn subtotal(&self) -> Option<u64> {
        self.price.checked_mul(u64::from(self.quantity))
    }
}

/// Result of a successful size selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedLine {
    pub cart_id: CartLineId,
    pub product_name: String,
    pub size: String,
    /// Quantity of the line after the addition.
    pub quantity: u32,
}

/// The shopping cart: an ordered list of lines, at most one per
/// (product, size) pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product_id` in `requested_size`.
    ///
    /// The requested size is trimmed and must match one of the product's
    /// sizes exactly. A repeated selection bumps the existing line's
    /// quantity. On error the cart is unchanged.
    pub fn select_size(
        &mut self,
        catalog: &CatalogStore,
        product_id: &ProductId,
        requested_size: Option<&str>,
    ) -> Result<AddedLine, SelectionError> {
        let product = catalog
            .get(product_id)
            .ok_or_else(|| SelectionError::ProductNotFound(product_id.to_string()))?;

        let size = requested_size
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| SelectionError::NoSize(product_id.to_string()))?;

        if !product.has_size(size) {
            return Err(SelectionError::SizeUnavailable {
                product_id: product_id.to_string(),
                size: size.to_string(),
            });
        }

        let unit_price = self
            .lines
            .iter()
            .find(|l| l.product_id == *product_id && l.size == size)
            .map_or(product.price, |l| l.price);
        self.total()
            .and_then(|total| total.checked_add(unit_price))
            .ok_or(SelectionError::Overflow)?;

        let cart_id = CartLineId::for_selection(product_id, size);
        let quantity = match self
            .lines
            .iter_mut()
            .find(|l| l.product_id == *product_id && l.size == size)
        {
            Some(line) => {
                let quantity = line.quantity.checked_add(1).ok_or(SelectionError::Overflow)?;
                line.price
                    .checked_mul(u64::from(quantity))
                    .ok_or(SelectionError::Overflow)?;
                line.quantity = quantity;
                quantity
            }
            None => {
                self.lines.push(CartLine::from_product(product, size));
                1
            }
        };

        tracing::debug!(cart_id = %cart_id, quantity, "cart line updated");

        Ok(AddedLine {
            cart_id,
            product_name: product.name.clone(),
            size: size.to_string(),
            quantity,
        })
    }

    /// Lines in the order they were first added.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// First line carrying `cart_id`. Distinct selections can share a key.
    pub fn get(&self, cart_id: &CartLineId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.cart_id == cart_id)
    }

    /// Sum of `price × quantity` over all lines, or `None` on overflow.
    pub fn total(&self) -> Option<u64> {
        self.lines
            .iter()
            .try_fold(0u64, |acc, line| acc.checked_add(line.subtotal()?))
    }

    /// Per-line and aggregate totals in a display currency.
    pub fn pricing(&self, currency: Currency) -> Option<CartPricing> {
        let lines = self
            .lines
            .iter()
            .map(|line| {
                let unit_price = Money::new(line.price, currency);
                Some(LinePricing {
                    cart_id: line.cart_id.clone(),
                    unit_price,
                    quantity: line.quantity,
                    subtotal: unit_price.try_multiply(line.quantity)?,
                })
            })
            .collect::<Option<Vec<_>>>()?;
        let grand_total = Money::try_sum(lines.iter().map(|l| &l.subtotal), currency)?;
        Some(CartPricing { lines, grand_total })
    }

    /// Total units across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Number of distinct lines.
    pub fn unique_item_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
