//! Cart pricing calculations.

use crate::ids::CartLineId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Totals for the whole cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartPricing {
    /// Per-line breakdown, in cart order.
    pub lines: Vec<LinePricing>,
    /// Sum of all line subtotals.
    pub grand_total: Money,
}

impl CartPricing {
    /// Find the breakdown for one line.
    pub fn line(&self, cart_id: &CartLineId) -> Option<&LinePricing> {
        self.lines.iter().find(|l| &l.cart_id == cart_id)
    }
}

/// Pricing breakdown for a single cart line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinePricing {
    pub cart_id: CartLineId,
    pub unit_price: Money,
    pub quantity: u32,
    /// `unit_price × quantity`.
    pub subtotal: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_line_lookup() {
        let pricing = CartPricing {
            lines: vec![LinePricing {
                cart_id: CartLineId::new("A1-M"),
                unit_price: Money::new(5000, Currency::RUB),
                quantity: 2,
                subtotal: Money::new(10000, Currency::RUB),
            }],
            grand_total: Money::new(10000, Currency::RUB),
        };

        assert_eq!(pricing.line(&CartLineId::new("A1-M")).unwrap().quantity, 2);
        assert!(pricing.line(&CartLineId::new("A1-S")).is_none());
    }
}
