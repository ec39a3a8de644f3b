//! Order form state machine.

use crate::cart::CartStore;
use crate::checkout::{CustomerFields, Order};
use crate::error::CheckoutError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Visibility of the order form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FormState {
    #[default]
    Hidden,
    Visible,
}

impl FormState {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormState::Hidden => "hidden",
            FormState::Visible => "visible",
        }
    }
}

/// Checkout flow: `Hidden → Visible → Hidden`.
///
/// The form opens only for a non-empty cart and closes on hide or on a
/// successful submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutFlow {
    state: FormState,
}

impl CheckoutFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == FormState::Visible
    }

    /// Reveal the order form. Fails for an empty cart and changes nothing.
    pub fn show_form(&mut self, cart: &CartStore) -> Result<(), CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        self.state = FormState::Visible;
        Ok(())
    }

    /// Hide the order form. Always succeeds.
    pub fn hide_form(&mut self) {
        self.state = FormState::Hidden;
    }

    /// Submit the order form.
    ///
    /// Builds the order from the customer fields and a snapshot of the cart,
    /// then clears the cart and hides the form. The fields are not validated:
    /// a submission without a `name` still goes through.
    pub fn submit(
        &mut self,
        customer: CustomerFields,
        cart: &mut CartStore,
        currency: Currency,
    ) -> Result<Order, CheckoutError> {
        if !self.is_visible() {
            return Err(CheckoutError::FormHidden);
        }

        let total = cart.total().ok_or(CheckoutError::Overflow)?;
        let order = Order::new(customer, cart.lines().to_vec(), Money::new(total, currency));

        tracing::info!(
            target: "salon_commerce::checkout",
            order_id = %order.id,
            lines = order.items.len(),
            total = order.total.amount,
            order = %order.to_json(),
            "order submitted"
        );

        cart.clear();
        self.hide_form();
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::product::fixtures::product;
    use crate::catalog::CatalogStore;
    use crate::ids::ProductId;

    fn cart_with_item() -> CartStore {
        let catalog = CatalogStore::new(vec![product("A1", 5000, &["X"], &["S", "M", "L"])]);
        let mut cart = CartStore::new();
        cart.select_size(&catalog, &ProductId::new("A1"), Some("M")).unwrap();
        cart.select_size(&catalog, &ProductId::new("A1"), Some("M")).unwrap();
        cart
    }

    #[test]
    fn test_show_form_on_empty_cart_keeps_hidden() {
        let mut flow = CheckoutFlow::new();
        assert_eq!(flow.show_form(&CartStore::new()), Err(CheckoutError::EmptyCart));
        assert_eq!(flow.state(), FormState::Hidden);
    }

    #[test]
    fn test_show_and_hide() {
        let mut flow = CheckoutFlow::new();
        flow.show_form(&cart_with_item()).unwrap();
        assert!(flow.is_visible());
        flow.hide_form();
        assert_eq!(flow.state(), FormState::Hidden);
    }

    #[test]
    fn test_submit_clears_cart_and_hides_form() {
        let mut flow = CheckoutFlow::new();
        let mut cart = cart_with_item();
        flow.show_form(&cart).unwrap();

        let customer = CustomerFields::from_pairs([("name", "Anna"), ("phone", "+7 900 000-00-00")]);
        let order = flow.submit(customer, &mut cart, Currency::RUB).unwrap();

        assert_eq!(order.total.amount, 10000);
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].quantity, 2);
        assert_eq!(order.item_count(), 2);
        assert_eq!(order.customer_name(), Some("Anna"));
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Some(0));
        assert_eq!(flow.state(), FormState::Hidden);
    }

    #[test]
    fn test_submit_without_name_still_succeeds() {
        let mut flow = CheckoutFlow::new();
        let mut cart = cart_with_item();
        flow.show_form(&cart).unwrap();

        let order = flow.submit(CustomerFields::new(), &mut cart, Currency::RUB).unwrap();
        assert_eq!(order.customer_name(), None);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_submit_while_hidden_is_rejected() {
        let mut flow = CheckoutFlow::new();
        let mut cart = cart_with_item();
        let result = flow.submit(CustomerFields::new(), &mut cart, Currency::RUB);
        assert_eq!(result, Err(CheckoutError::FormHidden));
        assert_eq!(cart.unique_item_count(), 1);
    }
}
