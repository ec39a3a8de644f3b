//! Cart section.

use crate::cart::{CartLine, CartStore};
use crate::money::Currency;
use crate::render::{escape, Messages};

/// Render the cart lines followed by the grand total.
pub fn render_cart(cart: &CartStore, currency: Currency, messages: &Messages) -> String {
    let items = if cart.is_empty() {
        escape(&messages.cart_empty)
    } else {
        cart.lines()
            .iter()
            .map(|line| render_cart_line(line, currency, messages))
            .collect()
    };

    format!(
        r#"<div id="cart-items">{items}</div>
<div class="cart-total">{label}: <span id="total">{total}</span></div>
"#,
        items = items,
        label = escape(&messages.total_label),
        total = escape(&format_amount(cart.total(), currency)),
    )
}

fn render_cart_line(line: &CartLine, currency: Currency, messages: &Messages) -> String {
    format!(
        r#"<div class="cart-item" data-cart-id="{cart_id}">
    <div>{name} ({model}), {size_label} {size} × {quantity}</div>
    <div>{subtotal}</div>
</div>
"#,
        cart_id = escape(line.cart_id.as_str()),
        name = escape(&line.name),
        model = escape(&line.model),
        size_label = escape(&messages.size_label),
        size = escape(&line.size),
        quantity = line.quantity,
        subtotal = escape(&format_amount(line.subtotal(), currency)),
    )
}

fn format_amount(amount: Option<u64>, currency: Currency) -> String {
    match amount {
        Some(amount) => currency.format(amount),
        None => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::product::fixtures::product;
    use crate::catalog::CatalogStore;
    use crate::ids::ProductId;

    #[test]
    fn test_empty_cart() {
        let html = render_cart(&CartStore::new(), Currency::RUB, &Messages::default());
        assert!(html.contains("Корзина пуста"));
        assert!(html.contains(r#"<span id="total">0 ₽</span>"#));
    }

    #[test]
    fn test_cart_rows_and_total() {
        let catalog = CatalogStore::new(vec![
            product("A1", 5000, &["X"], &["S", "M"]),
            product("B2", 1500, &["X"], &["42"]),
        ]);
        let mut cart = CartStore::new();
        cart.select_size(&catalog, &ProductId::new("A1"), Some("M")).unwrap();
        cart.select_size(&catalog, &ProductId::new("A1"), Some("M")).unwrap();
        cart.select_size(&catalog, &ProductId::new("B2"), Some("42")).unwrap();

        let html = render_cart(&cart, Currency::USD, &Messages::default());
        assert_eq!(html.matches(r#"class="cart-item""#).count(), 2);
        assert!(html.contains("Dress A1 (Model A1), размер M × 2"));
        assert!(html.contains("<div>$10,000</div>"));
        assert!(html.contains("<div>$1,500</div>"));
        assert!(html.contains(r#"<span id="total">$11,500</span>"#));
    }
}
