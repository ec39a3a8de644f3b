//! Full storefront page.

use crate::checkout::FormState;
use crate::render::{
    escape, render_cart, render_filters, render_load_error, render_products, Messages,
};
use crate::search::FilterSelection;
use crate::storefront::{CatalogStatus, Storefront};

/// Render a standalone HTML page: filters, product grid, cart and order form.
pub fn render_page(shop: &Storefront, selection: &FilterSelection, messages: &Messages) -> String {
    let currency = shop.currency();

    let products = match shop.status() {
        CatalogStatus::Failed(_) => render_load_error(messages),
        CatalogStatus::Loading => String::new(),
        CatalogStatus::Ready(_) => {
            render_products(&shop.apply_filters(selection), currency, messages)
        }
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{styles}</style>
</head>
<body>
<aside id="filters">
{filters}</aside>
<main id="products">
{products}</main>
<section id="cart">
{cart}<button type="button" id="checkout">{checkout}</button>
</section>
{form}</body>
</html>
"#,
        title = escape(&messages.page_title),
        styles = PAGE_STYLES,
        filters = render_filters(shop.filter_index(), selection, messages),
        products = products,
        cart = render_cart(shop.cart(), currency, messages),
        checkout = escape(&messages.checkout_button),
        form = render_order_form(shop.form_state(), messages),
    )
}

/// Render the order form, shown or hidden according to the checkout state.
pub fn render_order_form(state: FormState, messages: &Messages) -> String {
    let display = match state {
        FormState::Visible => "block",
        FormState::Hidden => "none",
    };
    format!(
        r#"<div id="order-form" style="display: {display};">
<form id="checkout-form" method="post">
    <input type="text" name="name" placeholder="{name}" required>
    <input type="tel" name="phone" placeholder="{phone}" required>
    <button type="submit">{submit}</button>
    <button type="button" class="cancel">{cancel}</button>
</form>
</div>
"#,
        display = display,
        name = escape(&messages.name_field),
        phone = escape(&messages.phone_field),
        submit = escape(&messages.submit_button),
        cancel = escape(&messages.cancel_button),
    )
}

const PAGE_STYLES: &str = r#"
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; display: grid; grid-template-columns: 240px 1fr 300px; gap: 1.5rem; padding: 1.5rem; }
#filters select, #filters input { display: block; width: 100%; margin-bottom: .5rem; }
#products { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 1rem; align-content: start; }
.product-card { border: 1px solid #e2e8f0; border-radius: 8px; overflow: hidden; background: #fff; }
.product-card img { width: 100%; aspect-ratio: 3 / 4; object-fit: cover; }
.product-info { padding: .75rem; }
.cart-item { display: flex; justify-content: space-between; gap: .5rem; padding: .25rem 0; border-bottom: 1px solid #e2e8f0; }
.cart-total { font-weight: 600; margin: .75rem 0; }
#order-form { position: fixed; inset: 25% 30%; background: #fff; padding: 1.5rem; border: 1px solid #e2e8f0; border-radius: 8px; }
"#;
