//! Product grid section.

use crate::catalog::Product;
use crate::money::Currency;
use crate::render::{escape, Messages};

/// Render the product grid.
///
/// An empty list renders the "nothing found" message instead of cards.
pub fn render_products(products: &[&Product], currency: Currency, messages: &Messages) -> String {
    if products.is_empty() {
        return format!(r#"<p class="empty">{}</p>"#, escape(&messages.nothing_found));
    }

    products
        .iter()
        .map(|p| render_product_card(p, currency, messages))
        .collect()
}

/// Fallback shown in place of the grid when the catalog failed to load.
pub fn render_load_error(messages: &Messages) -> String {
    format!(
        r#"<p class="load-error" style="color:red;">{}</p>"#,
        escape(&messages.load_failed)
    )
}

fn render_product_card(product: &Product, currency: Currency, messages: &Messages) -> String {
    format!(
        r#"<div class="product-card" data-product-id="{id}">
    <img src="{image}" alt="{name}">
    <div class="product-info">
        <h3>{name} <small>({model})</small></h3>
        <p><strong>{designers}</strong></p>
        <p>{silhouettes}</p>
        <p>{color_label}: {colors}</p>
        <p><strong>{price}</strong></p>
        <p>{sizes_label}: {sizes}</p>
        <button class="add-to-cart" data-product-id="{id}" data-sizes="{sizes}">{choose_size}</button>
    </div>
</div>
"#,
        id = escape(product.id.as_str()),
        image = escape(&product.image),
        name = escape(&product.name),
        model = escape(&product.model),
        designers = escape(&product.designers.join(", ")),
        silhouettes = escape(&product.silhouettes.join(", ")),
        color_label = escape(&messages.color_label),
        colors = escape(&product.colors.join(", ")),
        price = escape(&currency.format(product.price)),
        sizes_label = escape(&messages.sizes_label),
        sizes = escape(&product.sizes.join(", ")),
        choose_size = escape(&messages.choose_size),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::product::fixtures::product;

    #[test]
    fn test_empty_list_renders_nothing_found() {
        let html = render_products(&[], Currency::RUB, &Messages::default());
        assert!(html.contains("По вашему запросу ничего не найдено."));
        assert!(!html.contains("product-card"));
    }

    #[test]
    fn test_one_card_per_product() {
        let a = product("A1", 5000, &["X", "W"], &["S", "M", "L"]);
        let b = product("B2", 72000, &["Y"], &["42"]);
        let html = render_products(&[&a, &b], Currency::RUB, &Messages::default());

        assert_eq!(html.matches(r#"<div class="product-card""#).count(), 2);
        assert!(html.contains("Dress A1 <small>(Model A1)</small>"));
        assert!(html.contains("<strong>X, W</strong>"));
        assert!(html.contains("Размеры: S, M, L"));
        assert!(html.contains("5\u{a0}000 \u{20bd}"));
        assert!(html.contains("72\u{a0}000 \u{20bd}"));
        assert!(html.contains(r#"data-product-id="B2""#));
    }

    #[test]
    fn test_markup_is_escaped() {
        let mut p = product("A1", 1, &["<script>"], &["S"]);
        p.name = "Tom & Jerry".to_string();
        let html = render_products(&[&p], Currency::RUB, &Messages::default());
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Tom &amp; Jerry"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_load_error() {
        let html = render_load_error(&Messages::default());
        assert!(html.contains("Ошибка загрузки товаров."));
    }
}
