//! HTML rendering.
//!
//! Pure projections of catalog, filter and cart state into HTML fragments.
//! Nothing here mutates the storefront.

mod cart;
mod filters;
mod messages;
mod page;
mod products;

pub use cart::render_cart;
pub use filters::{render_facet_select, render_filters};
pub use messages::Messages;
pub use page::{render_order_form, render_page};
pub use products::{render_load_error, render_products};

/// Escape text for use in HTML content and attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"<a href="x">Tom & 'Jerry'</a>"#), "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;");
        assert_eq!(escape("Платье"), "Платье");
    }
}
