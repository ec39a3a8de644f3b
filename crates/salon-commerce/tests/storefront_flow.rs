//! End-to-end storefront tests: catalog text in, rendered HTML and orders out.
use salon_commerce::prelude::*;
use salon_commerce::render::{render_cart, render_page, render_products};

const CATALOG: &str = "\
id,name,model,price,designer,silhouette,color,sizes,category,image,description
A1,Aurora,AU-01,5000,Berta,A-line,Ivory,\"S, M, L\",Wedding,https://img.example/a1.jpg,Lace
B2,Bella,BE-02,12000,\"Pronovias, Berta\",Mermaid,White,\"M\",Wedding,https://img.example/b2.jpg,
C3,Celeste,CE-03,abc,Berta,A-line,Ivory,S,Evening,https://img.example/c3.jpg,
D4,Dahlia,DA-04,8000 руб.,Rosa,Straight,\"Red, Black\",\"40, 42\",Evening,https://img.example/d4.jpg,Silk
";

fn shop() -> Storefront {
    Storefront::with_catalog(parse_catalog(CATALOG).unwrap(), Currency::RUB)
}

#[test]
fn test_invalid_price_row_is_reported() {
    let shop = shop();
    assert_eq!(shop.catalog().len(), 3);

    match shop.status() {
        CatalogStatus::Ready(report) => {
            assert_eq!(report.rows_read, 4);
            assert_eq!(report.products_loaded, 3);
            assert_eq!(report.skipped.len(), 1);
        }
        other => panic!("unexpected status: {other:?}"),
    }

    let dahlia = shop.product(&ProductId::new("D4")).unwrap();
    assert_eq!(dahlia.price, 8000);
}

#[test]
fn test_filter_by_designer_and_price() {
    let shop = shop();

    let berta = FilterSelection::any().with_facet(Facet::Designer, "Berta");
    let ids: Vec<_> = shop
        .apply_filters(&berta)
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(ids, vec!["A1", "B2"]);

    let cheap = berta.with_price(PriceRange::from_inputs("", "10000"));
    let ids: Vec<_> = shop
        .apply_filters(&cheap)
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(ids, vec!["A1"]);

    assert_eq!(shop.reset_filters().len(), 3);
}

#[test]
fn test_no_match_renders_nothing_found() {
    let shop = shop();
    let selection = FilterSelection::any().with_facet(Facet::Size, "XXL");
    let visible = shop.apply_filters(&selection);
    assert!(visible.is_empty());

    let messages = Messages::default();
    let html = render_products(&visible, shop.currency(), &messages);
    assert!(html.contains(&messages.nothing_found));
}

#[test]
fn test_select_same_size_twice_then_checkout() {
    let mut shop = shop();
    let a1 = ProductId::new("A1");

    shop.select_size(&a1, Some("M")).unwrap();
    let added = shop.select_size(&a1, Some(" M ")).unwrap();
    assert_eq!(added.cart_id.as_str(), "A1-M");
    assert_eq!(added.quantity, 2);
    assert_eq!(shop.cart().total(), Some(10000));

    let messages = Messages::default();
    let cart_html = render_cart(shop.cart(), shop.currency(), &messages);
    assert!(cart_html.contains("10\u{a0}000 ₽"));

    shop.show_form().unwrap();
    let mut customer = CustomerFields::new();
    customer.insert("name", "Anna");
    customer.insert("phone", "+7 900 000-00-00");
    let order = shop.submit_order(customer).unwrap();

    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].quantity, 2);
    assert_eq!(order.total.amount, 10000);
    assert!(shop.cart().is_empty());
    assert_eq!(shop.form_state(), FormState::Hidden);

    let notice = Notice::from(&order);
    assert_eq!(
        messages.notice(&notice),
        "Спасибо, Anna! Мы свяжемся с вами по телефону."
    );
}

#[test]
fn test_unavailable_size_leaves_cart_unchanged() {
    let mut shop = shop();
    let err = shop
        .select_size(&ProductId::new("B2"), Some("S"))
        .unwrap_err();
    assert!(matches!(err, SelectionError::SizeUnavailable { .. }));
    assert!(shop.cart().is_empty());

    let err = shop.select_size(&ProductId::new("ZZ"), Some("S")).unwrap_err();
    assert_eq!(err, SelectionError::ProductNotFound("ZZ".to_string()));
}

#[test]
fn test_checkout_with_empty_cart_is_refused() {
    let mut shop = shop();
    assert_eq!(shop.show_form(), Err(CheckoutError::EmptyCart));
    assert_eq!(
        shop.submit_order(CustomerFields::new()),
        Err(CheckoutError::FormHidden)
    );
}

#[test]
fn test_page_after_failed_load() {
    let mut shop = Storefront::new(Currency::RUB);
    shop.finish_load(Err(LoadError::Fetch("HTTP 404".to_string())));

    let messages = Messages::default();
    let html = render_page(&shop, &FilterSelection::any(), &messages);
    assert!(html.contains(&messages.load_failed));
    assert!(html.contains(r#"<select id="filter-designer" name="designer">"#));
    assert!(html.contains(&messages.cart_empty));
}

#[test]
fn test_page_lists_filter_options_and_products() {
    let shop = shop();
    let html = render_page(&shop, &FilterSelection::any(), &Messages::default());

    assert!(html.contains(r#"<option value="Pronovias">Pronovias</option>"#));
    assert!(html.contains(r#"<option value="42">42</option>"#));
    assert!(html.contains(r#"data-product-id="D4""#));
    assert!(!html.contains(r#"data-product-id="C3""#));
    assert!(html.contains(r#"id="order-form" style="display: none;""#));
}
