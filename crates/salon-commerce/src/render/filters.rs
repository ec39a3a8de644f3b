//! Filter controls section.

use crate::search::{Facet, FilterIndex, FilterSelection};
use crate::render::{escape, Messages};

/// Render one facet's `<select>`.
///
/// The first option is always the "any" sentinel with an empty value,
/// followed by the facet values in index order.
pub fn render_facet_select(
    facet: Facet,
    options: &[String],
    selected: Option<&str>,
    messages: &Messages,
) -> String {
    let mut html = format!(
        r#"<select id="{id}" name="{name}">
    <option value="">{any}</option>
"#,
        id = facet.control_id(),
        name = facet.as_str(),
        any = escape(&messages.any_option),
    );
    for value in options {
        let attr = if selected == Some(value.as_str()) { " selected" } else { "" };
        html.push_str(&format!(
            "    <option value=\"{value}\"{attr}>{value}</option>\n",
            value = escape(value),
            attr = attr,
        ));
    }
    html.push_str("</select>\n");
    html
}

/// Render every filter control plus the price bounds and actions.
pub fn render_filters(index: &FilterIndex, selection: &FilterSelection, messages: &Messages) -> String {
    let selects: String = Facet::ALL
        .iter()
        .map(|&facet| render_facet_select(facet, index.options(facet), selection.facet(facet), messages))
        .collect();

    let bound = |value: Option<u64>| value.map(|v| v.to_string()).unwrap_or_default();

    format!(
        r#"<form class="filters" method="get">
{selects}<input type="number" id="price-min" name="min_price" min="0" placeholder="{min_label}" value="{min}">
<input type="number" id="price-max" name="max_price" min="0" placeholder="{max_label}" value="{max}">
<button type="submit">{apply}</button>
<button type="reset">{reset}</button>
</form>
"#,
        selects = selects,
        min_label = escape(&messages.min_price),
        max_label = escape(&messages.max_price),
        min = bound(selection.price.min),
        max = bound(selection.price.max),
        apply = escape(&messages.apply_filters),
        reset = escape(&messages.reset_filters),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::PriceRange;

    #[test]
    fn test_select_starts_with_any_option() {
        let options = vec!["Berta".to_string(), "Pronovias".to_string()];
        let html = render_facet_select(Facet::Designer, &options, None, &Messages::default());

        let first = html.find(r#"<option value="">Все</option>"#).unwrap();
        let berta = html.find(r#"<option value="Berta">"#).unwrap();
        let pronovias = html.find(r#"<option value="Pronovias">"#).unwrap();
        assert!(first < berta && berta < pronovias);
        assert!(html.starts_with(r#"<select id="filter-designer" name="designer">"#));
    }

    #[test]
    fn test_empty_options_keep_sentinel() {
        let html = render_facet_select(Facet::Size, &[], None, &Messages::default());
        assert_eq!(html.matches("<option").count(), 1);
    }

    #[test]
    fn test_selected_value_is_marked() {
        let options = vec!["S".to_string(), "M".to_string()];
        let html = render_facet_select(Facet::Size, &options, Some("M"), &Messages::default());
        assert!(html.contains(r#"<option value="M" selected>M</option>"#));
        assert!(html.contains(r#"<option value="S">S</option>"#));
    }

    #[test]
    fn test_filters_render_price_bounds() {
        let index = FilterIndex::default();
        let selection = FilterSelection::any().with_price(PriceRange::new(Some(1000), None));
        let html = render_filters(&index, &selection, &Messages::default());
        assert!(html.contains(r#"id="price-min" name="min_price" min="0" placeholder="Цена от" value="1000""#));
        assert!(html.contains(r#"id="price-max" name="max_price" min="0" placeholder="Цена до" value="""#));
        assert_eq!(html.matches("<select").count(), 4);
    }
}
