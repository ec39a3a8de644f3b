//! Show the filter options built from the catalog.

use anyhow::Result;
use salon_commerce::search::Facet;

use super::{load_storefront, FacetsArgs};
use crate::context::Context;

/// Run the facets command.
pub async fn run(args: FacetsArgs, ctx: &Context) -> Result<()> {
    let shop = load_storefront(ctx).await?;
    let index = shop.filter_index();

    let facets: Vec<Facet> = match args.facet {
        Some(facet) => vec![facet],
        None => Facet::ALL.to_vec(),
    };

    if ctx.output.is_json() {
        let map: serde_json::Map<String, serde_json::Value> = facets
            .iter()
            .map(|f| (f.as_str().to_string(), serde_json::json!(index.options(*f))))
            .collect();
        ctx.output.json(&map);
        return Ok(());
    }

    for facet in facets {
        let options = index.options(facet);
        ctx.output
            .header(&format!("{} ({})", facet.as_str(), options.len()));
        ctx.output.list_item(&ctx.config.messages.any_option);
        for option in options {
            ctx.output.list_item(option);
        }
    }

    Ok(())
}
