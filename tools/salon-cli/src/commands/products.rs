//! List catalog products.

use anyhow::Result;
use salon_commerce::CatalogStatus;

use super::{load_storefront, ProductsArgs};
use crate::context::Context;
use crate::output::fit;

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let shop = load_storefront(ctx).await?;
    let selection = args.filters.selection();
    let products = shop.apply_filters(&selection);

    if ctx.output.is_json() {
        if args.report {
            if let CatalogStatus::Ready(report) = shop.status() {
                ctx.output.json(&serde_json::json!({
                    "products": products,
                    "report": report,
                }));
                return Ok(());
            }
        }
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header(&format!(
        "Products ({} of {})",
        products.len(),
        shop.catalog().len()
    ));

    if products.is_empty() {
        ctx.output.info(&ctx.config.messages.nothing_found);
    } else {
        let widths = [8, 24, 12, 12, 20, 16];
        ctx.output
            .table_row(&["ID", "NAME", "MODEL", "PRICE", "DESIGNER", "SIZES"], &widths);
        for product in &products {
            let cells = [
                fit(product.id.as_str(), widths[0]),
                fit(&product.name, widths[1]),
                fit(&product.model, widths[2]),
                fit(&shop.currency().format(product.price), widths[3]),
                fit(&product.designers.join(", "), widths[4]),
                fit(&product.sizes.join(", "), widths[5]),
            ];
            let cols: Vec<&str> = cells.iter().map(String::as_str).collect();
            ctx.output.table_row(&cols, &widths);
        }
    }

    if args.report {
        if let CatalogStatus::Ready(report) = shop.status() {
            ctx.output.header("Load report");
            ctx.output.kv("rows read", &report.rows_read.to_string());
            ctx.output.kv("products loaded", &report.products_loaded.to_string());
            ctx.output.kv("rows skipped", &report.skipped.len().to_string());
            for skipped in &report.skipped {
                ctx.output
                    .list_item(&format!("line {}: {}", skipped.line, skipped.reason));
            }
        }
    }

    Ok(())
}
