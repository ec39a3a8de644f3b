//! Render the storefront page as HTML.

use anyhow::{Context as _, Result};
use salon_commerce::render::render_page;

use super::{load_storefront, RenderArgs};
use crate::context::Context;

/// Run the render command.
pub async fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let shop = load_storefront(ctx).await?;
    let selection = args.filters.selection();
    let html = render_page(&shop, &selection, &ctx.config.messages);

    match args.out {
        Some(path) => {
            let path = ctx.resolve_path(&path);
            tokio::fs::write(&path, &html)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;

            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({
                    "path": path.display().to_string(),
                    "bytes": html.len(),
                    "products": shop.apply_filters(&selection).len(),
                }));
            } else {
                ctx.output.success(&format!("Wrote {}", path.display()));
            }
        }
        None => print!("{}", html),
    }

    Ok(())
}
