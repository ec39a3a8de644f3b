//! Place an order from the command line.

use anyhow::{bail, Result};
use salon_commerce::checkout::{CustomerFields, Order};
use salon_commerce::{Notice, ProductId, Storefront};

use super::{load_storefront, OrderArgs, Pick};
use crate::context::Context;

/// Run the order command.
pub async fn run(args: OrderArgs, ctx: &Context) -> Result<()> {
    let mut shop = load_storefront(ctx).await?;
    let messages = &ctx.config.messages;

    add_picks(&mut shop, &args.picks, ctx)?;

    if let Err(e) = shop.show_form() {
        bail!(messages.notice(&Notice::from(e)));
    }

    let customer = CustomerFields::from_pairs(args.fields);
    let order = match shop.submit_order(customer) {
        Ok(order) => order,
        Err(e) => bail!(messages.notice(&Notice::from(e))),
    };

    if ctx.output.is_json() {
        ctx.output.json(&order);
        return Ok(());
    }

    print_order(&order, &shop, ctx);
    ctx.output.success(&messages.notice(&Notice::from(&order)));
    Ok(())
}

/// Add every pick to the cart, stopping at the first refusal.
fn add_picks(shop: &mut Storefront, picks: &[Pick], ctx: &Context) -> Result<()> {
    for pick in picks {
        let product_id = ProductId::new(pick.product_id.as_str());
        match shop.select_size(&product_id, pick.size.as_deref()) {
            Ok(added) => ctx.output.info(&ctx.config.messages.notice(&Notice::from(&added))),
            Err(e) => bail!(
                "{} ({})",
                ctx.config.messages.notice(&Notice::from(e)),
                pick.product_id
            ),
        }
    }
    Ok(())
}

fn print_order(order: &Order, shop: &Storefront, ctx: &Context) {
    let currency = shop.currency();

    ctx.output.header(&format!("Order {}", order.id));
    ctx.output.kv(
        "placed",
        &order
            .placed_at
            .with_timezone(&chrono::Local)
            .format("%Y-%m-%d %H:%M")
            .to_string(),
    );
    ctx.output.kv("items", &order.item_count().to_string());
    for (name, value) in order.customer.iter() {
        ctx.output.kv(name, value);
    }

    for line in &order.items {
        let subtotal = line
            .subtotal()
            .map(|amount| currency.format(amount))
            .unwrap_or_default();
        ctx.output.list_item(&format!(
            "{} ({}), {} {} × {}  {}",
            line.name, line.model, ctx.config.messages.size_label, line.size, line.quantity, subtotal
        ));
    }
    ctx.output.kv(&ctx.config.messages.total_label, &order.total.display());
}
