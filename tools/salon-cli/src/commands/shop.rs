//! Interactive shopping session.

use anyhow::{bail, Result};
use dialoguer::{Confirm, Input, Select};
use salon_commerce::checkout::CustomerFields;
use salon_commerce::search::{Facet, FilterSelection, PriceRange};
use salon_commerce::{Notice, ProductId, Storefront};

use super::{load_storefront, ShopArgs};
use crate::context::Context;

/// Run the shop command.
pub async fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("The shop command is interactive and has no JSON output");
    }

    let mut shop = load_storefront(ctx).await?;
    let mut selection = args.filters.selection();

    loop {
        let visible = shop.apply_filters(&selection).len();
        let actions = [
            format!("Browse products ({visible})"),
            "Filter".to_string(),
            "Reset filters".to_string(),
            format!("Cart ({})", shop.cart().item_count()),
            ctx.config.messages.checkout_button.clone(),
            "Quit".to_string(),
        ];

        let choice = Select::new()
            .with_prompt("What next?")
            .items(&actions)
            .default(0)
            .interact()?;

        match choice {
            0 => browse(&mut shop, &selection, ctx)?,
            1 => selection = choose_filters(&shop, &selection, ctx)?,
            2 => {
                selection = FilterSelection::any();
                ctx.output
                    .info(&format!("Showing all {} products", shop.reset_filters().len()));
            }
            3 => show_cart(&shop, ctx),
            4 => checkout(&mut shop, ctx)?,
            _ => break,
        }
    }

    Ok(())
}

/// Pick a product from the filtered grid, then one of its sizes.
fn browse(shop: &mut Storefront, selection: &FilterSelection, ctx: &Context) -> Result<()> {
    let messages = &ctx.config.messages;
    let currency = shop.currency();

    let products: Vec<(ProductId, String, Vec<String>)> = shop
        .apply_filters(selection)
        .into_iter()
        .map(|p| {
            let label = format!(
                "{} ({}) · {} · {}",
                p.name,
                p.model,
                p.designers.join(", "),
                currency.format(p.price)
            );
            (p.id.clone(), label, p.sizes.clone())
        })
        .collect();

    if products.is_empty() {
        ctx.output.info(&messages.nothing_found);
        return Ok(());
    }

    let mut labels: Vec<&str> = products.iter().map(|(_, label, _)| label.as_str()).collect();
    labels.push("Back");

    let picked = Select::new()
        .with_prompt("Product")
        .items(&labels)
        .default(0)
        .interact()?;
    let Some((product_id, _, sizes)) = products.get(picked) else {
        return Ok(());
    };

    let size = Select::new()
        .with_prompt(messages.choose_size.as_str())
        .items(sizes)
        .default(0)
        .interact()?;

    match shop.select_size(product_id, sizes.get(size).map(String::as_str)) {
        Ok(added) => {
            show_cart(shop, ctx);
            ctx.output.success(&messages.notice(&Notice::from(&added)));
        }
        Err(e) => ctx.output.warn(&messages.notice(&Notice::from(e))),
    }
    Ok(())
}

/// Ask for every facet and the price bounds, starting from the current selection.
fn choose_filters(
    shop: &Storefront,
    current: &FilterSelection,
    ctx: &Context,
) -> Result<FilterSelection> {
    let messages = &ctx.config.messages;
    let index = shop.filter_index();
    let mut selection = FilterSelection::any();

    for facet in Facet::ALL {
        let options = index.options(facet);
        let mut items = vec![messages.any_option.as_str()];
        items.extend(options.iter().map(String::as_str));

        let default = current
            .facet(facet)
            .and_then(|value| options.iter().position(|o| o == value))
            .map_or(0, |i| i + 1);

        let choice = Select::new()
            .with_prompt(facet.as_str())
            .items(&items)
            .default(default)
            .interact()?;

        if choice > 0 {
            selection = selection.with_facet(facet, items[choice]);
        }
    }

    let bound = |value: Option<u64>| value.map(|v| v.to_string()).unwrap_or_default();
    let min: String = Input::new()
        .with_prompt(messages.min_price.as_str())
        .with_initial_text(bound(current.price.min))
        .allow_empty(true)
        .interact_text()?;
    let max: String = Input::new()
        .with_prompt(messages.max_price.as_str())
        .with_initial_text(bound(current.price.max))
        .allow_empty(true)
        .interact_text()?;

    Ok(selection.with_price(PriceRange::from_inputs(&min, &max)))
}

fn show_cart(shop: &Storefront, ctx: &Context) {
    let messages = &ctx.config.messages;
    let currency = shop.currency();
    let cart = shop.cart();

    if cart.is_empty() {
        ctx.output.info(&messages.cart_empty);
        return;
    }

    ctx.output.header(&format!("Cart ({} positions)", cart.unique_item_count()));
    for line in cart.lines() {
        let subtotal = line
            .subtotal()
            .map(|amount| currency.format(amount))
            .unwrap_or_default();
        ctx.output.list_item(&format!(
            "{} ({}), {} {} × {}  {}",
            line.name, line.model, messages.size_label, line.size, line.quantity, subtotal
        ));
    }
    let total = cart
        .total()
        .map(|amount| currency.format(amount))
        .unwrap_or_default();
    ctx.output.kv(&messages.total_label, &total);
}

/// Open the order form, collect the fields and submit.
fn checkout(shop: &mut Storefront, ctx: &Context) -> Result<()> {
    let messages = &ctx.config.messages;

    if let Err(e) = shop.show_form() {
        ctx.output.warn(&messages.notice(&Notice::from(e)));
        return Ok(());
    }

    show_cart(shop, ctx);

    let name: String = Input::new()
        .with_prompt(messages.name_field.as_str())
        .interact_text()?;
    let phone: String = Input::new()
        .with_prompt(messages.phone_field.as_str())
        .interact_text()?;

    let confirmed = Confirm::new()
        .with_prompt(messages.submit_button.as_str())
        .default(true)
        .interact()?;
    if !confirmed {
        shop.hide_form();
        ctx.output.info(&messages.cancel_button);
        return Ok(());
    }

    let customer = CustomerFields::from_pairs([("name", name), ("phone", phone)]);
    match shop.submit_order(customer) {
        Ok(order) => {
            ctx.output.success(&messages.notice(&Notice::from(&order)));
            ctx.output.kv("order", order.id.as_str());
        }
        Err(e) => ctx.output.warn(&messages.notice(&Notice::from(e))),
    }
    Ok(())
}
