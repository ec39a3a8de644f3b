//! CLI command implementations.

pub mod config;
pub mod facets;
pub mod order;
pub mod products;
pub mod render;
pub mod shop;

use std::path::PathBuf;

use anyhow::{bail, Context as _, Result};
use clap::{Args, Subcommand};
use salon_commerce::search::{Facet, FilterSelection, PriceRange};
use salon_commerce::{CatalogStatus, Storefront};

use crate::context::Context;

/// Filter flags shared by commands that show products.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Designer to show.
    #[arg(long)]
    pub designer: Option<String>,

    /// Silhouette to show.
    #[arg(long)]
    pub silhouette: Option<String>,

    /// Color to show.
    #[arg(long)]
    pub color: Option<String>,

    /// Size to show.
    #[arg(long)]
    pub size: Option<String>,

    /// Minimum price, inclusive.
    #[arg(long, default_value = "")]
    pub min_price: String,

    /// Maximum price, inclusive. 0 means no upper bound.
    #[arg(long, default_value = "")]
    pub max_price: String,
}

impl FilterArgs {
    /// Build the filter selection from the flags.
    pub fn selection(&self) -> FilterSelection {
        let facets = [
            (Facet::Designer, &self.designer),
            (Facet::Silhouette, &self.silhouette),
            (Facet::Color, &self.color),
            (Facet::Size, &self.size),
        ];

        facets
            .into_iter()
            .fold(FilterSelection::any(), |selection, (facet, value)| match value {
                Some(v) => selection.with_facet(facet, v.trim()),
                None => selection,
            })
            .with_price(PriceRange::from_inputs(&self.min_price, &self.max_price))
    }
}

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Show the catalog load report.
    #[arg(long)]
    pub report: bool,
}

/// Arguments for the facets command.
#[derive(Args)]
pub struct FacetsArgs {
    /// Show only one facet.
    #[arg(short, long, value_parser = parse_facet)]
    pub facet: Option<Facet>,
}

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Output file (default: stdout).
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

/// Arguments for the order command.
#[derive(Args)]
pub struct OrderArgs {
    /// Item to add as `PRODUCT_ID:SIZE`. Repeat to add more.
    #[arg(short, long = "pick", value_parser = parse_pick, required = true)]
    pub picks: Vec<Pick>,

    /// Order form field as `key=value`. Repeat for more fields.
    #[arg(short, long = "field", value_parser = parse_field)]
    pub fields: Vec<(String, String)>,
}

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}

/// A product and size picked on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pick {
    pub product_id: String,
    pub size: Option<String>,
}

fn parse_pick(raw: &str) -> Result<Pick, String> {
    let (id, size) = match raw.rsplit_once(':') {
        Some((id, size)) => (id.trim(), Some(size.trim().to_string())),
        None => (raw.trim(), None),
    };
    if id.is_empty() {
        return Err(format!("missing product id in '{raw}'"));
    }
    Ok(Pick {
        product_id: id.to_string(),
        size,
    })
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing field name in '{raw}'"));
    }
    Ok((key.to_string(), value.trim().to_string()))
}

fn parse_facet(raw: &str) -> Result<Facet, String> {
    Facet::ALL
        .into_iter()
        .find(|f| f.as_str().eq_ignore_ascii_case(raw.trim()))
        .ok_or_else(|| format!("unknown facet '{raw}' (designer, silhouette, color, size)"))
}

/// Fetch and parse the catalog, returning a ready storefront session.
///
/// A failed load is an error for every command: there is nothing to show.
pub async fn load_storefront(ctx: &Context) -> Result<Storefront> {
    let spec = ctx.source_spec()?;
    let source = spec
        .into_source(ctx.config.catalog.cache_bust)
        .context("Invalid catalog source")?;

    tracing::debug!(
        source = %source.describe(),
        cache_bust = ctx.config.catalog.cache_bust,
        "loading catalog"
    );

    let spinner = ctx
        .output
        .spinner(&format!("Loading catalog from {}", source.describe()));
    let result = salon_data::load_catalog(source.as_ref()).await;
    spinner.finish_and_clear();

    let mut shop = Storefront::new(ctx.config.display.currency);
    shop.finish_load(result);

    match shop.status() {
        CatalogStatus::Ready(report) => {
            ctx.output.debug(&format!(
                "{} rows read, {} products loaded, {} skipped",
                report.rows_read,
                report.products_loaded,
                report.skipped.len()
            ));
            for skipped in &report.skipped {
                ctx.output
                    .warn(&format!("line {}: {}", skipped.line, skipped.reason));
            }
            Ok(shop)
        }
        CatalogStatus::Failed(err) => {
            bail!("{}: {}", ctx.config.messages.load_failed, err)
        }
        CatalogStatus::Loading => bail!("Catalog load did not complete"),
    }
}
