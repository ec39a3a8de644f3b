//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");

    // Catalog section
    ctx.output.info("[catalog]");
    if let Some(ref url) = ctx.config.catalog.url {
        ctx.output.kv("url", url);
    }
    if let Some(ref path) = ctx.config.catalog.path {
        ctx.output.kv("path", path);
    }
    ctx.output
        .kv("cache_bust", &ctx.config.catalog.cache_bust.to_string());
    if let Some(ref source) = ctx.source_override {
        ctx.output.kv("--source", source);
    }

    // Display section
    ctx.output.info("");
    ctx.output.info("[display]");
    ctx.output.kv("currency", ctx.config.display.currency.code());

    // Logging section
    ctx.output.info("");
    ctx.output.info("[logging]");
    ctx.output
        .kv("format", &format!("{:?}", ctx.config.logging.format).to_lowercase());
    ctx.output.kv(
        "level",
        ctx.config
            .logging
            .level
            .as_deref()
            .unwrap_or(crate::logging::DEFAULT_FILTER),
    );

    // Messages
    ctx.output.info("");
    ctx.output.info("[messages]");
    if let Ok(serde_json::Value::Object(messages)) = serde_json::to_value(&ctx.config.messages) {
        for (key, value) in messages {
            ctx.output.kv(&key, value.as_str().unwrap_or_default());
        }
    }

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let content = generate_default_config(ctx.source_override.as_deref());
    fs::write(&config_path, content)?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}
