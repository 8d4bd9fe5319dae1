//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, is_json, CliConfig};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Get { key } => get_config(&key, ctx).await,
        ConfigCommand::Set { key, value } => set_config(&key, &value, ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("");
    ctx.output.info("[catalog]");
    ctx.output.kv("path", &ctx.config.catalog.path);
    ctx.output.kv("resolved", &ctx.catalog_path().display().to_string());

    ctx.output.info("");
    ctx.output.info("[item_master]");
    ctx.output.kv(
        "include_bundles",
        &ctx.config.item_master.include_bundles.to_string(),
    );
    if let Some(grams) = ctx.config.item_master.default_weight_grams {
        ctx.output.kv("default_weight_grams", &grams.to_string());
    }

    ctx.output.info("");
    ctx.output.info("[purchase_orders]");
    ctx.output.kv("dir", &ctx.config.purchase_orders.dir);
    if let Some(ref vendor) = ctx.config.purchase_orders.default_vendor {
        ctx.output.kv("default_vendor", vendor);
    }

    Ok(())
}

async fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        println!("{}", value);
    }

    Ok(())
}

async fn set_config(key: &str, value: &str, ctx: &Context) -> Result<()> {
    let Some(config_path) = ctx.config_path.as_ref() else {
        bail!("No config file found. Run `inventory config init` to create one.");
    };

    let content = fs::read_to_string(config_path)?;
    let mut config = CliConfig::parse(&content, is_json(config_path))?;

    set_config_value(&mut config, key, value)?;

    let new_content = if is_json(config_path) {
        serde_json::to_string_pretty(&config)?
    } else {
        toml::to_string_pretty(&config)?
    };
    fs::write(config_path, new_content)?;

    ctx.output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("inventory.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let errors = ctx.config.validate();
    let mut warnings: Vec<String> = Vec::new();

    if ctx.config_path.is_none() {
        warnings.push("no config file found, using defaults".to_string());
    }
    if !ctx.catalog_path().exists() {
        warnings.push(format!(
            "catalog file {} does not exist yet",
            ctx.catalog_path().display()
        ));
    }

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

fn get_config_value(config: &CliConfig, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["catalog", "path"] => Ok(config.catalog.path.clone()),
        ["item_master", "include_bundles"] => Ok(config.item_master.include_bundles.to_string()),
        ["item_master", "default_weight_grams"] => Ok(config
            .item_master
            .default_weight_grams
            .map(|g| g.to_string())
            .unwrap_or_else(|| "null".to_string())),
        ["purchase_orders", "dir"] => Ok(config.purchase_orders.dir.clone()),
        ["purchase_orders", "default_vendor"] => Ok(config
            .purchase_orders
            .default_vendor
            .clone()
            .unwrap_or_else(|| "null".to_string())),
        _ => bail!("Unknown config key: {}", key),
    }
}

fn set_config_value(config: &mut CliConfig, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["catalog", "path"] => config.catalog.path = value.to_string(),
        ["item_master", "include_bundles"] => config.item_master.include_bundles = value.parse()?,
        ["item_master", "default_weight_grams"] => {
            config.item_master.default_weight_grams = Some(value.parse()?)
        }
        ["purchase_orders", "dir"] => config.purchase_orders.dir = value.to_string(),
        ["purchase_orders", "default_vendor"] => {
            config.purchase_orders.default_vendor = Some(value.to_string())
        }
        _ => bail!("Unknown config key: {}", key),
    }

    Ok(())
}
