//! Master data commands.

use anyhow::{bail, Result};
use dialoguer::Confirm;
use inventory_core::catalog::{BundleSku, Catalog, Category, Print, ProductWeight, SizeEntry};
use inventory_core::sku::{generate_sku, SchemaType};

use super::{CatalogArgs, CatalogCommand};
use crate::context::Context;

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    match args.command {
        CatalogCommand::Show => show_catalog(ctx).await,
        CatalogCommand::Validate => validate_catalog(ctx).await,
        command => edit_catalog(command, ctx).await,
    }
}

async fn show_catalog(ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog().await?;

    if ctx.output.is_json() {
        ctx.output.json(&catalog);
        return Ok(());
    }

    ctx.output.header("Categories");
    for category in &catalog.categories {
        ctx.output.list_item(&format!(
            "{} - {} (schema {})",
            category.code, category.name, category.schema_code
        ));
    }

    ctx.output.header("Prints");
    for print in &catalog.prints {
        ctx.output.list_item(&format!("{} - {}", print.code, print.name));
    }

    ctx.output.header("Sizes");
    for category in &catalog.categories {
        for print in catalog.prints_in_category(&category.code) {
            let sizes: Vec<&str> = catalog
                .sizes_for(&category.code, &print.code)
                .iter()
                .map(|s| s.size_name.as_str())
                .collect();
            ctx.output
                .kv(&format!("{}/{}", category.code, print.code), &sizes.join(", "));
        }
    }

    if !catalog.weights.is_empty() {
        ctx.output.header("Weights");
        for weight in &catalog.weights {
            let key = match &weight.size_name {
                Some(size) => format!("{}/{}", weight.category_code, size),
                None => weight.category_code.clone(),
            };
            ctx.output.kv(&key, &format!("{} g", weight.weight_grams));
        }
    }

    if !catalog.bundles.is_empty() {
        ctx.output.header("Bundles");
        for bundle in &catalog.bundles {
            ctx.output.list_item(&bundle.sku);
        }
    }

    Ok(())
}

async fn validate_catalog(ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog().await?;

    for category in catalog.categories.iter().filter(|c| !c.has_recognized_schema()) {
        ctx.output.warn(&format!(
            "Category {} has unrecognized schema {}; SKUs use schema {}",
            category.code,
            category.schema_code,
            SchemaType::default().code()
        ));
    }

    let skus = catalog.sku_index()?;
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "valid": true, "skus": skus.len() }));
    } else {
        ctx.output.success(&format!(
            "Catalog is valid ({} SKUs)",
            skus.len()
        ));
    }
    Ok(())
}

async fn edit_catalog(command: CatalogCommand, ctx: &Context) -> Result<()> {
    let mut catalog = ctx.load_catalog().await?;

    let message = match apply(command, &mut catalog, ctx)? {
        Some(message) => message,
        None => return Ok(()),
    };

    ctx.save_catalog(&catalog).await?;
    ctx.output.success(&message);
    Ok(())
}

/// Apply an edit. Returns `None` when the user backed out.
fn apply(command: CatalogCommand, catalog: &mut Catalog, ctx: &Context) -> Result<Option<String>> {
    let message = match command {
        CatalogCommand::Show | CatalogCommand::Validate => return Ok(None),
        CatalogCommand::AddCategory { code, name, schema } => {
            let schema = checked_schema(schema)?;
            let category = catalog.add_category(Category::new(code, name, schema))?;
            format!("Added category {} (schema {})", category.code, schema.code())
        }
        CatalogCommand::SetSchema { code, schema } => {
            let schema = checked_schema(schema)?;
            catalog.set_category_schema(&code, schema)?;
            format!("Category {} now uses schema {}", code.trim(), schema)
        }
        CatalogCommand::RemoveCategory { code, yes } => {
            let category = catalog.category(&code)?;
            if !yes && !ctx.output.is_json() {
                let confirmed = Confirm::new()
                    .with_prompt(format!(
                        "Remove {} with its sizes, weights and bundles?",
                        category.code
                    ))
                    .default(false)
                    .interact()?;
                if !confirmed {
                    ctx.output.warn("Removal cancelled");
                    return Ok(None);
                }
            }
            let removed = catalog.remove_category(&code)?;
            format!("Removed category {}", removed.code)
        }
        CatalogCommand::AddPrint { code, name } => {
            let print = catalog.add_print(Print::new(code, name))?;
            format!("Added print {}", print.code)
        }
        CatalogCommand::RemovePrint { code } => {
            let removed = catalog.remove_print(&code)?;
            format!("Removed print {}", removed.code)
        }
        CatalogCommand::AddSize { category, print, size } => {
            let entry = catalog.add_size(SizeEntry::new(category, print, size))?;
            format!(
                "Added size {} to {}/{}",
                entry.size_name, entry.category_code, entry.print_code
            )
        }
        CatalogCommand::RemoveSize { category, print, size } => {
            let removed = catalog.remove_size(&category, &print, &size)?;
            format!(
                "Removed size {} from {}/{}",
                removed.size_name, removed.category_code, removed.print_code
            )
        }
        CatalogCommand::SetWeight { category, grams, size } => {
            if grams == 0 {
                bail!("Weight must be positive");
            }
            catalog.set_weight(ProductWeight::new(category.clone(), size.clone(), grams))?;
            match size {
                Some(size) => format!("Weight of {}/{} set to {} g", category.trim(), size, grams),
                None => format!("Weight of {} set to {} g", category.trim(), grams),
            }
        }
        CatalogCommand::AddBundle { category, prints, size, sku } => {
            let sku = match sku {
                Some(sku) => sku,
                None => {
                    let schema = catalog.category(&category)?.schema();
                    let prints: Vec<&str> = prints.iter().map(|p| p.trim()).collect();
                    generate_sku(schema, category.trim(), &prints, size.as_deref())
                }
            };
            let bundle = catalog.add_bundle(BundleSku::new(sku, category, prints, size))?;
            format!("Added bundle {}", bundle.sku)
        }
        CatalogCommand::RemoveBundle { sku } => {
            let removed = catalog.remove_bundle(&sku)?;
            format!("Removed bundle {}", removed.sku)
        }
    };
    Ok(Some(message))
}

fn checked_schema(code: i32) -> Result<SchemaType> {
    match SchemaType::from_code(code) {
        Some(schema) => Ok(schema),
        None => bail!("Unknown schema {} (expected 0-6)", code),
    }
}
