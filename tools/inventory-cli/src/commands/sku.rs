//! Generate a single SKU.

use anyhow::Result;
use inventory_core::catalog::normalize_code;
use inventory_core::sku::{generate_sku, SchemaType};

use super::SkuArgs;
use crate::context::Context;

/// Run the sku command.
pub async fn run(args: SkuArgs, ctx: &Context) -> Result<()> {
    let category = normalize_code(&args.category);
    let prints: Vec<String> = args.prints.iter().map(|p| normalize_code(p)).collect();

    let schema = match args.schema {
        Some(code) => {
            if SchemaType::from_code(code).is_none() {
                ctx.output.warn(&format!(
                    "Unrecognized schema {}, using schema {}",
                    code,
                    SchemaType::default().code()
                ));
            }
            SchemaType::from(code)
        }
        None => {
            let catalog = ctx.load_catalog().await?;
            catalog.category(&category)?.schema()
        }
    };

    let sku = generate_sku(schema, &category, &prints, args.size.as_deref());

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "sku": sku,
            "schema": schema.code(),
            "category": category,
            "prints": prints,
            "size": args.size,
        }));
    } else {
        ctx.output.debug(&format!("Schema {}", schema));
        println!("{}", sku);
    }

    Ok(())
}
