//! Resolve a bundle against the catalog.

use anyhow::Result;
use inventory_core::bundle::resolve_bundle;

use super::BundleArgs;
use crate::context::Context;

/// Run the bundle command.
pub async fn run(args: BundleArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog().await?;
    let resolution = resolve_bundle(&catalog, &args.category, &args.prints)?;

    if let Some(size) = args.size.as_deref() {
        let chosen = resolution.select(Some(size))?;
        if ctx.output.is_json() {
            ctx.output.json(chosen);
            return Ok(());
        }
        println!("{}", chosen.sku);
        if !chosen.exists {
            ctx.output.warn("Bundle SKU is not in the reference table");
        }
        return Ok(());
    }

    if ctx.output.is_json() {
        ctx.output.json(&resolution);
        return Ok(());
    }

    ctx.output.header(&format!(
        "Bundle {} ({})",
        resolution.print_codes.join(" + "),
        resolution.category_code
    ));
    ctx.output.kv("Schema", &resolution.schema.to_string());

    if !resolution.is_compatible() {
        ctx.output.warn("The prints share no size; no bundle is possible");
        return Ok(());
    }

    if resolution.common_sizes.is_empty() {
        ctx.output.kv("Common sizes", "none (unsized)");
    } else {
        ctx.output.kv("Common sizes", &resolution.common_sizes.join(", "));
    }

    ctx.output.info("");
    for candidate in &resolution.candidates {
        let marker = if candidate.exists { "exists" } else { "new" };
        let size = candidate.size.as_deref().unwrap_or("-");
        ctx.output.list_item(&format!("{:<10} {} ({})", size, candidate.sku, marker));
    }

    Ok(())
}
