//! Export the marketplace item master.

use anyhow::{Context as _, Result};
use indicatif::ProgressBar;
use inventory_core::catalog::Catalog;
use inventory_core::item_master::{generate_item_master, ItemMasterRequest, ItemMasterRow};

use super::ItemMasterArgs;
use crate::config::ItemMasterConfig;
use crate::context::Context;
use crate::output::column_width;

/// Run the item-master command.
pub async fn run(args: ItemMasterArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog().await?;
    let settings = &ctx.config.item_master;

    let progress = ctx.output.progress(catalog.categories.len() as u64, "Generating item master");
    let rows = collect_rows(&catalog, &args, settings, &progress)?;
    progress.finish_and_clear();

    if let Some(output) = &args.output {
        let path = ctx.resolve_path(output);
        let json = serde_json::to_string_pretty(&rows)?;
        tokio::fs::write(&path, json)
            .await
            .with_context(|| format!("Failed to write item master: {}", path.display()))?;
        ctx.output.success(&format!(
            "Wrote {} rows to {}",
            rows.len(),
            path.display()
        ));
        return Ok(());
    }

    if ctx.output.is_json() {
        ctx.output.json(&rows);
        return Ok(());
    }

    print_table(&rows, ctx);
    ctx.output.info(&format!("{} rows", rows.len()));
    Ok(())
}

/// Rows for the requested category, or for every category in catalog order.
///
/// A print filter applies per category, so a listed print only yields rows
/// where it has sizes.
fn collect_rows(
    catalog: &Catalog,
    args: &ItemMasterArgs,
    settings: &ItemMasterConfig,
    progress: &ProgressBar,
) -> Result<Vec<ItemMasterRow>> {
    let categories: Vec<String> = match &args.category {
        Some(code) => vec![catalog.category(code)?.code.clone()],
        None => catalog.categories.iter().map(|c| c.code.clone()).collect(),
    };
    progress.set_length(categories.len() as u64);

    let mut rows = Vec::new();
    for code in categories {
        progress.set_message(code.clone());
        let request = ItemMasterRequest::new(code)
            .with_prints(args.prints.clone())
            .with_bundles(settings.include_bundles && !args.no_bundles)
            .with_default_weight(settings.default_weight_grams);
        rows.extend(generate_item_master(catalog, &request)?);
        progress.inc(1);
    }
    Ok(rows)
}

fn print_table(rows: &[ItemMasterRow], ctx: &Context) {
    let headers = ["Product Code", "Name", "Size", "Weight (gms)", "Type"];
    let weights: Vec<String> = rows
        .iter()
        .map(|r| r.weight_grams.map(|w| w.to_string()).unwrap_or_default())
        .collect();

    let widths = [
        column_width(headers[0], rows.iter().map(|r| r.sku.as_str())),
        column_width(headers[1], rows.iter().map(|r| r.name.as_str())),
        column_width(headers[2], rows.iter().map(|r| r.size.as_str())),
        column_width(headers[3], weights.iter().map(String::as_str)),
        column_width(headers[4], rows.iter().map(|r| r.kind.as_str())),
    ];

    ctx.output.table_row(&headers, &widths);
    for (row, weight) in rows.iter().zip(&weights) {
        ctx.output.table_row(
            &[
                row.sku.as_str(),
                row.name.as_str(),
                row.size.as_str(),
                weight.as_str(),
                row.kind.as_str(),
            ],
            &widths,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventory_core::catalog::{Category, Print, SizeEntry};
    use inventory_core::sku::SchemaType;

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog
            .add_category(Category::new("DSS", "Dress", SchemaType::PrintThenCategory))
            .unwrap();
        catalog
            .add_category(Category::new("TOP", "Top", SchemaType::CategoryThenPrint))
            .unwrap();
        catalog.add_print(Print::new("FLG", "Flamingo")).unwrap();
        catalog.add_print(Print::new("BLU", "Blue")).unwrap();
        catalog.add_size(SizeEntry::new("DSS", "FLG", "M")).unwrap();
        catalog.add_size(SizeEntry::new("TOP", "BLU", "S")).unwrap();
        catalog
    }

    fn args(category: Option<&str>, prints: &[&str]) -> ItemMasterArgs {
        ItemMasterArgs {
            category: category.map(str::to_string),
            prints: prints.iter().map(|p| p.to_string()).collect(),
            no_bundles: false,
            output: None,
        }
    }

    #[test]
    fn test_print_filter_across_categories() {
        let catalog = catalog();
        let rows = collect_rows(
            &catalog,
            &args(None, &["FLG"]),
            &ItemMasterConfig::default(),
            &ProgressBar::hidden(),
        )
        .unwrap();

        let skus: Vec<&str> = rows.iter().map(|r| r.sku.as_str()).collect();
        assert_eq!(skus, vec!["FLG_DSS_M"]);

        let index = catalog.sku_index().unwrap();
        assert!(rows.iter().all(|r| index.contains(&r.sku)));
    }

    #[test]
    fn test_single_category() {
        let rows = collect_rows(
            &catalog(),
            &args(Some("TOP"), &[]),
            &ItemMasterConfig::default(),
            &ProgressBar::hidden(),
        )
        .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].sku, "TOP_BLU_S");
    }
}
