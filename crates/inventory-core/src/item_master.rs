//! Item master generation for marketplace exports.
//!
//! The item master lists every sellable SKU of a category with the columns
//! the marketplace import expects.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{normalize_code, Catalog, Category, Print};
use crate::error::Result;
use crate::sku::{generate_sku, STANDARD_SIZE};

/// Kind of item in the export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ItemKind {
    /// Single product.
    #[default]
    Simple,
    /// Bundle of several products.
    Bundle,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Simple => "SIMPLE",
            ItemKind::Bundle => "BUNDLE",
        }
    }
}

/// One row of the item master.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemMasterRow {
    #[serde(rename = "Product Code")]
    pub sku: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Category Code")]
    pub category_code: String,
    #[serde(rename = "Category Name")]
    pub category_name: String,
    #[serde(rename = "Size")]
    pub size: String,
    #[serde(rename = "Prints")]
    pub prints: String,
    #[serde(rename = "Weight (gms)")]
    pub weight_grams: Option<u32>,
    #[serde(rename = "Type")]
    pub kind: ItemKind,
}

/// What to include in an item master.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemMasterRequest {
    pub category_code: String,
    /// Prints to export. Empty means every print sized in the category.
    pub print_codes: Vec<String>,
    pub include_bundles: bool,
    /// Weight used when the catalog has none for a size.
    pub default_weight_grams: Option<u32>,
}

impl ItemMasterRequest {
    /// Request every print and bundle of a category.
    pub fn new(category_code: impl Into<String>) -> Self {
        Self {
            category_code: category_code.into(),
            print_codes: Vec::new(),
            include_bundles: true,
            default_weight_grams: None,
        }
    }

    pub fn with_prints(mut self, print_codes: Vec<String>) -> Self {
        self.print_codes = print_codes;
        self
    }

    pub fn with_bundles(mut self, include: bool) -> Self {
        self.include_bundles = include;
        self
    }

    pub fn with_default_weight(mut self, grams: Option<u32>) -> Self {
        self.default_weight_grams = grams;
        self
    }
}

/// Generate item master rows for one category.
///
/// Products come first, in print then size order, followed by bundles in
/// reference-table order. A SKU appears at most once. Listed prints without
/// a size entry in the category produce no rows.
pub fn generate_item_master(
    catalog: &Catalog,
    request: &ItemMasterRequest,
) -> Result<Vec<ItemMasterRow>> {
    let category = catalog.category(&request.category_code)?;

    let filter: Vec<String> = request
        .print_codes
        .iter()
        .map(|p| normalize_code(p))
        .collect();
    let prints: Vec<&Print> = if filter.is_empty() {
        catalog.prints_in_category(&category.code)
    } else {
        filter
            .iter()
            .map(|code| catalog.print(code))
            .collect::<Result<_>>()?
    };

    let mut seen = HashSet::new();
    let mut rows = Vec::new();

    for print in prints {
        let sizes = catalog.sizes_for(&category.code, &print.code);
        if sizes.is_empty() {
            debug!(category = %category.code, print = %print.code, "print not offered, skipped");
            continue;
        }

        for entry in sizes {
            let size = Some(entry.size_name.as_str());
            let sku = generate_sku(category.schema(), &category.code, &[&print.code], size);
            if !seen.insert(sku.clone()) {
                debug!(%sku, "duplicate SKU skipped");
                continue;
            }
            rows.push(ItemMasterRow {
                name: item_name(&[print.name.as_str()], category, size),
                category_code: category.code.clone(),
                category_name: category.name.clone(),
                size: entry.size_name.clone(),
                prints: print.code.clone(),
                weight_grams: catalog
                    .weight_for(&category.code, size)
                    .or(request.default_weight_grams),
                kind: ItemKind::Simple,
                sku,
            });
        }
    }

    if request.include_bundles {
        for bundle in catalog.bundles_in_category(&category.code) {
            if !filter.is_empty() && !bundle.print_codes.iter().all(|p| filter.contains(p)) {
                continue;
            }
            if !seen.insert(bundle.sku.clone()) {
                debug!(sku = %bundle.sku, "duplicate SKU skipped");
                continue;
            }

            let names = bundle
                .print_codes
                .iter()
                .map(|code| catalog.print(code).map(|p| p.name.as_str()))
                .collect::<Result<Vec<_>>>()?;
            let size = bundle.size_name.as_deref();
            let pieces = bundle.print_codes.len().max(1) as u32;

            rows.push(ItemMasterRow {
                sku: bundle.sku.clone(),
                name: item_name(&names, category, size),
                category_code: category.code.clone(),
                category_name: category.name.clone(),
                size: size.unwrap_or(STANDARD_SIZE).to_string(),
                prints: bundle.print_codes.join("+"),
                weight_grams: catalog
                    .weight_for(&category.code, size)
                    .or(request.default_weight_grams)
                    .map(|grams| grams.saturating_mul(pieces)),
                kind: ItemKind::Bundle,
            });
        }
    }

    debug!(category = %category.code, rows = rows.len(), "item master generated");
    Ok(rows)
}

fn item_name(print_names: &[&str], category: &Category, size: Option<&str>) -> String {
    let base = format!("{} {}", print_names.join(" + "), category.name);
    match size {
        Some(size) if size != STANDARD_SIZE => format!("{base} - {size}"),
        _ => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BundleSku, ProductWeight, SizeEntry};
    use crate::sku::SchemaType;

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog
            .add_category(Category::new("DSS", "Dress", SchemaType::PrintThenCategory))
            .unwrap();
        catalog.add_print(Print::new("FLG", "Flamingo")).unwrap();
        catalog.add_print(Print::new("RED", "Red Check")).unwrap();
        catalog.add_print(Print::new("BLU", "Blue")).unwrap();
        catalog.add_size(SizeEntry::new("DSS", "FLG", "2-3Y")).unwrap();
        catalog.add_size(SizeEntry::new("DSS", "FLG", "3-4Y")).unwrap();
        catalog.add_size(SizeEntry::new("DSS", "RED", "Standard")).unwrap();
        catalog
            .set_weight(ProductWeight::new("DSS", None, 150))
            .unwrap();
        catalog
            .set_weight(ProductWeight::new("DSS", Some("3-4Y".into()), 180))
            .unwrap();
        catalog
            .add_bundle(BundleSku::new(
                "FLG_RED_DSS_3-4Y",
                "DSS",
                vec!["FLG".into(), "RED".into()],
                Some("3-4Y".into()),
            ))
            .unwrap();
        catalog
    }

    #[test]
    fn test_rows_for_category() {
        let rows = generate_item_master(&catalog(), &ItemMasterRequest::new("DSS")).unwrap();
        let skus: Vec<&str> = rows.iter().map(|r| r.sku.as_str()).collect();
        assert_eq!(
            skus,
            vec!["FLG_DSS_2-3Y", "FLG_DSS_3-4Y", "RED_DSS", "FLG_RED_DSS_3-4Y"]
        );

        assert_eq!(rows[0].name, "Flamingo Dress - 2-3Y");
        assert_eq!(rows[0].weight_grams, Some(150));
        assert_eq!(rows[1].weight_grams, Some(180));
        assert_eq!(rows[2].size, "Standard");
        assert_eq!(rows[2].name, "Red Check Dress");
        assert_eq!(rows[3].kind, ItemKind::Bundle);
        assert_eq!(rows[3].name, "Flamingo + Red Check Dress - 3-4Y");
        assert_eq!(rows[3].prints, "FLG+RED");
        assert_eq!(rows[3].weight_grams, Some(360));
    }

    #[test]
    fn test_print_filter() {
        let request = ItemMasterRequest::new("DSS").with_prints(vec!["FLG".into()]);
        let rows = generate_item_master(&catalog(), &request).unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.kind == ItemKind::Simple));
    }

    #[test]
    fn test_listed_print_without_sizes_is_skipped() {
        let request = ItemMasterRequest::new("DSS")
            .with_prints(vec!["BLU".into()])
            .with_bundles(false);
        let rows = generate_item_master(&catalog(), &request).unwrap();
        assert!(rows.is_empty());

        let request =
            ItemMasterRequest::new("DSS").with_prints(vec!["BLU".into(), "FLG".into()]);
        let rows = generate_item_master(&catalog(), &request).unwrap();
        let skus: Vec<&str> = rows.iter().map(|r| r.sku.as_str()).collect();
        assert_eq!(skus, vec!["FLG_DSS_2-3Y", "FLG_DSS_3-4Y"]);
    }

    #[test]
    fn test_filtered_rows_are_in_sku_index() {
        let catalog = catalog();
        let index = catalog.sku_index().unwrap();
        let filters: [&[&str]; 4] = [&[], &["BLU"], &["RED", "BLU"], &["FLG", "RED"]];

        for filter in filters {
            let request = ItemMasterRequest::new("DSS")
                .with_prints(filter.iter().map(|p| p.to_string()).collect());
            for row in generate_item_master(&catalog, &request).unwrap() {
                assert!(index.contains(&row.sku), "{} missing from index", row.sku);
            }
        }
    }

    #[test]
    fn test_without_bundles() {
        let request = ItemMasterRequest::new("DSS").with_bundles(false);
        let rows = generate_item_master(&catalog(), &request).unwrap();
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_unsized_schema_deduplicates() {
        let mut catalog = catalog();
        catalog
            .set_category_schema("DSS", SchemaType::CategorySinglePrint)
            .unwrap();
        let request = ItemMasterRequest::new("DSS").with_bundles(false);
        let rows = generate_item_master(&catalog, &request).unwrap();
        let skus: Vec<&str> = rows.iter().map(|r| r.sku.as_str()).collect();
        assert_eq!(skus, vec!["DSS_FLG", "DSS_RED"]);
    }

    #[test]
    fn test_default_weight() {
        let mut catalog = catalog();
        catalog.weights.clear();
        let request = ItemMasterRequest::new("DSS").with_default_weight(Some(99));
        let rows = generate_item_master(&catalog, &request).unwrap();
        assert!(rows.iter().take(3).all(|r| r.weight_grams == Some(99)));
    }

    #[test]
    fn test_export_column_names() {
        let rows = generate_item_master(&catalog(), &ItemMasterRequest::new("DSS")).unwrap();
        let json = serde_json::to_value(&rows[0]).unwrap();
        assert_eq!(json["Product Code"], "FLG_DSS_2-3Y");
        assert_eq!(json["Weight (gms)"], 150);
        assert_eq!(json["Type"], "SIMPLE");
    }
}
