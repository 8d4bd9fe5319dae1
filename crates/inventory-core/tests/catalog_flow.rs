//! End-to-end flow over a catalog file: bundles, item master, purchase order.

use chrono::{NaiveDate, Utc};
use inventory_core::prelude::*;

const CATALOG: &str = r#"{
    "categories": [
        { "code": "DSS", "name": "Dress", "schema_type": 1 },
        { "code": "BOX", "name": "Gift Box", "schema_type": 3 },
        { "code": "OLD", "name": "Legacy", "schema_type": 17 }
    ],
    "prints": [
        { "code": "FLG", "name": "Flamingo" },
        { "code": "RED", "name": "Red Check" }
    ],
    "sizes": [
        { "category_code": "DSS", "print_code": "FLG", "size_name": "2-3Y" },
        { "category_code": "DSS", "print_code": "FLG", "size_name": "3-4Y" },
        { "category_code": "DSS", "print_code": "RED", "size_name": "3-4Y" },
        { "category_code": "BOX", "print_code": "FLG", "size_name": "Small" },
        { "category_code": "BOX", "print_code": "FLG", "size_name": "Large" },
        { "category_code": "BOX", "print_code": "RED", "size_name": "Large" },
        { "category_code": "OLD", "print_code": "FLG", "size_name": "Standard" }
    ],
    "weights": [
        { "category_code": "DSS", "weight_grams": 180 },
        { "category_code": "BOX", "size_name": "Large", "weight_grams": 400 }
    ],
    "bundles": [
        {
            "sku": "FLG_RED_BOX_Large",
            "category_code": "BOX",
            "print_codes": ["FLG", "RED"],
            "size_name": "Large"
        }
    ]
}"#;

fn load() -> Catalog {
    let catalog = Catalog::from_json_str(CATALOG).unwrap();
    catalog.validate().unwrap();
    catalog
}

#[test]
fn bundle_resolves_to_reference_sku() {
    let catalog = load();
    let resolution = resolve_bundle(&catalog, "BOX", &["FLG", "RED"]).unwrap();

    assert_eq!(resolution.schema, SchemaType::PrintsThenCategory);
    assert_eq!(resolution.common_sizes, vec!["Large"]);

    let chosen = resolution.select(Some("Large")).unwrap();
    assert_eq!(chosen.sku, "FLG_RED_BOX_Large");
    assert!(chosen.exists);
}

#[test]
fn unrecognized_schema_uses_fallback_template() {
    let catalog = load();
    let category = catalog.category("OLD").unwrap();
    assert!(!category.has_recognized_schema());

    let rows = generate_item_master(&catalog, &ItemMasterRequest::new("OLD")).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].sku, "FLG_OLD");
}

#[test]
fn item_master_covers_products_and_bundles() {
    let catalog = load();
    let rows = generate_item_master(&catalog, &ItemMasterRequest::new("BOX")).unwrap();
    let skus: Vec<&str> = rows.iter().map(|r| r.sku.as_str()).collect();

    assert_eq!(
        skus,
        vec!["FLG_BOX_Small", "FLG_BOX_Large", "RED_BOX_Large", "FLG_RED_BOX_Large"]
    );
    assert_eq!(rows[0].weight_grams, None);
    assert_eq!(rows[3].weight_grams, Some(800));
}

#[test]
fn purchase_order_against_catalog() {
    let catalog = load();
    let known = catalog.sku_index().unwrap();

    let mut po = PurchaseOrder::new("Acme", NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
    po.add_line("FLG_DSS_3-4Y", 12).unwrap();
    po.add_line("FLG_RED_BOX_Large", 4).unwrap();
    po.submit(&known, Utc::now()).unwrap();

    assert_eq!(po.status, PurchaseOrderStatus::Submitted);
    assert_eq!(po.total_units(), 16);

    let json = serde_json::to_string(&po).unwrap();
    let parsed: PurchaseOrder = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, po);
}

#[test]
fn catalog_edits_survive_serialization() {
    let mut catalog = load();
    catalog
        .add_size(SizeEntry::new("DSS", "RED", "2-3Y"))
        .unwrap();
    catalog
        .set_category_schema("DSS", SchemaType::CategoryThenPrint)
        .unwrap();

    let reloaded = Catalog::from_json_str(&catalog.to_json_string().unwrap()).unwrap();
    let resolution = resolve_bundle(&reloaded, "DSS", &["RED", "FLG"]).unwrap();
    assert_eq!(resolution.common_sizes, vec!["3-4Y", "2-3Y"]);
    assert_eq!(resolution.candidates[0].sku, "DSS_RED_3-4Y");
}
