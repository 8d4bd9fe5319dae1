//! In-memory master data store.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{normalize_code, BundleSku, Category, Print, ProductWeight, SizeEntry};
use crate::error::{InventoryError, Result};
use crate::item_master::{generate_item_master, ItemMasterRequest};
use crate::sku::SchemaType;

/// Master data for SKU generation and exports.
///
/// Size entries keep insertion order, which is the order sizes are offered
/// in for a (category, print) pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub prints: Vec<Print>,
    #[serde(default)]
    pub sizes: Vec<SizeEntry>,
    #[serde(default)]
    pub weights: Vec<ProductWeight>,
    #[serde(default)]
    pub bundles: Vec<BundleSku>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog from JSON.
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Serialize the catalog as pretty JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check referential integrity.
    ///
    /// Unrecognized schema codes are logged but accepted; SKUs for those
    /// categories use the default template.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for category in &self.categories {
            if !seen.insert(category.code.as_str()) {
                return Err(InventoryError::DuplicateCategory(category.code.clone()));
            }
            if !category.has_recognized_schema() {
                warn!(
                    category = %category.code,
                    schema_code = category.schema_code,
                    fallback = SchemaType::default().code(),
                    "unrecognized schema code, using fallback template"
                );
            }
        }

        let mut seen = HashSet::new();
        for print in &self.prints {
            if !seen.insert(print.code.as_str()) {
                return Err(InventoryError::DuplicatePrint(print.code.clone()));
            }
        }

        let mut seen = HashSet::new();
        for size in &self.sizes {
            self.category(&size.category_code)?;
            self.print(&size.print_code)?;
            let key = (
                size.category_code.as_str(),
                size.print_code.as_str(),
                size.size_name.as_str(),
            );
            if !seen.insert(key) {
                return Err(InventoryError::DuplicateSize {
                    category_code: size.category_code.clone(),
                    print_code: size.print_code.clone(),
                    size: size.size_name.clone(),
                });
            }
        }

        for weight in &self.weights {
            self.category(&weight.category_code)?;
        }

        let mut seen = HashSet::new();
        for bundle in &self.bundles {
            self.category(&bundle.category_code)?;
            for print_code in &bundle.print_codes {
                self.print(print_code)?;
            }
            if !seen.insert(bundle.sku.as_str()) {
                return Err(InventoryError::DuplicateBundle(bundle.sku.clone()));
            }
        }

        debug!(
            categories = self.categories.len(),
            prints = self.prints.len(),
            sizes = self.sizes.len(),
            bundles = self.bundles.len(),
            "catalog validated"
        );
        Ok(())
    }

    /// Find a category by code.
    pub fn category(&self, code: &str) -> Result<&Category> {
        let code = code.trim();
        self.categories
            .iter()
            .find(|c| c.code == code)
            .ok_or_else(|| InventoryError::CategoryNotFound(code.to_string()))
    }

    /// Find a print by code.
    pub fn print(&self, code: &str) -> Result<&Print> {
        let code = code.trim();
        self.prints
            .iter()
            .find(|p| p.code == code)
            .ok_or_else(|| InventoryError::PrintNotFound(code.to_string()))
    }

    /// Sizes offered for a (category, print) pair, in insertion order.
    pub fn sizes_for(&self, category_code: &str, print_code: &str) -> Vec<&SizeEntry> {
        let (category_code, print_code) = (category_code.trim(), print_code.trim());
        self.sizes
            .iter()
            .filter(|s| s.matches(category_code, print_code))
            .collect()
    }

    /// Prints that have at least one size in the category, in print order.
    pub fn prints_in_category(&self, category_code: &str) -> Vec<&Print> {
        let category_code = category_code.trim();
        self.prints
            .iter()
            .filter(|p| {
                self.sizes
                    .iter()
                    .any(|s| s.matches(category_code, &p.code))
            })
            .collect()
    }

    /// Weight for a category and size, falling back to the category-wide entry.
    pub fn weight_for(&self, category_code: &str, size_name: Option<&str>) -> Option<u32> {
        let category_code = category_code.trim();
        let exact = size_name.and_then(|size| {
            self.weights
                .iter()
                .find(|w| w.is_for(category_code, Some(size)))
        });
        exact
            .or_else(|| self.weights.iter().find(|w| w.is_for(category_code, None)))
            .map(|w| w.weight_grams)
    }

    /// Check if a SKU is in the bundle reference table.
    pub fn bundle_exists(&self, sku: &str) -> bool {
        self.bundles.iter().any(|b| b.sku == sku)
    }

    /// Bundle references for a category.
    pub fn bundles_in_category(&self, category_code: &str) -> Vec<&BundleSku> {
        let category_code = category_code.trim();
        self.bundles
            .iter()
            .filter(|b| b.category_code == category_code)
            .collect()
    }

    /// Add a category.
    pub fn add_category(&mut self, mut category: Category) -> Result<&Category> {
        category.code = normalize_code(&category.code);
        if category.code.is_empty() {
            return Err(InventoryError::Validation("category code is empty".into()));
        }
        if self.category(&category.code).is_ok() {
            return Err(InventoryError::DuplicateCategory(category.code));
        }
        self.categories.push(category);
        Ok(&self.categories[self.categories.len() - 1])
    }

    /// Change the SKU schema of a category.
    pub fn set_category_schema(&mut self, code: &str, schema: SchemaType) -> Result<()> {
        let code = code.trim();
        let category = self
            .categories
            .iter_mut()
            .find(|c| c.code == code)
            .ok_or_else(|| InventoryError::CategoryNotFound(code.to_string()))?;
        category.schema_code = schema.code();
        Ok(())
    }

    /// Remove a category together with its sizes, weights and bundle references.
    pub fn remove_category(&mut self, code: &str) -> Result<Category> {
        let code = code.trim();
        let idx = self
            .categories
            .iter()
            .position(|c| c.code == code)
            .ok_or_else(|| InventoryError::CategoryNotFound(code.to_string()))?;

        self.sizes.retain(|s| s.category_code != code);
        self.weights.retain(|w| w.category_code != code);
        self.bundles.retain(|b| b.category_code != code);
        Ok(self.categories.remove(idx))
    }

    /// Add a print.
    pub fn add_print(&mut self, mut print: Print) -> Result<&Print> {
        print.code = normalize_code(&print.code);
        if print.code.is_empty() {
            return Err(InventoryError::Validation("print code is empty".into()));
        }
        if self.print(&print.code).is_ok() {
            return Err(InventoryError::DuplicatePrint(print.code));
        }
        self.prints.push(print);
        Ok(&self.prints[self.prints.len() - 1])
    }

    /// Remove a print together with its sizes.
    ///
    /// Fails while a bundle reference still uses the print.
    pub fn remove_print(&mut self, code: &str) -> Result<Print> {
        let code = code.trim();
        let idx = self
            .prints
            .iter()
            .position(|p| p.code == code)
            .ok_or_else(|| InventoryError::PrintNotFound(code.to_string()))?;

        if let Some(bundle) = self
            .bundles
            .iter()
            .find(|b| b.print_codes.iter().any(|p| p == code))
        {
            return Err(InventoryError::Validation(format!(
                "print {} is used by bundle {}",
                code, bundle.sku
            )));
        }

        self.sizes.retain(|s| s.print_code != code);
        Ok(self.prints.remove(idx))
    }

    /// Offer a size for a (category, print) pair.
    pub fn add_size(&mut self, mut entry: SizeEntry) -> Result<&SizeEntry> {
        entry.category_code = normalize_code(&entry.category_code);
        entry.print_code = normalize_code(&entry.print_code);
        entry.size_name = entry.size_name.trim().to_string();
        if entry.size_name.is_empty() {
            return Err(InventoryError::Validation("size name is empty".into()));
        }

        self.category(&entry.category_code)?;
        self.print(&entry.print_code)?;

        let exists = self
            .sizes_for(&entry.category_code, &entry.print_code)
            .iter()
            .any(|s| s.size_name == entry.size_name);
        if exists {
            return Err(InventoryError::DuplicateSize {
                category_code: entry.category_code,
                print_code: entry.print_code,
                size: entry.size_name,
            });
        }

        self.sizes.push(entry);
        Ok(&self.sizes[self.sizes.len() - 1])
    }

    /// Withdraw a size from a (category, print) pair.
    pub fn remove_size(
        &mut self,
        category_code: &str,
        print_code: &str,
        size_name: &str,
    ) -> Result<SizeEntry> {
        let (category_code, print_code) = (category_code.trim(), print_code.trim());
        let size_name = size_name.trim();
        let idx = self
            .sizes
            .iter()
            .position(|s| s.matches(category_code, print_code) && s.size_name == size_name)
            .ok_or_else(|| InventoryError::SizeNotFound {
                category_code: category_code.to_string(),
                print_code: print_code.to_string(),
                size: size_name.to_string(),
            })?;
        Ok(self.sizes.remove(idx))
    }

    /// Insert or replace the weight for a category and optional size.
    pub fn set_weight(&mut self, weight: ProductWeight) -> Result<()> {
        let mut weight = weight;
        weight.category_code = normalize_code(&weight.category_code);
        self.category(&weight.category_code)?;

        match self
            .weights
            .iter_mut()
            .find(|w| w.is_for(&weight.category_code, weight.size_name.as_deref()))
        {
            Some(existing) => existing.weight_grams = weight.weight_grams,
            None => self.weights.push(weight),
        }
        Ok(())
    }

    /// Add a bundle SKU to the reference table.
    pub fn add_bundle(&mut self, mut bundle: BundleSku) -> Result<&BundleSku> {
        bundle.sku = bundle.sku.trim().to_string();
        bundle.category_code = normalize_code(&bundle.category_code);
        bundle.print_codes = bundle.print_codes.iter().map(|p| normalize_code(p)).collect();

        self.category(&bundle.category_code)?;
        for print_code in &bundle.print_codes {
            self.print(print_code)?;
        }
        if self.bundle_exists(&bundle.sku) {
            return Err(InventoryError::DuplicateBundle(bundle.sku));
        }

        self.bundles.push(bundle);
        Ok(&self.bundles[self.bundles.len() - 1])
    }

    /// Remove a bundle SKU from the reference table.
    pub fn remove_bundle(&mut self, sku: &str) -> Result<BundleSku> {
        let sku = sku.trim();
        let idx = self
            .bundles
            .iter()
            .position(|b| b.sku == sku)
            .ok_or_else(|| InventoryError::BundleNotFound(sku.to_string()))?;
        Ok(self.bundles.remove(idx))
    }

    /// Every SKU the catalog produces: item-master SKUs and bundle references.
    pub fn sku_index(&self) -> Result<HashSet<String>> {
        let mut skus = HashSet::new();
        for category in &self.categories {
            let request = ItemMasterRequest::new(category.code.clone());
            for row in generate_item_master(self, &request)? {
                skus.insert(row.sku);
            }
        }
        skus.extend(self.bundles.iter().map(|b| b.sku.clone()));
        Ok(skus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        let mut catalog = Catalog::new();
        catalog
            .add_category(Category::new("DSS", "Dress", SchemaType::PrintThenCategory))
            .unwrap();
        catalog.add_print(Print::new("FLG", "Flamingo")).unwrap();
        catalog.add_print(Print::new("RED", "Red Check")).unwrap();
        catalog.add_size(SizeEntry::new("DSS", "FLG", "S")).unwrap();
        catalog.add_size(SizeEntry::new("DSS", "FLG", "M")).unwrap();
        catalog.add_size(SizeEntry::new("DSS", "RED", "M")).unwrap();
        catalog
    }

    #[test]
    fn test_lookup_trims_codes() {
        let catalog = sample();
        assert_eq!(catalog.category("  DSS ").unwrap().name, "Dress");
        assert_eq!(catalog.print("FLG\t").unwrap().name, "Flamingo");
        assert!(matches!(
            catalog.category("XXX"),
            Err(InventoryError::CategoryNotFound(_))
        ));
    }

    #[test]
    fn test_sizes_keep_insertion_order() {
        let catalog = sample();
        let names: Vec<&str> = catalog
            .sizes_for("DSS", "FLG")
            .iter()
            .map(|s| s.size_name.as_str())
            .collect();
        assert_eq!(names, vec!["S", "M"]);
    }

    #[test]
    fn test_duplicates_rejected() {
        let mut catalog = sample();
        assert!(matches!(
            catalog.add_category(Category::new(" DSS", "Again", SchemaType::default())),
            Err(InventoryError::DuplicateCategory(_))
        ));
        assert!(matches!(
            catalog.add_print(Print::new("FLG", "Again")),
            Err(InventoryError::DuplicatePrint(_))
        ));
        assert!(matches!(
            catalog.add_size(SizeEntry::new("DSS", "FLG", "M")),
            Err(InventoryError::DuplicateSize { .. })
        ));
    }

    #[test]
    fn test_add_size_requires_known_pair() {
        let mut catalog = sample();
        assert!(matches!(
            catalog.add_size(SizeEntry::new("BOX", "FLG", "M")),
            Err(InventoryError::CategoryNotFound(_))
        ));
        assert!(matches!(
            catalog.add_size(SizeEntry::new("DSS", "BLU", "M")),
            Err(InventoryError::PrintNotFound(_))
        ));
    }

    #[test]
    fn test_remove_size_trims_name() {
        let mut catalog = sample();
        catalog.add_size(SizeEntry::new("DSS", "RED", " L ")).unwrap();

        let removed = catalog.remove_size("DSS", "RED", " L").unwrap();
        assert_eq!(removed.size_name, "L");
        assert!(matches!(
            catalog.remove_size("DSS", "RED", "L"),
            Err(InventoryError::SizeNotFound { .. })
        ));
    }

    #[test]
    fn test_weight_fallback() {
        let mut catalog = sample();
        catalog
            .set_weight(ProductWeight::new("DSS", None, 200))
            .unwrap();
        catalog
            .set_weight(ProductWeight::new("DSS", Some("M".into()), 250))
            .unwrap();

        assert_eq!(catalog.weight_for("DSS", Some("M")), Some(250));
        assert_eq!(catalog.weight_for("DSS", Some("S")), Some(200));
        assert_eq!(catalog.weight_for("DSS", None), Some(200));
        assert_eq!(catalog.weight_for("BOX", None), None);

        catalog
            .set_weight(ProductWeight::new("DSS", Some("M".into()), 260))
            .unwrap();
        assert_eq!(catalog.weight_for("DSS", Some("M")), Some(260));
        assert_eq!(catalog.weights.len(), 2);
    }

    #[test]
    fn test_remove_category_cascades() {
        let mut catalog = sample();
        catalog
            .add_bundle(BundleSku::new(
                "FLG_RED_DSS_M",
                "DSS",
                vec!["FLG".into(), "RED".into()],
                Some("M".into()),
            ))
            .unwrap();

        catalog.remove_category("DSS").unwrap();
        assert!(catalog.sizes.is_empty());
        assert!(catalog.bundles.is_empty());
        assert_eq!(catalog.prints.len(), 2);
    }

    #[test]
    fn test_remove_print_blocked_by_bundle() {
        let mut catalog = sample();
        catalog
            .add_bundle(BundleSku::new("B1", "DSS", vec!["RED".into()], None))
            .unwrap();

        assert!(matches!(
            catalog.remove_print("RED"),
            Err(InventoryError::Validation(_))
        ));
        catalog.remove_bundle("B1").unwrap();
        catalog.remove_print("RED").unwrap();
        assert!(catalog.sizes_for("DSS", "RED").is_empty());
    }

    #[test]
    fn test_validate_detects_dangling_size() {
        let mut catalog = sample();
        catalog.sizes.push(SizeEntry::new("DSS", "ZZZ", "M"));
        assert!(matches!(
            catalog.validate(),
            Err(InventoryError::PrintNotFound(_))
        ));
    }

    #[test]
    fn test_validate_accepts_unrecognized_schema() {
        let mut catalog = sample();
        catalog.categories[0].schema_code = 42;
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_sku_index() {
        let mut catalog = sample();
        catalog
            .add_bundle(BundleSku::new("FLG_RED_DSS_M", "DSS", vec![], None))
            .unwrap();

        let skus = catalog.sku_index().unwrap();
        assert!(skus.contains("FLG_DSS_S"));
        assert!(skus.contains("FLG_DSS_M"));
        assert!(skus.contains("RED_DSS_M"));
        assert!(skus.contains("FLG_RED_DSS_M"));
        assert!(!skus.contains("RED_DSS_S"));
    }

    #[test]
    fn test_json_round_trip_preserves_schema_code() {
        let mut catalog = sample();
        catalog.categories[0].schema_code = 9;
        let json = catalog.to_json_string().unwrap();
        let parsed = Catalog::from_json_str(&json).unwrap();
        assert_eq!(parsed.categories[0].schema_code, 9);
        assert_eq!(parsed, catalog);
    }
}
