//! Bundle resolution.
//!
//! A bundle combines several products of one category, each with its own
//! print. Its final size must be offered by every product, and its SKU is
//! checked against the reference table of known bundle SKUs.

use serde::Serialize;
use tracing::debug;

use crate::catalog::{normalize_code, Catalog, SizeEntry};
use crate::error::{InventoryError, Result};
use crate::sizes::intersect_sizes;
use crate::sku::{generate_sku, SchemaType};

/// One possible final size for a bundle.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BundleCandidate {
    /// Final size (`None` when none of the products is sized).
    pub size: Option<String>,
    /// Bundle SKU for this size.
    pub sku: String,
    /// Whether the SKU is in the bundle reference table.
    pub exists: bool,
}

/// Result of resolving a bundle against the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct BundleResolution {
    pub category_code: String,
    pub schema: SchemaType,
    pub print_codes: Vec<String>,
    /// Sizes shared by every sized product, in the first product's order.
    pub common_sizes: Vec<String>,
    pub candidates: Vec<BundleCandidate>,
}

impl BundleResolution {
    /// Check if at least one final size is possible.
    pub fn is_compatible(&self) -> bool {
        !self.candidates.is_empty()
    }

    /// Candidates whose SKU is already in the reference table.
    pub fn existing(&self) -> impl Iterator<Item = &BundleCandidate> {
        self.candidates.iter().filter(|c| c.exists)
    }

    /// Pick the final size of the bundle.
    pub fn select(&self, size: Option<&str>) -> Result<&BundleCandidate> {
        self.candidates
            .iter()
            .find(|c| c.size.as_deref() == size)
            .ok_or_else(|| InventoryError::SizeNotCommon {
                size: size.unwrap_or("<none>").to_string(),
                available: self.common_sizes.join(", "),
            })
    }
}

/// Resolve the common sizes and candidate SKUs for a bundle.
///
/// Prints without sizes in the category place no constraint on the final
/// size. When no print is sized at all, a single unsized candidate is
/// returned.
pub fn resolve_bundle<S: AsRef<str>>(
    catalog: &Catalog,
    category_code: &str,
    print_codes: &[S],
) -> Result<BundleResolution> {
    let category = catalog.category(category_code)?;
    let schema = category.schema();

    let print_codes: Vec<String> = print_codes
        .iter()
        .map(|p| normalize_code(p.as_ref()))
        .collect();
    if print_codes.is_empty() {
        return Err(InventoryError::Validation("bundle has no prints".into()));
    }
    for code in &print_codes {
        catalog.print(code)?;
    }

    let size_lists: Vec<Vec<&SizeEntry>> = print_codes
        .iter()
        .map(|print| catalog.sizes_for(&category.code, print))
        .collect();

    let candidate = |size: Option<&str>| {
        let sku = generate_sku(schema, &category.code, &print_codes, size);
        BundleCandidate {
            size: size.map(str::to_string),
            exists: catalog.bundle_exists(&sku),
            sku,
        }
    };

    let (common_sizes, candidates) = if size_lists.iter().all(Vec::is_empty) {
        (Vec::new(), vec![candidate(None)])
    } else {
        let common: Vec<String> = intersect_sizes(&size_lists)
            .into_iter()
            .map(|entry| entry.size_name.clone())
            .collect();
        let candidates: Vec<BundleCandidate> = common
            .iter()
            .map(|size| candidate(Some(size.as_str())))
            .collect();
        (common, candidates)
    };

    debug!(
        category = %category.code,
        prints = %print_codes.join(","),
        common = common_sizes.len(),
        existing = candidates.iter().filter(|c| c.exists).count(),
        "bundle resolved"
    );

    Ok(BundleResolution {
        category_code: category.code.clone(),
        schema,
        print_codes,
        common_sizes,
        candidates,
    })
}
