//! Reference table of precomputed bundle SKUs.

use crate::ids::BundleId;
use serde::{Deserialize, Serialize};

/// A bundle SKU known to the marketplace integration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BundleSku {
    /// Unique bundle identifier.
    #[serde(default)]
    pub id: BundleId,
    /// Full bundle SKU.
    pub sku: String,
    /// Category of the bundled products.
    pub category_code: String,
    /// Prints of the bundled products, in bundle order.
    #[serde(default)]
    pub print_codes: Vec<String>,
    /// Final size of the bundle (`None` when unsized).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_name: Option<String>,
}

impl BundleSku {
    /// Create a new bundle reference.
    pub fn new(
        sku: impl Into<String>,
        category_code: impl Into<String>,
        print_codes: Vec<String>,
        size_name: Option<String>,
    ) -> Self {
        Self {
            id: BundleId::generate(),
            sku: sku.into(),
            category_code: category_code.into(),
            print_codes,
            size_name,
        }
    }
}
