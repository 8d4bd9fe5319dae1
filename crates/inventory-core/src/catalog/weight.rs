//! Shipping weights per category and size.

use serde::{Deserialize, Serialize};

/// Packed weight of a product.
///
/// A `size_name` of `None` is the category-wide weight used when no
/// size-specific entry exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductWeight {
    pub category_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_name: Option<String>,
    pub weight_grams: u32,
}

impl ProductWeight {
    pub fn new(
        category_code: impl Into<String>,
        size_name: Option<String>,
        weight_grams: u32,
    ) -> Self {
        Self {
            category_code: category_code.into(),
            size_name,
            weight_grams,
        }
    }

    /// Check if this entry is keyed on the given category and size.
    pub fn is_for(&self, category_code: &str, size_name: Option<&str>) -> bool {
        self.category_code == category_code && self.size_name.as_deref() == size_name
    }
}
