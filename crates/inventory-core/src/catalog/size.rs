//! Size availability for a category/print pair.

use crate::ids::SizeId;
use crate::sizes::NamedSize;
use crate::sku::STANDARD_SIZE;
use serde::{Deserialize, Serialize};

/// One size offered for a (category, print) pairing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SizeEntry {
    /// Unique size identifier.
    #[serde(default)]
    pub id: SizeId,
    /// Category the size belongs to.
    pub category_code: String,
    /// Print the size belongs to.
    pub print_code: String,
    /// Size name (case-sensitive).
    pub size_name: String,
}

impl SizeEntry {
    /// Create a new size entry.
    pub fn new(
        category_code: impl Into<String>,
        print_code: impl Into<String>,
        size_name: impl Into<String>,
    ) -> Self {
        Self {
            id: SizeId::generate(),
            category_code: category_code.into(),
            print_code: print_code.into(),
            size_name: size_name.into(),
        }
    }

    /// Check if this is the "no size" sentinel.
    pub fn is_standard(&self) -> bool {
        self.size_name == STANDARD_SIZE
    }

    /// Check if the entry belongs to the given pair.
    pub fn matches(&self, category_code: &str, print_code: &str) -> bool {
        self.category_code == category_code && self.print_code == print_code
    }
}

impl NamedSize for SizeEntry {
    fn size_name(&self) -> &str {
        &self.size_name
    }
}
