//! Category types.

use crate::ids::CategoryId;
use crate::sku::SchemaType;
use serde::{Deserialize, Serialize};

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique category identifier.
    #[serde(default)]
    pub id: CategoryId,
    /// Short code used in SKUs (e.g., "DSS").
    pub code: String,
    /// Display name.
    pub name: String,
    /// Raw SKU schema code as stored. Kept verbatim so that unrecognized
    /// codes stay visible to validation.
    #[serde(rename = "schema_type", default = "default_schema_code")]
    pub schema_code: i32,
}

fn default_schema_code() -> i32 {
    SchemaType::default().code()
}

impl Category {
    /// Create a new category.
    pub fn new(code: impl Into<String>, name: impl Into<String>, schema: SchemaType) -> Self {
        Self {
            id: CategoryId::generate(),
            code: code.into(),
            name: name.into(),
            schema_code: schema.code(),
        }
    }

    /// SKU schema, falling back to the default for unrecognized codes.
    pub fn schema(&self) -> SchemaType {
        SchemaType::from(self.schema_code)
    }

    /// Check if the stored schema code is one of the known templates.
    pub fn has_recognized_schema(&self) -> bool {
        SchemaType::from_code(self.schema_code).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category() {
        let cat = Category::new("DSS", "Dress", SchemaType::CategoryThenPrint);
        assert_eq!(cat.code, "DSS");
        assert_eq!(cat.schema_code, 2);
        assert_eq!(cat.schema(), SchemaType::CategoryThenPrint);
        assert!(cat.has_recognized_schema());
    }

    #[test]
    fn test_unrecognized_schema_code() {
        let mut cat = Category::new("DSS", "Dress", SchemaType::CategoryThenPrint);
        cat.schema_code = 12;
        assert!(!cat.has_recognized_schema());
        assert_eq!(cat.schema(), SchemaType::PrintThenCategory);
    }

    #[test]
    fn test_deserialize_without_id_or_schema() {
        let cat: Category = serde_json::from_str(r#"{"code":"BOX","name":"Box"}"#).unwrap();
        assert_eq!(cat.schema(), SchemaType::PrintThenCategory);
        assert!(!cat.id.as_str().is_empty());
    }
}
