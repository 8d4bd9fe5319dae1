//! Schema-driven SKU generation.
//!
//! Every category carries a schema code selecting how its product codes
//! are assembled from the category code, the print codes and the size.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Size name meaning "no size suffix".
pub const STANDARD_SIZE: &str = "Standard";

/// SKU template attached to a category.
///
/// Serialized as its integer code. Unrecognized codes convert to
/// [`SchemaType::PrintThenCategory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "i32", into = "i32")]
pub enum SchemaType {
    /// `{print}{category}{size}`
    PrintCategoryJoined,
    /// `{print}_{category}{size}`
    #[default]
    PrintThenCategory,
    /// `{category}_{print}{size}`
    CategoryThenPrint,
    /// `{print0}_{print1}_..._{category}{size}`
    PrintsThenCategory,
    /// `{category}_{print0}_{print1}_...{size}`
    CategoryThenPrints,
    /// `{category}_{print0}_{print1}_...`, never sized.
    CategoryThenPrintsUnsized,
    /// `{category}_{print0}`, never sized.
    CategorySinglePrint,
}

impl SchemaType {
    /// All schema types, ordered by code.
    pub const ALL: [SchemaType; 7] = [
        SchemaType::PrintCategoryJoined,
        SchemaType::PrintThenCategory,
        SchemaType::CategoryThenPrint,
        SchemaType::PrintsThenCategory,
        SchemaType::CategoryThenPrints,
        SchemaType::CategoryThenPrintsUnsized,
        SchemaType::CategorySinglePrint,
    ];

    /// Look up a schema by its integer code.
    pub fn from_code(code: i32) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
    }

    /// Integer code stored on the category.
    pub fn code(&self) -> i32 {
        match self {
            SchemaType::PrintCategoryJoined => 0,
            SchemaType::PrintThenCategory => 1,
            SchemaType::CategoryThenPrint => 2,
            SchemaType::PrintsThenCategory => 3,
            SchemaType::CategoryThenPrints => 4,
            SchemaType::CategoryThenPrintsUnsized => 5,
            SchemaType::CategorySinglePrint => 6,
        }
    }

    /// Whether the template takes every print rather than the first one.
    pub fn is_multi_print(&self) -> bool {
        matches!(
            self,
            SchemaType::PrintsThenCategory
                | SchemaType::CategoryThenPrints
                | SchemaType::CategoryThenPrintsUnsized
        )
    }

    /// Whether a size suffix can ever be appended.
    pub fn is_sized(&self) -> bool {
        !matches!(
            self,
            SchemaType::CategoryThenPrintsUnsized | SchemaType::CategorySinglePrint
        )
    }

    /// Human-readable template.
    pub fn template(&self) -> &'static str {
        match self {
            SchemaType::PrintCategoryJoined => "{print}{category}{size}",
            SchemaType::PrintThenCategory => "{print}_{category}{size}",
            SchemaType::CategoryThenPrint => "{category}_{print}{size}",
            SchemaType::PrintsThenCategory => "{print0}_{print1}_..._{category}{size}",
            SchemaType::CategoryThenPrints => "{category}_{print0}_{print1}_...{size}",
            SchemaType::CategoryThenPrintsUnsized => "{category}_{print0}_{print1}_...",
            SchemaType::CategorySinglePrint => "{category}_{print}",
        }
    }
}

impl From<i32> for SchemaType {
    fn from(code: i32) -> Self {
        Self::from_code(code).unwrap_or_default()
    }
}

impl From<SchemaType> for i32 {
    fn from(schema: SchemaType) -> Self {
        schema.code()
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code(), self.template())
    }
}

/// Build the SKU for a category, an ordered list of prints and an optional size.
///
/// A size of `None` or [`STANDARD_SIZE`] adds no suffix. An empty print list
/// leaves the print segment empty.
pub fn generate_sku<S: AsRef<str>>(
    schema: SchemaType,
    category_code: &str,
    print_codes: &[S],
    size: Option<&str>,
) -> String {
    let first_print = print_codes.first().map(|p| p.as_ref()).unwrap_or("");
    let all_prints = print_codes
        .iter()
        .map(|p| p.as_ref())
        .collect::<Vec<_>>()
        .join("_");
    let suffix = size_suffix(size);

    match schema {
        SchemaType::PrintCategoryJoined => format!("{first_print}{category_code}{suffix}"),
        SchemaType::PrintThenCategory => format!("{first_print}_{category_code}{suffix}"),
        SchemaType::CategoryThenPrint => format!("{category_code}_{first_print}{suffix}"),
        SchemaType::PrintsThenCategory => format!("{all_prints}_{category_code}{suffix}"),
        SchemaType::CategoryThenPrints => format!("{category_code}_{all_prints}{suffix}"),
        SchemaType::CategoryThenPrintsUnsized => format!("{category_code}_{all_prints}"),
        SchemaType::CategorySinglePrint => format!("{category_code}_{first_print}"),
    }
}

fn size_suffix(size: Option<&str>) -> String {
    match size {
        Some(size) if size != STANDARD_SIZE => format!("_{size}"),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sku(code: i32, category: &str, prints: &[&str], size: Option<&str>) -> String {
        generate_sku(SchemaType::from(code), category, prints, size)
    }

    #[test]
    fn test_every_schema_template() {
        let prints = ["FLG", "RED"];
        assert_eq!(sku(0, "DSS", &prints, Some("M")), "FLGDSS_M");
        assert_eq!(sku(1, "DSS", &prints, Some("M")), "FLG_DSS_M");
        assert_eq!(sku(2, "DSS", &prints, Some("M")), "DSS_FLG_M");
        assert_eq!(sku(3, "DSS", &prints, Some("M")), "FLG_RED_DSS_M");
        assert_eq!(sku(4, "DSS", &prints, Some("M")), "DSS_FLG_RED_M");
        assert_eq!(sku(5, "DSS", &prints, Some("M")), "DSS_FLG_RED");
        assert_eq!(sku(6, "DSS", &prints, Some("M")), "DSS_FLG");
    }

    #[test]
    fn test_standard_size_has_no_suffix() {
        assert_eq!(sku(1, "DSS", &["FLG"], Some("Standard")), "FLG_DSS");
        assert_eq!(sku(1, "DSS", &["FLG"], None), "FLG_DSS");
        assert_eq!(sku(1, "DSS", &["FLG"], Some("3-4Y")), "FLG_DSS_3-4Y");
    }

    #[test]
    fn test_size_name_is_case_sensitive() {
        assert_eq!(sku(1, "DSS", &["FLG"], Some("standard")), "FLG_DSS_standard");
    }

    #[test]
    fn test_multi_print_schemas() {
        assert_eq!(sku(3, "BOX", &["FLG", "RED"], Some("Small")), "FLG_RED_BOX_Small");
        assert_eq!(sku(5, "BOX", &["FLG", "RED"], Some("Small")), "BOX_FLG_RED");
        assert_eq!(sku(4, "BOX", &["FLG", "RED", "BLU"], None), "BOX_FLG_RED_BLU");
    }

    #[test]
    fn test_unrecognized_schema_falls_back_to_schema_one() {
        assert_eq!(
            sku(99, "DSS", &["FLG"], Some("Standard")),
            sku(1, "DSS", &["FLG"], Some("Standard"))
        );
        assert_eq!(SchemaType::from(-1), SchemaType::PrintThenCategory);
        assert_eq!(SchemaType::from_code(7), None);
    }

    #[test]
    fn test_empty_prints_leave_empty_segment() {
        let none: [&str; 0] = [];
        assert_eq!(sku(1, "DSS", &none, None), "_DSS");
        assert_eq!(sku(4, "DSS", &none, None), "DSS_");
    }

    #[test]
    fn test_codes_round_trip() {
        for (idx, schema) in SchemaType::ALL.iter().enumerate() {
            assert_eq!(schema.code(), idx as i32);
            assert_eq!(SchemaType::from_code(schema.code()), Some(*schema));
        }
    }

    #[test]
    fn test_schema_serde_as_integer() {
        let json = serde_json::to_string(&SchemaType::CategoryThenPrints).unwrap();
        assert_eq!(json, "4");
        let parsed: SchemaType = serde_json::from_str("42").unwrap();
        assert_eq!(parsed, SchemaType::PrintThenCategory);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let a = sku(3, "BOX", &["A", "B"], Some("L"));
        let b = sku(3, "BOX", &["A", "B"], Some("L"));
        assert_eq!(a, b);
    }
}
