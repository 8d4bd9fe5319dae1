//! Inventory error types.

use thiserror::Error;

/// Result alias for inventory operations.
pub type Result<T> = std::result::Result<T, InventoryError>;

/// Errors that can occur in inventory operations.
#[derive(Error, Debug, PartialEq)]
pub enum InventoryError {
    /// Category not found.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// Print not found.
    #[error("Print not found: {0}")]
    PrintNotFound(String),

    /// Purchase order not found.
    #[error("Purchase order not found: {0}")]
    PurchaseOrderNotFound(String),

    /// Category code already in use.
    #[error("Duplicate category code: {0}")]
    DuplicateCategory(String),

    /// Print code already in use.
    #[error("Duplicate print code: {0}")]
    DuplicatePrint(String),

    /// Size already defined for the category/print pair.
    #[error("Size {size} already exists for {category_code}/{print_code}")]
    DuplicateSize {
        category_code: String,
        print_code: String,
        size: String,
    },

    /// Size not defined for the category/print pair.
    #[error("Size {size} not found for {category_code}/{print_code}")]
    SizeNotFound {
        category_code: String,
        print_code: String,
        size: String,
    },

    /// Bundle SKU already in the reference table.
    #[error("Duplicate bundle SKU: {0}")]
    DuplicateBundle(String),

    /// Bundle SKU not in the reference table.
    #[error("Bundle SKU not found: {0}")]
    BundleNotFound(String),

    /// Requested final size is not shared by every product of the bundle.
    #[error("Size {size} is not common to all prints (common: {available})")]
    SizeNotCommon { size: String, available: String },

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// SKU not produced by the catalog.
    #[error("Unknown SKU: {0}")]
    UnknownSku(String),

    /// Purchase order line not found.
    #[error("SKU not on purchase order: {0}")]
    LineNotFound(String),

    /// Purchase order can no longer be edited.
    #[error("Purchase order {id} is {status}, expected draft")]
    PurchaseOrderNotEditable { id: String, status: String },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<serde_json::Error> for InventoryError {
    fn from(e: serde_json::Error) -> Self {
        InventoryError::Serialization(e.to_string())
    }
}
