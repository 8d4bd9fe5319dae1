//! Inventory domain types and logic.
//!
//! This crate holds the deterministic pieces of the inventory tools:
//!
//! - **SKU**: schema-driven product code generation
//! - **Sizes**: common-size resolution across several products
//! - **Catalog**: master data (categories, prints, sizes, weights, bundle SKUs)
//! - **Bundles**: bundle size/SKU resolution against the reference table
//! - **Item master**: marketplace item-master rows for a category
//! - **Purchase orders**: draft, edit and submit purchase orders
//!
//! # Example
//!
//! ```rust
//! use inventory_core::prelude::*;
//!
//! let sku = generate_sku(SchemaType::PrintsThenCategory, "BOX", &["FLG", "RED"], Some("Small"));
//! assert_eq!(sku, "FLG_RED_BOX_Small");
//!
//! let common = intersect_sizes(&[vec!["S", "M", "L"], vec!["M", "L", "XL"]]);
//! assert_eq!(common, vec!["M", "L"]);
//! ```

pub mod error;
pub mod ids;

pub mod bundle;
pub mod catalog;
pub mod item_master;
pub mod purchase_order;
pub mod sizes;
pub mod sku;

pub use error::{InventoryError, Result};
pub use ids::*;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{InventoryError, Result};
    pub use crate::ids::*;

    // SKU and sizes
    pub use crate::sizes::{intersect_sizes, NamedSize};
    pub use crate::sku::{generate_sku, SchemaType, STANDARD_SIZE};

    // Master data
    pub use crate::catalog::{BundleSku, Catalog, Category, Print, ProductWeight, SizeEntry};

    // Workflows
    pub use crate::bundle::{resolve_bundle, BundleCandidate, BundleResolution};
    pub use crate::item_master::{generate_item_master, ItemKind, ItemMasterRequest, ItemMasterRow};
    pub use crate::purchase_order::{PurchaseOrder, PurchaseOrderLine, PurchaseOrderStatus};
}
