//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Master data location.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Item master export settings.
    #[serde(default)]
    pub item_master: ItemMasterConfig,

    /// Purchase order storage.
    #[serde(default)]
    pub purchase_orders: PurchaseOrderConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content, is_json(path))
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse config text as JSON or TOML.
    pub fn parse(content: &str, json: bool) -> Result<Self> {
        if json {
            Ok(serde_json::from_str(content)?)
        } else {
            Ok(toml::from_str(content)?)
        }
    }

    /// Check the values that can't be expressed in the types.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.catalog.path.trim().is_empty() {
            problems.push("catalog.path is empty".to_string());
        }
        if self.purchase_orders.dir.trim().is_empty() {
            problems.push("purchase_orders.dir is empty".to_string());
        }
        if self.item_master.default_weight_grams == Some(0) {
            problems.push("item_master.default_weight_grams must be positive".to_string());
        }
        problems
    }
}

/// Master data location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog file, JSON or TOML by extension.
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

fn default_catalog_path() -> String {
    "catalog.json".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

/// Item master export settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemMasterConfig {
    /// Whether bundle SKUs are exported alongside products.
    #[serde(default = "default_true")]
    pub include_bundles: bool,

    /// Weight used when the catalog has none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_weight_grams: Option<u32>,
}

fn default_true() -> bool {
    true
}

impl Default for ItemMasterConfig {
    fn default() -> Self {
        Self {
            include_bundles: true,
            default_weight_grams: None,
        }
    }
}

/// Purchase order storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOrderConfig {
    /// Directory holding one JSON file per order.
    #[serde(default = "default_po_dir")]
    pub dir: String,

    /// Vendor used when `po new` is given none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_vendor: Option<String>,
}

fn default_po_dir() -> String {
    ".inventory/purchase-orders".to_string()
}

impl Default for PurchaseOrderConfig {
    fn default() -> Self {
        Self {
            dir: default_po_dir(),
            default_vendor: None,
        }
    }
}

pub fn is_json(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "json")
}

/// Generate a default inventory.toml config file.
pub fn generate_default_config() -> String {
    r#"# Inventory tool configuration

[catalog]
# Master data file (JSON or TOML)
path = "catalog.json"

[item_master]
include_bundles = true
# default_weight_grams = 200

[purchase_orders]
dir = ".inventory/purchase-orders"
# default_vendor = "Acme Textiles"
"#
    .to_string()
}
