//! CLI command implementations.

pub mod bundle;
pub mod catalog;
pub mod config;
pub mod item_master;
pub mod po;
pub mod sizes;
pub mod sku;

use clap::{Args, Subcommand};

/// Arguments for the sku command.
#[derive(Args)]
pub struct SkuArgs {
    /// Category code.
    #[arg(long)]
    pub category: String,

    /// Print code, repeat for multi-print schemas (order is kept).
    #[arg(long = "print", required = true)]
    pub prints: Vec<String>,

    /// Size name ("Standard" adds no suffix).
    #[arg(long)]
    pub size: Option<String>,

    /// Schema code (0-6). Looked up from the catalog when omitted.
    #[arg(long)]
    pub schema: Option<i32>,
}

/// Arguments for the sizes command.
#[derive(Args)]
pub struct SizesArgs {
    /// One comma-separated size list per product ("" for none).
    #[arg(required = true)]
    pub lists: Vec<String>,
}

/// Arguments for the bundle command.
#[derive(Args)]
pub struct BundleArgs {
    /// Category code.
    #[arg(long)]
    pub category: String,

    /// Print code of each bundled product, in bundle order.
    #[arg(long = "print", required = true)]
    pub prints: Vec<String>,

    /// Final size to select.
    #[arg(long)]
    pub size: Option<String>,
}

/// Arguments for the item-master command.
#[derive(Args)]
pub struct ItemMasterArgs {
    /// Category code (default: every category).
    #[arg(long)]
    pub category: Option<String>,

    /// Restrict to these prints.
    #[arg(long = "print")]
    pub prints: Vec<String>,

    /// Leave bundle SKUs out.
    #[arg(long)]
    pub no_bundles: bool,

    /// Write the rows to a JSON file instead of stdout.
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommand,
}

#[derive(Subcommand)]
pub enum CatalogCommand {
    /// Show master data.
    Show,
    /// Validate the catalog file.
    Validate,
    /// Add a category.
    AddCategory {
        /// Category code.
        code: String,
        /// Display name.
        name: String,
        /// Schema code (0-6).
        #[arg(long, default_value = "1")]
        schema: i32,
    },
    /// Change the SKU schema of a category.
    SetSchema {
        /// Category code.
        code: String,
        /// Schema code (0-6).
        schema: i32,
    },
    /// Remove a category with its sizes, weights and bundles.
    RemoveCategory {
        /// Category code.
        code: String,
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
    /// Add a print.
    AddPrint {
        /// Print code.
        code: String,
        /// Display name.
        name: String,
    },
    /// Remove a print and its sizes.
    RemovePrint {
        /// Print code.
        code: String,
    },
    /// Offer a size for a category/print pair.
    AddSize {
        /// Category code.
        category: String,
        /// Print code.
        print: String,
        /// Size name.
        size: String,
    },
    /// Withdraw a size from a category/print pair.
    RemoveSize {
        /// Category code.
        category: String,
        /// Print code.
        print: String,
        /// Size name.
        size: String,
    },
    /// Set the packed weight of a category (optionally per size).
    SetWeight {
        /// Category code.
        category: String,
        /// Weight in grams.
        grams: u32,
        /// Size name.
        #[arg(long)]
        size: Option<String>,
    },
    /// Add a bundle SKU to the reference table.
    AddBundle {
        /// Category code.
        #[arg(long)]
        category: String,
        /// Print code of each bundled product, in bundle order.
        #[arg(long = "print", required = true)]
        prints: Vec<String>,
        /// Final size.
        #[arg(long)]
        size: Option<String>,
        /// Explicit SKU (default: generated from the category schema).
        #[arg(long)]
        sku: Option<String>,
    },
    /// Remove a bundle SKU from the reference table.
    RemoveBundle {
        /// Bundle SKU.
        sku: String,
    },
}

/// Arguments for the po command.
#[derive(Args)]
pub struct PoArgs {
    #[command(subcommand)]
    pub command: PoCommand,
}

#[derive(Subcommand)]
pub enum PoCommand {
    /// Start a draft purchase order.
    New {
        /// Vendor name (default: purchase_orders.default_vendor).
        #[arg(long)]
        vendor: Option<String>,
        /// Order date, YYYY-MM-DD (default: today).
        #[arg(long)]
        date: Option<String>,
        /// Free-form notes.
        #[arg(long)]
        notes: Option<String>,
    },
    /// Add a quantity of a SKU.
    Add {
        /// Purchase order ID.
        id: String,
        /// SKU.
        sku: String,
        /// Quantity.
        quantity: u32,
    },
    /// Remove a SKU line.
    Remove {
        /// Purchase order ID.
        id: String,
        /// SKU.
        sku: String,
    },
    /// Show a purchase order.
    Show {
        /// Purchase order ID.
        id: String,
    },
    /// List purchase orders.
    List {
        /// Only orders in this status.
        #[arg(long)]
        status: Option<String>,
    },
    /// Validate against the catalog and submit.
    Submit {
        /// Purchase order ID.
        id: String,
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
    /// Cancel a purchase order.
    Cancel {
        /// Purchase order ID.
        id: String,
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Set a config value.
    Set {
        /// Config key (dot-separated).
        key: String,
        /// Value to set.
        value: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
