//! Inventory CLI - SKU generation, master data and purchase orders.
//!
//! Commands:
//! - `inventory sku` - Generate a SKU
//! - `inventory sizes` - Intersect size lists
//! - `inventory bundle` - Resolve bundle sizes and SKUs
//! - `inventory item-master` - Export the item master
//! - `inventory catalog` - Manage master data
//! - `inventory po` - Manage purchase orders
//! - `inventory config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BundleArgs, CatalogArgs, ConfigArgs, ItemMasterArgs, PoArgs, SizesArgs, SkuArgs};

/// Inventory CLI - SKUs, item masters and purchase orders
#[derive(Parser)]
#[command(name = "inventory")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a product SKU
    Sku(SkuArgs),

    /// Compute the sizes shared by several products
    Sizes(SizesArgs),

    /// Resolve common sizes and SKUs for a bundle
    Bundle(BundleArgs),

    /// Generate the marketplace item master
    ItemMaster(ItemMasterArgs),

    /// Manage master data
    Catalog(CatalogArgs),

    /// Manage purchase orders
    Po(PoArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = match context::Context::load(cli.config.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Sku(args) => commands::sku::run(args, &ctx).await,
        Commands::Sizes(args) => commands::sizes::run(args, &ctx).await,
        Commands::Bundle(args) => commands::bundle::run(args, &ctx).await,
        Commands::ItemMaster(args) => commands::item_master::run(args, &ctx).await,
        Commands::Catalog(args) => commands::catalog::run(args, &ctx).await,
        Commands::Po(args) => commands::po::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
