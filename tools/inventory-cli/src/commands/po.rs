//! Purchase order commands.
//!
//! Orders are stored as one pretty-printed JSON file per order in the
//! configured purchase order directory.

use std::path::PathBuf;

use anyhow::{bail, Context as _, Result};
use chrono::{Local, NaiveDate, Utc};
use dialoguer::Confirm;
use inventory_core::purchase_order::{PurchaseOrder, PurchaseOrderStatus};
use inventory_core::InventoryError;

use super::{PoArgs, PoCommand};
use crate::context::Context;
use crate::output::{column_width, status_badge};

/// Run the po command.
pub async fn run(args: PoArgs, ctx: &Context) -> Result<()> {
    match args.command {
        PoCommand::New { vendor, date, notes } => new_order(vendor, date, notes, ctx).await,
        PoCommand::Add { id, sku, quantity } => add_line(&id, &sku, quantity, ctx).await,
        PoCommand::Remove { id, sku } => remove_line(&id, &sku, ctx).await,
        PoCommand::Show { id } => show_order(&id, ctx).await,
        PoCommand::List { status } => list_orders(status.as_deref(), ctx).await,
        PoCommand::Submit { id, yes } => submit_order(&id, yes, ctx).await,
        PoCommand::Cancel { id, yes } => cancel_order(&id, yes, ctx).await,
    }
}

async fn new_order(
    vendor: Option<String>,
    date: Option<String>,
    notes: Option<String>,
    ctx: &Context,
) -> Result<()> {
    let vendor = match vendor.or_else(|| ctx.config.purchase_orders.default_vendor.clone()) {
        Some(vendor) if !vendor.trim().is_empty() => vendor.trim().to_string(),
        _ => bail!("No vendor given. Use --vendor or set purchase_orders.default_vendor."),
    };

    let order_date = match date {
        Some(date) => NaiveDate::parse_from_str(&date, "%Y-%m-%d")
            .with_context(|| format!("Invalid date {} (expected YYYY-MM-DD)", date))?,
        None => Local::now().date_naive(),
    };

    let mut order = PurchaseOrder::new(vendor, order_date);
    if let Some(notes) = notes {
        order = order.with_notes(notes);
    }
    save_order(&order, ctx).await?;

    if ctx.output.is_json() {
        ctx.output.json(&order);
    } else {
        ctx.output.success(&format!("Created purchase order {}", order.id));
        ctx.output.kv("Vendor", &order.vendor);
        ctx.output.kv("Date", &order.order_date.to_string());
    }
    Ok(())
}

async fn add_line(id: &str, sku: &str, quantity: u32, ctx: &Context) -> Result<()> {
    let mut order = load_order(id, ctx).await?;

    let known = ctx.load_catalog().await?.sku_index()?;
    if !known.contains(sku.trim()) {
        ctx.output.warn(&format!(
            "{} is not produced by the catalog; the order will not submit until it is",
            sku.trim()
        ));
    }

    order.add_line(sku, quantity)?;
    save_order(&order, ctx).await?;

    ctx.output.success(&format!(
        "Added {} x {} ({} units on order)",
        quantity,
        sku.trim(),
        order.total_units()
    ));
    Ok(())
}

async fn remove_line(id: &str, sku: &str, ctx: &Context) -> Result<()> {
    let mut order = load_order(id, ctx).await?;
    let removed = order.remove_line(sku)?;
    save_order(&order, ctx).await?;

    ctx.output
        .success(&format!("Removed {} x {}", removed.quantity, removed.sku));
    Ok(())
}

async fn show_order(id: &str, ctx: &Context) -> Result<()> {
    let order = load_order(id, ctx).await?;

    if ctx.output.is_json() {
        ctx.output.json(&order);
        return Ok(());
    }

    ctx.output.header(&format!("Purchase order {}", order.id));
    ctx.output.kv("Vendor", &order.vendor);
    ctx.output.kv("Date", &order.order_date.to_string());
    ctx.output.kv("Status", &status_badge(order.status));
    if let Some(notes) = &order.notes {
        ctx.output.kv("Notes", notes);
    }
    if let Some(at) = order.submitted_at {
        ctx.output.kv("Submitted", &at.to_rfc3339());
    }

    if order.lines.is_empty() {
        ctx.output.info("No lines yet. Add one with `inventory po add`.");
        return Ok(());
    }

    ctx.output.info("");
    let quantities: Vec<String> = order.lines.iter().map(|l| l.quantity.to_string()).collect();
    let widths = [
        column_width("SKU", order.lines.iter().map(|l| l.sku.as_str())),
        column_width("Qty", quantities.iter().map(String::as_str)),
    ];
    ctx.output.table_row(&["SKU", "Qty"], &widths);
    for (line, qty) in order.lines.iter().zip(&quantities) {
        ctx.output.table_row(&[line.sku.as_str(), qty.as_str()], &widths);
    }
    ctx.output.kv("Total units", &order.total_units().to_string());
    Ok(())
}

async fn list_orders(status: Option<&str>, ctx: &Context) -> Result<()> {
    let filter = match status {
        Some(s) => Some(
            PurchaseOrderStatus::from_str(s)
                .with_context(|| format!("Unknown status {} (draft, submitted, cancelled)", s))?,
        ),
        None => None,
    };

    let mut orders = load_all_orders(ctx).await?;
    orders.retain(|o| filter.map_or(true, |f| o.status == f));
    orders.sort_by(|a, b| b.order_date.cmp(&a.order_date).then(a.id.as_str().cmp(b.id.as_str())));

    if ctx.output.is_json() {
        ctx.output.json(&orders);
        return Ok(());
    }

    ctx.output.header("Purchase orders");
    if orders.is_empty() {
        ctx.output.info("No purchase orders found.");
        ctx.output.info("Run `inventory po new` to start one.");
        return Ok(());
    }

    for order in &orders {
        ctx.output.list_item(&format!(
            "{}  {}  {}  {} lines, {} units  [{}]",
            order.id,
            order.order_date,
            order.vendor,
            order.line_count(),
            order.total_units(),
            status_badge(order.status)
        ));
    }
    Ok(())
}

async fn submit_order(id: &str, yes: bool, ctx: &Context) -> Result<()> {
    let mut order = load_order(id, ctx).await?;
    let known = ctx.load_catalog().await?.sku_index()?;

    // Fail before prompting.
    order.check_submittable(&known)?;

    if !ctx.output.is_json() {
        ctx.output.header(&format!("Submitting {}", order.id));
        ctx.output.kv("Vendor", &order.vendor);
        ctx.output.kv("Lines", &order.line_count().to_string());
        ctx.output.kv("Units", &order.total_units().to_string());
    }

    if !yes && !ctx.output.is_json() {
        ctx.output.info("");
        let confirmed = Confirm::new()
            .with_prompt("Submit purchase order?")
            .default(true)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Submission cancelled");
            return Ok(());
        }
    }

    order.submit(&known, Utc::now())?;
    save_order(&order, ctx).await?;

    if ctx.output.is_json() {
        ctx.output.json(&order);
    } else {
        ctx.output.success(&format!("Submitted purchase order {}", order.id));
    }
    Ok(())
}

async fn cancel_order(id: &str, yes: bool, ctx: &Context) -> Result<()> {
    let mut order = load_order(id, ctx).await?;
    if order.status == PurchaseOrderStatus::Cancelled {
        bail!("Purchase order {} is already cancelled", order.id);
    }

    if !yes && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt(format!("Cancel purchase order {}?", order.id))
            .default(false)
            .interact()?;
        if !confirmed {
            return Ok(());
        }
    }

    order.cancel()?;
    save_order(&order, ctx).await?;
    ctx.output.success(&format!("Cancelled purchase order {}", order.id));
    Ok(())
}

fn order_path(id: &str, ctx: &Context) -> Result<PathBuf> {
    let id = id.trim();
    if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        bail!("Invalid purchase order ID: {}", id);
    }
    Ok(ctx.purchase_orders_dir().join(format!("{}.json", id)))
}

async fn load_order(id: &str, ctx: &Context) -> Result<PurchaseOrder> {
    let path = order_path(id, ctx)?;
    if !path.exists() {
        return Err(InventoryError::PurchaseOrderNotFound(id.trim().to_string()).into());
    }

    let content = tokio::fs::read_to_string(&path).await?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse purchase order: {}", path.display()))
}

async fn save_order(order: &PurchaseOrder, ctx: &Context) -> Result<()> {
    let path = order_path(order.id.as_str(), ctx)?;
    tokio::fs::create_dir_all(ctx.purchase_orders_dir()).await?;

    let json = serde_json::to_string_pretty(order)?;
    tokio::fs::write(&path, json).await?;

    ctx.output
        .debug(&format!("Saved purchase order: {}", path.display()));
    Ok(())
}

async fn load_all_orders(ctx: &Context) -> Result<Vec<PurchaseOrder>> {
    let dir = ctx.purchase_orders_dir();
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut orders = Vec::new();
    let mut entries = tokio::fs::read_dir(&dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().map_or(true, |e| e != "json") {
            continue;
        }

        let content = tokio::fs::read_to_string(&path).await?;
        match serde_json::from_str::<PurchaseOrder>(&content) {
            Ok(order) => orders.push(order),
            Err(e) => ctx
                .output
                .warn(&format!("Skipping {}: {}", path.display(), e)),
        }
    }
    Ok(orders)
}
