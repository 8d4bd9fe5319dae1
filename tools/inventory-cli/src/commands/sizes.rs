//! Intersect size lists given on the command line.

use anyhow::Result;
use inventory_core::sizes::intersect_sizes;

use super::SizesArgs;
use crate::context::Context;

/// Run the sizes command.
pub async fn run(args: SizesArgs, ctx: &Context) -> Result<()> {
    let lists: Vec<Vec<String>> = args.lists.iter().map(|list| parse_list(list)).collect();
    let common = intersect_sizes(&lists);

    if ctx.output.is_json() {
        ctx.output.json(&common);
        return Ok(());
    }

    if common.is_empty() {
        ctx.output.warn("No common sizes");
    }
    for size in &common {
        println!("{}", size);
    }
    Ok(())
}

fn parse_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
