//! Options command implementation

use colored::Colorize;
use serde::Serialize;
use shop_core::{AvailableOptions, Resolver};

use crate::context::CommandContext;
use crate::error::Result;

#[derive(Serialize)]
struct OptionsOutput<'a> {
    product: &'a str,
    options: &'a AvailableOptions,
}

/// Run the options command
pub fn run_options(context: &CommandContext, product: &str, json: bool) -> Result<()> {
    let catalog = context.load_catalog()?;
    let snapshot = catalog.snapshot(product)?;
    let options = Resolver::new(&snapshot.records).available_options();

    if json {
        let output = OptionsOutput {
            product: &snapshot.product.name,
            options: &options,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", snapshot.product.name.bold());
    println!();

    if options.is_empty() {
        println!("  {}", "No configurations available".yellow());
        return Ok(());
    }

    for (name, values) in &options {
        println!("  {:<10} {}", format!("{name}:").cyan(), values.join(", "));
    }

    Ok(())
}
