//! Products command implementation

use colored::Colorize;

use crate::context::CommandContext;
use crate::error::Result;

/// Run the products command
pub fn run_products(context: &CommandContext, json: bool) -> Result<()> {
    let catalog = context.load_catalog()?;
    let products = catalog.products();

    if json {
        println!("{}", serde_json::to_string_pretty(&products)?);
        return Ok(());
    }

    println!("{}", "Products".bold());
    println!();

    if products.is_empty() {
        println!("  {}", "None".dimmed());
    }
    for product in &products {
        println!(
            "  {:<6} {:<16} {} ({} rows)",
            product.id.as_str().cyan(),
            product.slug.as_deref().unwrap_or("-").green(),
            product.name,
            product.rows
        );
    }

    println!();
    println!(
        "{} {} products in {}",
        "Total:".dimmed(),
        products.len(),
        context.catalog_path().display()
    );

    Ok(())
}
