//! Check command implementation

use colored::Colorize;
use shop_meta::MalformedPolicy;

use crate::context::CommandContext;
use crate::error::{CliError, Result};

/// Run the check command
///
/// Every row is validated regardless of the configured malformed-row
/// policy; any malformed row fails the command.
pub fn run_check(context: &CommandContext, product: &str) -> Result<()> {
    let catalog = context.load_catalog()?.with_policy(MalformedPolicy::Skip);
    let snapshot = catalog.snapshot(product)?;

    println!("{}", snapshot.product.name.bold());
    println!();
    println!("  {:<12} {}", "Rows:".dimmed(), snapshot.product.rows);
    println!("  {:<12} {}", "Usable:".dimmed(), snapshot.records.len());
    println!("  {:<12} {}", "Inactive:".dimmed(), snapshot.inactive);
    println!("  {:<12} {}", "Malformed:".dimmed(), snapshot.quarantined.len());

    if snapshot.quarantined.is_empty() {
        println!();
        println!("{}", "All configuration rows are valid".green());
        return Ok(());
    }

    println!();
    for malformed in &snapshot.quarantined {
        println!("  {} {}", "x".red(), malformed);
    }
    println!();

    Err(CliError::user(format!(
        "{} malformed configuration row(s) in {}",
        snapshot.quarantined.len(),
        snapshot.product.name
    )))
}
