//! Show command implementation

use colored::Colorize;
use shop_core::{ActiveConfiguration, OptionGroup, ProductView, ViewModel, ViewStatus};
use shop_meta::parse_attribute_pair;

use crate::context::CommandContext;
use crate::error::Result;

/// Run the show command
///
/// Selections are `name=value` strings applied in the order given.
pub fn run_show(
    context: &CommandContext,
    product: &str,
    selections: &[String],
    json: bool,
) -> Result<()> {
    let selections = selections
        .iter()
        .map(|raw| parse_attribute_pair(raw))
        .collect::<shop_meta::Result<Vec<_>>>()?;

    let catalog = context.load_catalog()?;
    let snapshot = catalog.snapshot(product)?;
    let mut view = ProductView::from_snapshot(snapshot, context.match_policy());

    for (name, value) in &selections {
        view.select(name, value);
    }

    let model = view.view_model();
    if json {
        println!("{}", serde_json::to_string_pretty(&model)?);
    } else {
        print_view(&model, context.currency());
    }

    Ok(())
}

fn print_view(model: &ViewModel, currency: &str) {
    if let Some(product) = &model.product {
        println!("{}", product.bold());
        println!();
    }

    match model.status {
        ViewStatus::NoConfigurations => {
            println!("{}", "No configurations available for this product".yellow());
            return;
        }
        ViewStatus::NotLoaded => {
            println!("{}", "Product not loaded".yellow());
            return;
        }
        ViewStatus::Ready | ViewStatus::NoMatch => {}
    }

    for group in &model.options {
        print_group(group);
    }
    println!();

    match &model.active {
        Some(active) => print_active(active, currency),
        None => {
            let selection = model
                .selection
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect::<Vec<_>>()
                .join(", ");
            println!("{} {}", "No configuration matches".red().bold(), selection);
        }
    }
}

/// `[selected]`, plain when selectable, dimmed parentheses when not.
fn print_group(group: &OptionGroup) {
    let values = group
        .values
        .iter()
        .map(|option| {
            if option.selected && option.available {
                format!("[{}]", option.value).green().bold().to_string()
            } else if option.selected {
                format!("[{}]", option.value).red().bold().to_string()
            } else if option.available {
                option.value.clone()
            } else {
                format!("({})", option.value).dimmed().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ");

    println!("  {:<10} {}", format!("{}:", group.name).cyan(), values);
}

fn print_active(active: &ActiveConfiguration, currency: &str) {
    println!("{} {}", "Configuration:".bold(), active.label);
    println!("  {}    {}", "SKU:".dimmed(), active.sku);

    let price = format!("{currency}{}", active.price);
    match (active.original_price, active.discount_percent) {
        (Some(original), Some(percent)) => println!(
            "  {}  {} (was {currency}{original}, -{percent}%)",
            "Price:".dimmed(),
            price.green().bold()
        ),
        _ => println!("  {}  {}", "Price:".dimmed(), price.green().bold()),
    }

    let stock = if active.in_stock {
        format!("{} in stock", active.stock).green()
    } else {
        "out of stock".red()
    };
    println!("  {}  {}", "Stock:".dimmed(), stock);
}
