//! Notebook configurator CLI
//!
//! Lists catalog products and resolves their configurations from the
//! command line.

mod cli;
mod commands;
mod context;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use context::CommandContext;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {e}")))?;
        tracing::debug!("Verbose mode enabled");
    }

    let Some(command) = cli.command else {
        println!("{} Notebook configurator", "configurator".green().bold());
        println!();
        println!("Run {} for available commands.", "configurator --help".cyan());
        return Ok(());
    };

    let cwd = std::env::current_dir()?;
    let context = CommandContext::resolve(&cwd, cli.catalog, cli.match_policy)?;
    execute_command(&context, command)
}

fn execute_command(context: &CommandContext, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Products { json } => commands::run_products(context, json),
        Commands::Options { product, json } => commands::run_options(context, &product, json),
        Commands::Show {
            product,
            selections,
            json,
        } => commands::run_show(context, &product, &selections, json),
        Commands::Check { product } => commands::run_check(context, &product),
    }
}
