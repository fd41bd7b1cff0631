//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use shop_meta::MatchPolicy;

/// Notebook configurator - Browse product configurations from a catalog file
#[derive(Parser, Debug)]
#[command(name = "configurator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Catalog document (.json, .toml, .yaml); overrides [catalog] path
    #[arg(long, global = true, env = "CONFIGURATOR_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Tie-break for ambiguous selections (first-match or require-unique)
    #[arg(long, global = true)]
    pub match_policy: Option<MatchPolicy>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List the products in the catalog
    Products {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show every value each attribute takes for a product
    Options {
        /// Product id or slug
        product: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Resolve a product configuration
    ///
    /// Starts from the cheapest configuration and applies each selection
    /// in order.
    ///
    /// Examples:
    ///   configurator show ideapad-3
    ///   configurator show ideapad-3 -s ram=16GB -s ssd=1TB
    Show {
        /// Product id or slug
        product: String,

        /// Attribute selection as name=value (repeatable)
        #[arg(short, long = "select", value_name = "NAME=VALUE")]
        selections: Vec<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Validate a product's configuration rows
    ///
    /// Exits non-zero when any row is malformed.
    Check {
        /// Product id or slug
        product: String,
    },
}
