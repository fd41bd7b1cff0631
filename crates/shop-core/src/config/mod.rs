//! Layered settings resolution
//!
//! Settings are loaded and merged from these sources (later sources override earlier):
//!
//! 1. **Global defaults** - `<config_dir>/notebook-configurator/config.toml`
//! 2. **Project config** - `.configurator/config.toml`
//! 3. **Local overrides** - `.configurator/config.local.toml` (git-ignored)
//!
//! Command-line flags are applied on top by the caller.
//!
//! # Example
//!
//! ```ignore
//! use shop_core::config::SettingsResolver;
//!
//! let resolver = SettingsResolver::new(std::env::current_dir()?);
//! let settings = resolver.resolve()?;
//! println!("Match policy: {}", settings.resolver.match_policy);
//! ```

mod resolver;

pub use resolver::{SettingsResolver, merge_tables};
