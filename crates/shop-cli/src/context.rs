//! Command context
//!
//! Resolves layered settings for the working directory, applies command-line
//! overrides, and loads the catalog the commands operate on.

use std::path::{Path, PathBuf};

use shop_core::SettingsResolver;
use shop_meta::{MatchPolicy, Settings};
use shop_store::Catalog;

use crate::error::{CliError, Result};

/// Effective settings for one invocation
#[derive(Debug, Clone)]
pub struct CommandContext {
    settings: Settings,
    catalog_path: PathBuf,
}

impl CommandContext {
    /// Resolve settings from `cwd`, then let the flags win.
    pub fn resolve(
        cwd: &Path,
        catalog: Option<PathBuf>,
        match_policy: Option<MatchPolicy>,
    ) -> Result<Self> {
        Self::from_resolver(&SettingsResolver::new(cwd), catalog, match_policy)
    }

    /// Resolve settings through an explicit resolver, then let the flags win.
    pub fn from_resolver(
        resolver: &SettingsResolver,
        catalog: Option<PathBuf>,
        match_policy: Option<MatchPolicy>,
    ) -> Result<Self> {
        let settings = resolver.resolve()?;
        Self::from_settings(resolver, settings, catalog, match_policy)
    }

    fn from_settings(
        resolver: &SettingsResolver,
        mut settings: Settings,
        catalog: Option<PathBuf>,
        match_policy: Option<MatchPolicy>,
    ) -> Result<Self> {
        if let Some(policy) = match_policy {
            settings.resolver.match_policy = policy;
        }

        let catalog_path = match catalog {
            Some(path) if path.is_absolute() => path,
            Some(path) => resolver.root().join(path),
            None => resolver.catalog_path(&settings).ok_or_else(|| {
                CliError::user(
                    "No catalog configured. \
                     Pass --catalog or set [catalog] path in .configurator/config.toml",
                )
            })?,
        };

        tracing::debug!(
            ?catalog_path,
            policy = %settings.resolver.match_policy,
            "Resolved command context"
        );
        Ok(Self {
            settings,
            catalog_path,
        })
    }

    /// Load the catalog with the configured malformed-row policy.
    pub fn load_catalog(&self) -> Result<Catalog> {
        let catalog = Catalog::load(&self.catalog_path)?;
        Ok(catalog.with_policy(self.settings.catalog.malformed))
    }

    pub fn catalog_path(&self) -> &Path {
        &self.catalog_path
    }

    pub fn match_policy(&self) -> MatchPolicy {
        self.settings.resolver.match_policy
    }

    pub fn currency(&self) -> &str {
        &self.settings.display.currency
    }
}
