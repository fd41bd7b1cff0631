//! Settings resolution with hierarchical merge

use std::fs;
use std::path::{Path, PathBuf};

use shop_meta::Settings;
use toml::{Table, Value};

use crate::{Error, Result};

const APP_DIR: &str = "notebook-configurator";
const PROJECT_DIR: &str = ".configurator";

/// Resolves settings by merging the global, project and local layers
pub struct SettingsResolver {
    /// Project root directory
    root: PathBuf,

    /// Override for the global config directory (used for testing).
    /// When `None`, the platform-appropriate directory is used via `dirs::config_dir()`.
    global_config_dir_override: Option<PathBuf>,
}

impl SettingsResolver {
    /// Create a resolver for the given project root
    ///
    /// Uses the platform-appropriate global config directory:
    /// - Linux: `~/.config/notebook-configurator/`
    /// - macOS: `~/Library/Application Support/notebook-configurator/`
    /// - Windows: `%APPDATA%\notebook-configurator\`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            global_config_dir_override: None,
        }
    }

    /// Create a resolver with a custom global config directory.
    pub fn with_global_config_dir(root: impl Into<PathBuf>, global_config_dir: PathBuf) -> Self {
        Self {
            root: root.into(),
            global_config_dir_override: Some(global_config_dir),
        }
    }

    fn global_config_dir(&self) -> Option<PathBuf> {
        if let Some(ref override_dir) = self.global_config_dir_override {
            return Some(override_dir.clone());
        }
        dirs::config_dir().map(|d| d.join(APP_DIR))
    }

    /// Candidate layer files, lowest precedence first.
    pub fn layer_paths(&self) -> Vec<PathBuf> {
        let mut paths = Vec::with_capacity(3);
        if let Some(global_dir) = self.global_config_dir() {
            paths.push(global_dir.join("config.toml"));
        }
        paths.push(self.project_config_path());
        paths.push(self.local_config_path());
        paths
    }

    /// Resolve the settings by merging all layers
    ///
    /// Missing layers are silently skipped. Invalid TOML, or a value the
    /// settings types reject, fails with the offending file's path.
    pub fn resolve(&self) -> Result<Settings> {
        let mut merged = Table::new();

        for path in self.layer_paths() {
            if !path.is_file() {
                tracing::debug!(?path, "No settings layer found, skipping");
                continue;
            }

            tracing::debug!(?path, "Loading settings layer");
            let layer = load_layer(&path)?;
            merge_tables(&mut merged, layer);
        }

        Value::Table(merged)
            .try_into::<Settings>()
            .map_err(|e| Error::InvalidSettings {
                path: self.root.clone(),
                message: e.to_string(),
            })
    }

    /// Resolve the configured catalog path against the project root.
    pub fn catalog_path(&self, settings: &Settings) -> Option<PathBuf> {
        let path = Path::new(settings.catalog.path.as_deref()?);
        if path.is_absolute() {
            Some(path.to_path_buf())
        } else {
            Some(self.root.join(path))
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn project_config_path(&self) -> PathBuf {
        self.root.join(PROJECT_DIR).join("config.toml")
    }

    pub fn local_config_path(&self) -> PathBuf {
        self.root.join(PROJECT_DIR).join("config.local.toml")
    }

    pub fn has_project_config(&self) -> bool {
        self.project_config_path().is_file()
    }

    pub fn has_local_overrides(&self) -> bool {
        self.local_config_path().is_file()
    }
}

/// Parse one layer and check it against the settings schema on its own,
/// so errors point at the file that caused them.
fn load_layer(path: &Path) -> Result<Table> {
    let invalid = |message: String| Error::InvalidSettings {
        path: path.to_path_buf(),
        message,
    };

    let content = fs::read_to_string(path)?;
    let table: Table = content.parse().map_err(|e: toml::de::Error| invalid(e.to_string()))?;
    Value::Table(table.clone())
        .try_into::<Settings>()
        .map_err(|e| invalid(e.to_string()))?;
    Ok(table)
}

/// Deep-merge `overlay` into `base`: nested tables merge key by key, any
/// other value in `overlay` replaces the one in `base`.
pub fn merge_tables(base: &mut Table, overlay: Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(Value::Table(existing)), Value::Table(incoming)) => {
                merge_tables(existing, incoming);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}
