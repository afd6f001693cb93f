//! Configuration file support for SiteCycle tools.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/sitecycle/config.toml`.

use crate::location::RenameTable;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub export: ExportConfig,

    #[serde(default)]
    pub names: NamesConfig,
}

/// Export output configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExportConfig {
    /// File name prefix for the default output path
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_prefix: default_file_prefix(),
        }
    }
}

/// Extra exact-match label renames, applied on top of the built-in ones
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct NamesConfig {
    #[serde(default)]
    pub renames: BTreeMap<String, String>,
}

fn default_file_prefix() -> String {
    "sitecycle-export".into()
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::debug!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let base = match dirs::config_dir() {
            Some(dir) => dir,
            None => {
                let home = std::env::var("HOME")
                    .map_err(|_| Error::Config("HOME environment variable not set".into()))?;
                PathBuf::from(home).join(".config")
            }
        };
        Ok(base.join("sitecycle").join("config.toml"))
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Rename table combining built-in and configured entries
    pub fn rename_table(&self) -> RenameTable {
        RenameTable::with_overrides(&self.names.renames)
    }

    fn validate(&self) -> Result<()> {
        let prefix = &self.export.file_prefix;
        if prefix.is_empty() || prefix.contains(['/', '\\']) {
            return Err(Error::Config(format!(
                "export.file_prefix must be a non-empty file name, got {:?}",
                prefix
            )));
        }
        if let Some(from) = self.names.renames.keys().find(|k| k.is_empty()) {
            return Err(Error::Config(format!("names.renames has an empty key {:?}", from)));
        }
        Ok(())
    }
}
