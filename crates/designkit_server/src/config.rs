//! designkit configuration file handling

use anyhow::{Context, Result};
use designkit_tokens::Catalog;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name looked up by [`DesignkitConfig::load_from_dir`]
pub const CONFIG_FILE: &str = "designkit.toml";

/// Top-level designkit configuration (designkit.toml)
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct DesignkitConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// HTTP surface configuration
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Socket address to listen on
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String {
    "127.0.0.1:3456".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

/// Durable state mirror
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct StorageConfig {
    /// JSON snapshot of the last written state (relative to the config dir)
    #[serde(default = "default_state_file")]
    pub state_file: PathBuf,
}

fn default_state_file() -> PathBuf {
    PathBuf::from(".designkit/state.json")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            state_file: default_state_file(),
        }
    }
}

/// Catalog source
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// TOML catalog replacing the built-in one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl DesignkitConfig {
    /// Load configuration from a directory (looks for designkit.toml)
    ///
    /// A directory without a config file yields the defaults; an explicit
    /// file path must exist. Relative paths inside the file are resolved
    /// against the directory holding it.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let (config_path, base) = if path.is_file() {
            let base = path.parent().map(Path::to_path_buf).unwrap_or_default();
            (path.to_path_buf(), base)
        } else {
            (path.join(CONFIG_FILE), path.to_path_buf())
        };

        if !config_path.exists() {
            if path.extension().is_some_and(|ext| ext == "toml") {
                anyhow::bail!(
                    "No config file at {}. Run `designkit init` to create one.",
                    path.display()
                );
            }
            debug!(dir = %path.display(), "no {CONFIG_FILE}, using defaults");
            let mut config = Self::default();
            config.resolve_relative_to(&base);
            return Ok(config);
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let mut config = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;
        config.resolve_relative_to(&base);
        debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    fn resolve_relative_to(&mut self, base: &Path) {
        if self.storage.state_file.is_relative() {
            self.storage.state_file = base.join(&self.storage.state_file);
        }
        if let Some(path) = self.catalog.path.as_mut() {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }

    /// Apply `DESIGNKIT_BIND`, `DESIGNKIT_STATE_FILE` and `DESIGNKIT_CATALOG`
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Override fields from a variable source; empty values are ignored
    pub fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        let var = |key: &str| var(key).filter(|value| !value.trim().is_empty());
        if let Some(bind) = var("DESIGNKIT_BIND") {
            self.server.bind = bind;
        }
        if let Some(state_file) = var("DESIGNKIT_STATE_FILE") {
            self.storage.state_file = PathBuf::from(state_file);
        }
        if let Some(catalog) = var("DESIGNKIT_CATALOG") {
            self.catalog.path = Some(PathBuf::from(catalog));
        }
    }

    /// The configured catalog, or the built-in one
    pub fn load_catalog(&self) -> Result<Catalog> {
        let Some(path) = &self.catalog.path else {
            return Ok(Catalog::builtin());
        };
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;
        let catalog = Catalog::from_toml_str(&content)
            .with_context(|| format!("Failed to parse catalog {}", path.display()))?;
        debug!(path = %path.display(), version = catalog.version(), "loaded catalog");
        Ok(catalog)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
