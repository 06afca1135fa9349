//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::services::{RenderOptions, DEFAULT_ROOT_CLASS};
use crate::error::TreeMenuResult;
use crate::infrastructure::RouteTable;

use super::loader::{self, ConfigWarning};

/// Menu store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// TOML menu store; relative paths resolve against the config file
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from("menus.toml")
}

/// Markup configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_root_class")]
    pub root_class: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            root_class: default_root_class(),
        }
    }
}

fn default_root_class() -> String {
    DEFAULT_ROOT_CLASS.to_string()
}

/// Log line layout on stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "compact" => Some(Self::Compact),
            "pretty" => Some(Self::Pretty),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,

    /// `EnvFilter` directive, e.g. `treemenu=debug`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Named routes, name → address
    #[serde(default)]
    pub routes: BTreeMap<String, String>,

    /// File this config was read from
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> TreeMenuResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> TreeMenuResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from an explicit path, the working directory, the user config, or defaults
    pub fn load_or_default(explicit: Option<&Path>) -> TreeMenuResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(explicit)
    }

    /// Apply environment variable overrides (TREEMENU_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }

    /// Store path, resolved against the directory of the config file
    pub fn store_path(&self) -> PathBuf {
        match self.source.as_deref().and_then(Path::parent) {
            Some(dir) if self.store.path.is_relative() => dir.join(&self.store.path),
            _ => self.store.path.clone(),
        }
    }

    pub fn route_table(&self) -> RouteTable {
        RouteTable::from(self.routes.clone())
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            root_class: self.render.root_class.clone(),
        }
    }

    /// Serialize and write this config as TOML
    pub fn save(&self, path: &Path) -> TreeMenuResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
