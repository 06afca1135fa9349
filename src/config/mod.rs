//! Configuration module for treemenu
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (TREEMENU_*)
//! 3. Explicit `--config` file
//! 4. Working directory config (./treemenu.toml)
//! 5. User config (<config dir>/treemenu/config.toml)
//! 6. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{Config, LogFormat, LoggingConfig, RenderConfig, StoreConfig};
