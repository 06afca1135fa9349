//! Service Factory
//!
//! Creates the menu service with infrastructure dependencies wired up.
//! This is the dependency injection point for the binary.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::MenuService;
use crate::config::Config;
use crate::infrastructure::{RouteTable, TomlMenuRepository};

use super::template::{DrawMenuTag, TagRegistry};

/// Type alias for the MenuService the CLI runs against
pub type ConcreteMenuService = MenuService<TomlMenuRepository, RouteTable>;

/// Store file to use: the `--store` flag, else the configured path
pub fn resolve_store_path(config: &Config, store_override: Option<&Path>) -> PathBuf {
    match store_override {
        Some(path) => path.to_path_buf(),
        None => config.store_path(),
    }
}

/// Create the TOML-backed store for `config`
pub fn create_repository(config: &Config, store_override: Option<&Path>) -> TomlMenuRepository {
    TomlMenuRepository::new(resolve_store_path(config, store_override))
}

/// Create a menu service with store, routes and render options from `config`
pub fn create_menu_service(config: &Config, store_override: Option<&Path>) -> ConcreteMenuService {
    MenuService::new(
        create_repository(config, store_override),
        config.route_table(),
    )
    .with_render_options(config.render_options())
}

/// Create the tag registry used for page templates
pub fn create_tag_registry(service: Arc<ConcreteMenuService>) -> TagRegistry {
    let mut tags = TagRegistry::new();
    tags.register(DrawMenuTag::new(service));
    tags
}
