//! treemenu - hierarchical navigation menus rendered in a single fetch
//!
//! Menu items are stored flat and grouped by menu name. Rendering a menu
//! fetches its items once, assembles the tree in memory, marks the item
//! matching the current page together with its ancestors, and emits nested
//! `<ul>` markup where only the branches leading to the active item open.

pub mod application;
pub mod config;
pub mod demo;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod telemetry;

// Re-exports for convenience
pub use application::{MenuService, MenuSummary};
pub use config::Config;
pub use domain::entities::MenuItem;
pub use domain::ports::{MenuRepository, NoRoutes, RouteNotFound, RouteResolver};
pub use domain::services::{
    ActivePath, MenuItemNode, MenuListing, MenuRenderer, MenuTree, RenderOptions,
};
pub use domain::value_objects::{LinkTarget, MenuItemId};
pub use error::{TreeMenuError, TreeMenuResult};
pub use infrastructure::{InMemoryMenuRepository, RouteTable, TomlMenuRepository};
pub use presentation::{TagContext, TagRegistry, TemplateTag};
