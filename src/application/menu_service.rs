//! Menu Use Cases
//!
//! Orchestrates the render flow:
//! 1. Fetch the flat item list for one menu (exactly one fetch)
//! 2. Build the in-memory tree
//! 3. Resolve the active item and its ancestors
//! 4. Render the visible part of the tree
//!
//! The same service backs the read-only listing and detail projections.

use std::collections::BTreeMap;

use crate::domain::entities::MenuItem;
use crate::domain::ports::{MenuRepository, RouteResolver};
use crate::domain::services::{
    ActivePath, MenuItemNode, MenuListing, MenuRenderer, MenuTree, RenderOptions,
};
use crate::domain::value_objects::MenuItemId;
use crate::error::{TreeMenuError, TreeMenuResult};

/// Item count of one stored menu
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct MenuSummary {
    pub menu_name: String,
    pub item_count: usize,
}

/// Menu Service
///
/// Holds the storage and routing collaborators. Every call builds its own
/// tree and active path; nothing is cached between calls.
pub struct MenuService<MR, RR>
where
    MR: MenuRepository,
    RR: RouteResolver,
{
    repository: MR,
    routes: RR,
    options: RenderOptions,
}

impl<MR, RR> MenuService<MR, RR>
where
    MR: MenuRepository,
    RR: RouteResolver,
{
    pub fn new(repository: MR, routes: RR) -> Self {
        Self {
            repository,
            routes,
            options: RenderOptions::default(),
        }
    }

    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn repository(&self) -> &MR {
        &self.repository
    }

    pub fn routes(&self) -> &RR {
        &self.routes
    }

    /// Render `menu_name` as nested markup for the page at `current_address`.
    ///
    /// Returns an empty string when the menu has no items. Only a failing
    /// fetch produces an error.
    pub fn draw_menu(&self, menu_name: &str, current_address: &str) -> TreeMenuResult<String> {
        let items = self.repository.fetch_items(menu_name)?;
        tracing::debug!(menu = menu_name, items = items.len(), "fetched menu items");
        if items.is_empty() {
            return Ok(String::new());
        }

        let tree = MenuTree::build(&items);
        let active = ActivePath::resolve(&tree, current_address, &self.routes);
        let html = MenuRenderer::new(&tree, &active, &self.routes, &self.options).render();
        Ok(html)
    }

    /// Root items of `menu_name` with their children nested
    pub fn menu_listing(&self, menu_name: &str) -> TreeMenuResult<MenuListing> {
        let items = self.repository.fetch_items(menu_name)?;
        if items.is_empty() {
            return Err(TreeMenuError::MenuNotFound {
                menu_name: menu_name.to_string(),
            });
        }

        let tree = MenuTree::build(&items);
        Ok(MenuListing::from_tree(menu_name, &tree, &self.routes))
    }

    /// Every item, optionally restricted to one menu, each with its subtree
    pub fn list_items(&self, menu_name: Option<&str>) -> TreeMenuResult<Vec<MenuItemNode>> {
        let items = match menu_name {
            Some(name) => self.repository.fetch_items(name)?,
            None => self.repository.fetch_all()?,
        };

        // Parents never cross menus, so one tree over all items links correctly.
        let tree = MenuTree::build(&items);
        Ok(tree
            .items()
            .iter()
            .map(|item| MenuItemNode::from_tree(item, &tree, &self.routes))
            .collect())
    }

    /// One item with its subtree
    pub fn item_detail(&self, id: MenuItemId) -> TreeMenuResult<MenuItemNode> {
        let items = self.repository.fetch_all()?;
        let Some(menu_name) = items
            .iter()
            .find(|item| item.id == id)
            .map(|item| item.menu_name.clone())
        else {
            return Err(TreeMenuError::ItemNotFound { id: id.get() });
        };

        let same_menu: Vec<MenuItem> = items
            .into_iter()
            .filter(|item| item.menu_name == menu_name)
            .collect();
        let tree = MenuTree::build(&same_menu);
        let item = tree
            .get(id)
            .ok_or(TreeMenuError::ItemNotFound { id: id.get() })?;
        Ok(MenuItemNode::from_tree(item, &tree, &self.routes))
    }

    /// Stored menu names with their item counts, sorted by name
    pub fn menus(&self) -> TreeMenuResult<Vec<MenuSummary>> {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for item in self.repository.fetch_all()? {
            *counts.entry(item.menu_name).or_default() += 1;
        }
        Ok(counts
            .into_iter()
            .map(|(menu_name, item_count)| MenuSummary {
                menu_name,
                item_count,
            })
            .collect())
    }
}
