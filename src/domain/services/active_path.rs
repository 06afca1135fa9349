//! Active item lookup and ancestor path resolution.

use std::collections::HashSet;

use crate::domain::ports::RouteResolver;
use crate::domain::value_objects::MenuItemId;

use super::tree_builder::MenuTree;

/// The item matching the current page and its chain up to a root
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivePath {
    active: Option<MenuItemId>,
    path: HashSet<MenuItemId>,
}

impl ActivePath {
    /// Find the item whose link target equals `current_address`.
    ///
    /// Items are scanned in sibling order and the first match wins. The
    /// ancestor walk stops at a missing parent, or at an id it has already
    /// visited, which only happens when stored data contains a parent cycle.
    pub fn resolve(tree: &MenuTree<'_>, current_address: &str, routes: &dyn RouteResolver) -> Self {
        let Some(active) = tree
            .items()
            .iter()
            .find(|item| item.link_target(routes).matches(current_address))
        else {
            return Self::default();
        };

        let mut path = HashSet::new();
        let mut node = Some(*active);
        while let Some(item) = node {
            if !path.insert(item.id) {
                tracing::warn!(
                    item = %item.id,
                    menu = %item.menu_name,
                    "parent cycle detected while resolving active path"
                );
                break;
            }
            node = item.parent_id.and_then(|parent| tree.get(parent));
        }

        tracing::debug!(active = %active.id, depth = path.len(), "resolved active item");
        Self {
            active: Some(active.id),
            path,
        }
    }

    pub fn active(&self) -> Option<MenuItemId> {
        self.active
    }

    pub fn is_active(&self, id: MenuItemId) -> bool {
        self.active == Some(id)
    }

    /// Whether `id` is the active item or one of its ancestors
    pub fn contains(&self, id: MenuItemId) -> bool {
        self.path.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}
