//! Read-only projections of stored menus.
//!
//! These back the listing/detail views consumed by API clients. They share
//! the tree builder with rendering but never look at the current page.

use serde::Serialize;

use crate::domain::entities::MenuItem;
use crate::domain::ports::RouteResolver;
use crate::domain::value_objects::MenuItemId;

use super::tree_builder::MenuTree;

/// One item with its resolved address and nested children
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItemNode {
    pub id: MenuItemId,
    pub title: String,
    pub menu_name: String,
    pub parent: Option<MenuItemId>,
    /// Effective address, `#` when there is no destination
    pub url: String,
    pub named_url: Option<String>,
    pub order: u32,
    pub children: Vec<MenuItemNode>,
}

impl MenuItemNode {
    /// Project `item` and its whole subtree
    pub fn from_tree(item: &MenuItem, tree: &MenuTree<'_>, routes: &dyn RouteResolver) -> Self {
        Self::project(item, tree, routes, &mut Vec::new())
    }

    /// `ancestors` holds the ids above `item`; a child already among them is
    /// part of a parent cycle and is left out.
    fn project(
        item: &MenuItem,
        tree: &MenuTree<'_>,
        routes: &dyn RouteResolver,
        ancestors: &mut Vec<MenuItemId>,
    ) -> Self {
        ancestors.push(item.id);
        let mut children = Vec::new();
        for child in tree.children_of(item.id) {
            if !ancestors.contains(&child.id) {
                children.push(Self::project(child, tree, routes, ancestors));
            }
        }
        ancestors.pop();

        Self {
            id: item.id,
            title: item.title.clone(),
            menu_name: item.menu_name.clone(),
            parent: item.parent_id,
            url: item.link_target(routes).href().to_string(),
            named_url: item.route_name().map(str::to_string),
            order: item.order,
            children,
        }
    }
}

/// A named menu as a forest of nested nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuListing {
    pub menu_name: String,
    pub items: Vec<MenuItemNode>,
    pub total_items: usize,
}

impl MenuListing {
    pub fn from_tree(menu_name: &str, tree: &MenuTree<'_>, routes: &dyn RouteResolver) -> Self {
        Self {
            menu_name: menu_name.to_string(),
            items: tree
                .roots()
                .iter()
                .map(|root| MenuItemNode::from_tree(root, tree, routes))
                .collect(),
            total_items: tree.len(),
        }
    }
}
