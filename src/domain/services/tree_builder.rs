//! Tree construction from a flat item list.
//!
//! A named menu is fetched as one flat list. `MenuTree::build` turns it into
//! an id index, a parent-to-children mapping and an ordered root list in two
//! linear passes. The stored items are only borrowed, never modified.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::domain::entities::MenuItem;
use crate::domain::value_objects::MenuItemId;

/// In-memory tree over the items of one named menu
#[derive(Debug, Clone, Default)]
pub struct MenuTree<'a> {
    /// All items in canonical `(order, title)` order
    ordered: Vec<&'a MenuItem>,
    index: HashMap<MenuItemId, &'a MenuItem>,
    children: HashMap<MenuItemId, Vec<&'a MenuItem>>,
    roots: Vec<&'a MenuItem>,
}

impl<'a> MenuTree<'a> {
    /// Build the tree for one menu's items.
    ///
    /// Items whose parent is absent from `items` become roots.
    pub fn build(items: &'a [MenuItem]) -> Self {
        let ordered = canonical_order(items);

        let mut index = HashMap::with_capacity(ordered.len());
        let mut children: HashMap<MenuItemId, Vec<&'a MenuItem>> =
            HashMap::with_capacity(ordered.len());
        for item in &ordered {
            index.insert(item.id, *item);
            children.insert(item.id, Vec::new());
        }

        let mut roots = Vec::new();
        for item in &ordered {
            match item.parent_id {
                Some(parent) if index.contains_key(&parent) => {
                    if let Some(siblings) = children.get_mut(&parent) {
                        siblings.push(*item);
                    }
                }
                Some(parent) => {
                    tracing::debug!(
                        item = %item.id,
                        parent = %parent,
                        "parent not in menu '{}', promoting to root",
                        item.menu_name
                    );
                    roots.push(*item);
                }
                None => roots.push(*item),
            }
        }

        Self {
            ordered,
            index,
            children,
            roots,
        }
    }

    /// Top-level items in sibling order
    pub fn roots(&self) -> &[&'a MenuItem] {
        &self.roots
    }

    /// Children of `id` in sibling order; empty for leaves and unknown ids
    pub fn children_of(&self, id: MenuItemId) -> &[&'a MenuItem] {
        self.children.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn get(&self, id: MenuItemId) -> Option<&'a MenuItem> {
        self.index.get(&id).copied()
    }

    pub fn contains(&self, id: MenuItemId) -> bool {
        self.index.contains_key(&id)
    }

    /// Every item in canonical order
    pub fn items(&self) -> &[&'a MenuItem] {
        &self.ordered
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

/// Borrow `items` in `(order, title)` order, sorting only when needed.
fn canonical_order(items: &[MenuItem]) -> Vec<&MenuItem> {
    let mut ordered: Vec<&MenuItem> = items.iter().collect();
    let sorted = ordered
        .windows(2)
        .all(|pair| pair[0].sibling_cmp(pair[1]) != Ordering::Greater);
    if !sorted {
        tracing::debug!(items = ordered.len(), "items not in sibling order, sorting");
        ordered.sort_by(|a, b| a.sibling_cmp(b));
    }
    ordered
}
