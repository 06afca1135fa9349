//! MenuRepository port - abstraction for fetching menu items
//!
//! This trait lets the domain load menu records without knowing where they
//! are stored. Each call is one fetch against the backing store.

use anyhow::Result;

use crate::domain::entities::MenuItem;

/// Read-only access to persisted menu items
pub trait MenuRepository: Send + Sync {
    /// Fetch every item whose `menu_name` equals `menu_name`
    ///
    /// Items come back sorted by `(order, title)`. An unknown menu name
    /// yields an empty vector, never an error.
    fn fetch_items(&self, menu_name: &str) -> Result<Vec<MenuItem>>;

    /// Fetch every stored item across all menus, sorted by `(order, title)`
    fn fetch_all(&self) -> Result<Vec<MenuItem>>;
}

impl<R: MenuRepository + ?Sized> MenuRepository for &R {
    fn fetch_items(&self, menu_name: &str) -> Result<Vec<MenuItem>> {
        (**self).fetch_items(menu_name)
    }

    fn fetch_all(&self) -> Result<Vec<MenuItem>> {
        (**self).fetch_all()
    }
}
