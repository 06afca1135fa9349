//! MenuItem entity - a persisted node of a named menu
//!
//! Items are stored flat. The hierarchy lives in `parent_id` references
//! between items of the same `menu_name`.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::ports::RouteResolver;
use crate::domain::value_objects::{LinkTarget, MenuItemId};

/// A single menu entry as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub menu_name: String,
    pub title: String,
    #[serde(
        rename = "parent",
        alias = "parent_id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub parent_id: Option<MenuItemId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub named_url: Option<String>,
    #[serde(default)]
    pub order: u32,
}

impl MenuItem {
    /// Create a root item with no destination and order 0
    pub fn new(id: impl Into<MenuItemId>, menu_name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            menu_name: menu_name.into(),
            title: title.into(),
            parent_id: None,
            url: None,
            named_url: None,
            order: 0,
        }
    }

    pub fn with_parent(mut self, parent: impl Into<MenuItemId>) -> Self {
        self.parent_id = Some(parent.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_named_url(mut self, name: impl Into<String>) -> Self {
        self.named_url = Some(name.into());
        self
    }

    pub fn with_order(mut self, order: u32) -> Self {
        self.order = order;
        self
    }

    /// Literal address, if one is set and not blank
    pub fn literal_url(&self) -> Option<&str> {
        non_blank(self.url.as_deref())
    }

    /// Symbolic route name, if one is set and not blank
    pub fn route_name(&self) -> Option<&str> {
        non_blank(self.named_url.as_deref())
    }

    /// Effective address of this item.
    ///
    /// A set `named_url` takes priority and is resolved through `routes`; if
    /// the route is unknown the item has no destination. Otherwise the
    /// literal `url` is used.
    pub fn link_target(&self, routes: &dyn RouteResolver) -> LinkTarget {
        if let Some(name) = self.route_name() {
            return match routes.reverse(name) {
                Ok(address) => LinkTarget::from_address(address),
                Err(err) => {
                    tracing::debug!(item = %self.id, route = name, "{err}, rendering without destination");
                    LinkTarget::NoDestination
                }
            };
        }
        match self.literal_url() {
            Some(url) => LinkTarget::from_address(url),
            None => LinkTarget::NoDestination,
        }
    }

    /// Canonical sibling ordering: `order` ascending, then `title` ascending
    pub fn sibling_cmp(&self, other: &Self) -> Ordering {
        self.order
            .cmp(&other.order)
            .then_with(|| self.title.cmp(&other.title))
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.menu_name, self.title)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
