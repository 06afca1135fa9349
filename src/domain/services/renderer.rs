//! HTML rendering for menu trees.
//!
//! Rendering is a pre-order walk from the roots. A branch is only descended
//! into when it is on the active path or directly below the active item, so
//! collapsed subtrees never reach the output.

use std::borrow::Cow;

use crate::domain::entities::MenuItem;
use crate::domain::ports::RouteResolver;

use super::active_path::ActivePath;
use super::tree_builder::MenuTree;

/// Class attached to every `<ul>` unless configured otherwise
pub const DEFAULT_ROOT_CLASS: &str = "tree-menu";

/// Presentation options for rendered markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub root_class: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            root_class: DEFAULT_ROOT_CLASS.to_string(),
        }
    }
}

/// Highlight and expansion decisions for one item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemState {
    pub is_active: bool,
    pub is_in_path: bool,
    pub has_children: bool,
    pub should_expand: bool,
}

impl ItemState {
    /// CSS classes in emission order
    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = Vec::with_capacity(4);
        if self.is_active {
            classes.push("active");
        }
        if self.is_in_path {
            classes.push("in-path");
        }
        if self.has_children {
            classes.push("has-children");
            if self.should_expand {
                classes.push("expanded");
            }
        }
        classes
    }

    /// Whether the item's children are emitted
    pub fn renders_children(&self) -> bool {
        self.has_children && self.should_expand
    }
}

/// Renders one resolved menu tree to nested `<ul>` markup
pub struct MenuRenderer<'r, 'a> {
    tree: &'r MenuTree<'a>,
    active: &'r ActivePath,
    routes: &'r dyn RouteResolver,
    options: &'r RenderOptions,
}

impl<'r, 'a> MenuRenderer<'r, 'a> {
    pub fn new(
        tree: &'r MenuTree<'a>,
        active: &'r ActivePath,
        routes: &'r dyn RouteResolver,
        options: &'r RenderOptions,
    ) -> Self {
        Self {
            tree,
            active,
            routes,
            options,
        }
    }

    /// Render from the roots down
    pub fn render(&self) -> String {
        self.render_items(self.tree.roots())
    }

    /// Render a sibling list and whatever of its subtrees is expanded
    pub fn render_items(&self, items: &[&MenuItem]) -> String {
        let mut out = String::new();
        self.write_items(items, &mut out);
        out
    }

    /// Decide how `item` is highlighted and whether it opens
    pub fn item_state(&self, item: &MenuItem) -> ItemState {
        let is_in_path = self.active.contains(item.id);
        let parent_is_active = item
            .parent_id
            .is_some_and(|parent| self.active.is_active(parent));
        ItemState {
            is_active: self.active.is_active(item.id),
            is_in_path,
            has_children: !self.tree.children_of(item.id).is_empty(),
            should_expand: is_in_path || parent_is_active,
        }
    }

    fn write_items(&self, items: &[&MenuItem], out: &mut String) {
        if items.is_empty() {
            return;
        }

        out.push_str("<ul class=\"");
        out.push_str(&self.options.root_class);
        out.push_str("\">");

        for item in items {
            let state = self.item_state(item);
            let classes = state.classes();

            if classes.is_empty() {
                out.push_str("<li>");
            } else {
                out.push_str("<li class=\"");
                out.push_str(&classes.join(" "));
                out.push_str("\">");
            }

            let target = item.link_target(self.routes);
            out.push_str("<a href=\"");
            out.push_str(target.href());
            out.push_str("\">");
            out.push_str(&escape_text(&item.title));
            out.push_str("</a>");

            if state.renders_children() {
                self.write_items(self.tree.children_of(item.id), out);
            }

            out.push_str("</li>");
        }

        out.push_str("</ul>");
    }
}

/// Escape `&`, `<` and `>` for use as element text
pub fn escape_text(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}
