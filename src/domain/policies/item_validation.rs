//! Item Validation Policy
//!
//! Write-side checks for the invariants the render path relies on: parents
//! exist, live in the same menu, and never form a loop. Stores run this on
//! load so a malformed store is rejected before any menu is drawn.

use std::collections::{HashMap, HashSet};
use std::fmt;

use thiserror::Error;

use crate::domain::entities::MenuItem;
use crate::domain::value_objects::MenuItemId;

pub const MAX_MENU_NAME_LEN: usize = 50;
pub const MAX_TITLE_LEN: usize = 100;
pub const MAX_URL_LEN: usize = 200;
pub const MAX_NAMED_URL_LEN: usize = 100;

/// A single broken invariant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("item {id}: duplicate id")]
    DuplicateId { id: MenuItemId },

    #[error("item {id}: {field} must not be empty")]
    EmptyField { id: MenuItemId, field: &'static str },

    #[error("item {id}: {field} is {len} characters, limit is {max}")]
    FieldTooLong {
        id: MenuItemId,
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("item {id}: item cannot be its own parent")]
    SelfParent { id: MenuItemId },

    #[error("item {id}: parent {parent} does not exist")]
    MissingParent { id: MenuItemId, parent: MenuItemId },

    #[error("item {id}: parent {parent} belongs to menu '{parent_menu}', not '{menu}'")]
    CrossMenuParent {
        id: MenuItemId,
        parent: MenuItemId,
        menu: String,
        parent_menu: String,
    },

    #[error("item {id}: parent chain loops back on itself")]
    ParentCycle { id: MenuItemId },
}

/// Every violation found in an item set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.violations.as_slice() {
            [] => write!(f, "no violations"),
            [only] => write!(f, "{only}"),
            [first, rest @ ..] => write!(f, "{first} (and {} more)", rest.len()),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check `items` against the store invariants, collecting every violation
pub fn validate_items(items: &[MenuItem]) -> Result<(), ValidationError> {
    let mut violations = Vec::new();
    let mut index: HashMap<MenuItemId, &MenuItem> = HashMap::with_capacity(items.len());

    for item in items {
        if index.insert(item.id, item).is_some() {
            violations.push(Violation::DuplicateId { id: item.id });
        }
        check_fields(item, &mut violations);
    }

    for item in items {
        let Some(parent) = item.parent_id else {
            continue;
        };
        if parent == item.id {
            violations.push(Violation::SelfParent { id: item.id });
            continue;
        }
        match index.get(&parent) {
            None => violations.push(Violation::MissingParent {
                id: item.id,
                parent,
            }),
            Some(parent_item) if parent_item.menu_name != item.menu_name => {
                violations.push(Violation::CrossMenuParent {
                    id: item.id,
                    parent,
                    menu: item.menu_name.clone(),
                    parent_menu: parent_item.menu_name.clone(),
                })
            }
            Some(_) => {}
        }
    }

    check_cycles(items, &index, &mut violations);

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { violations })
    }
}

fn check_fields(item: &MenuItem, violations: &mut Vec<Violation>) {
    let required = [
        ("menu_name", &item.menu_name, MAX_MENU_NAME_LEN),
        ("title", &item.title, MAX_TITLE_LEN),
    ];
    for (field, value, max) in required {
        if value.trim().is_empty() {
            violations.push(Violation::EmptyField { id: item.id, field });
        } else {
            check_len(item.id, field, value, max, violations);
        }
    }

    if let Some(url) = &item.url {
        check_len(item.id, "url", url, MAX_URL_LEN, violations);
    }
    if let Some(named_url) = &item.named_url {
        check_len(item.id, "named_url", named_url, MAX_NAMED_URL_LEN, violations);
    }
}

fn check_len(
    id: MenuItemId,
    field: &'static str,
    value: &str,
    max: usize,
    violations: &mut Vec<Violation>,
) {
    let len = value.chars().count();
    if len > max {
        violations.push(Violation::FieldTooLong { id, field, len, max });
    }
}

/// Report one violation per parent loop. Self-parents are reported separately.
fn check_cycles(
    items: &[MenuItem],
    index: &HashMap<MenuItemId, &MenuItem>,
    violations: &mut Vec<Violation>,
) {
    let mut settled: HashSet<MenuItemId> = HashSet::with_capacity(items.len());

    for item in items {
        let mut chain = Vec::new();
        let mut on_chain = HashSet::new();
        let mut cursor = Some(item);

        while let Some(node) = cursor {
            if settled.contains(&node.id) {
                break;
            }
            if !on_chain.insert(node.id) {
                if node.parent_id != Some(node.id) {
                    violations.push(Violation::ParentCycle { id: node.id });
                }
                break;
            }
            chain.push(node.id);
            cursor = node.parent_id.and_then(|parent| index.get(&parent).copied());
        }

        settled.extend(chain);
    }
}
