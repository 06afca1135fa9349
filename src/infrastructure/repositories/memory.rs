//! In-memory Menu Repository
//!
//! Holds items in a `Vec` and counts fetches, so hosts that already have
//! their records loaded (and tests) can drive the menu service directly.

use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{anyhow, Result};

use crate::domain::entities::MenuItem;
use crate::domain::ports::MenuRepository;

/// Menu repository backed by a vector of items
#[derive(Debug, Default)]
pub struct InMemoryMenuRepository {
    items: Vec<MenuItem>,
    failure: Option<String>,
    fetches: AtomicUsize,
}

impl InMemoryMenuRepository {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self {
            items,
            failure: None,
            fetches: AtomicUsize::new(0),
        }
    }

    /// A repository whose every fetch fails with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            failure: Some(message.into()),
            fetches: AtomicUsize::new(0),
        }
    }

    /// Number of fetches served so far
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    fn fetch(&self, filter: impl Fn(&MenuItem) -> bool) -> Result<Vec<MenuItem>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.failure {
            return Err(anyhow!("{message}"));
        }
        let mut items: Vec<MenuItem> = self
            .items
            .iter()
            .filter(|&item| filter(item))
            .cloned()
            .collect();
        items.sort_by(MenuItem::sibling_cmp);
        Ok(items)
    }
}

impl MenuRepository for InMemoryMenuRepository {
    fn fetch_items(&self, menu_name: &str) -> Result<Vec<MenuItem>> {
        self.fetch(|item| item.menu_name == menu_name)
    }

    fn fetch_all(&self) -> Result<Vec<MenuItem>> {
        self.fetch(|_| true)
    }
}
