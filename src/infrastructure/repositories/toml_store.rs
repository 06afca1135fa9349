//! TOML Menu Repository
//!
//! Implements the MenuRepository port over a TOML file holding an
//! `[[items]]` array. The file is read once per fetch. Fetches only parse
//! the file; `save` and `load_checked` run the item policy.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::entities::MenuItem;
use crate::domain::policies::validate_items;
use crate::domain::ports::MenuRepository;
use crate::error::{TreeMenuError, TreeMenuResult};

/// On-disk layout of the menu store
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TomlMenuStore {
    #[serde(default)]
    items: Vec<MenuItem>,
}

/// TOML-file backed menu repository
#[derive(Debug, Clone)]
pub struct TomlMenuRepository {
    path: PathBuf,
}

impl TomlMenuRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every stored item without validating it. A missing file is an
    /// empty store.
    pub fn load(&self) -> TreeMenuResult<Vec<MenuItem>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "menu store missing, treating as empty");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let store: TomlMenuStore =
            toml::from_str(&content).map_err(|e| TreeMenuError::InvalidStore {
                file: self.path.clone(),
                message: e.to_string(),
            })?;
        Ok(store.items)
    }

    /// Read every stored item and reject the store if any item breaks the
    /// item policy
    pub fn load_checked(&self) -> TreeMenuResult<Vec<MenuItem>> {
        let items = self.load()?;
        validate_items(&items).map_err(|source| TreeMenuError::InvalidItems {
            file: self.path.clone(),
            source,
        })?;
        Ok(items)
    }

    /// Validate and write `items`, replacing the store contents
    pub fn save(&self, items: &[MenuItem]) -> TreeMenuResult<()> {
        validate_items(items).map_err(|source| TreeMenuError::InvalidItems {
            file: self.path.clone(),
            source,
        })?;

        let store = TomlMenuStore {
            items: items.to_vec(),
        };
        let content = toml::to_string_pretty(&store)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, content)?;
        Ok(())
    }

    fn fetch(&self, filter: impl Fn(&MenuItem) -> bool) -> Result<Vec<MenuItem>> {
        let mut items: Vec<MenuItem> = self
            .load()?
            .into_iter()
            .filter(|item| filter(item))
            .collect();
        items.sort_by(MenuItem::sibling_cmp);
        Ok(items)
    }
}

impl MenuRepository for TomlMenuRepository {
    fn fetch_items(&self, menu_name: &str) -> Result<Vec<MenuItem>> {
        self.fetch(|item| item.menu_name == menu_name)
    }

    fn fetch_all(&self) -> Result<Vec<MenuItem>> {
        self.fetch(|_| true)
    }
}
