//! Menu item identifier value object

use std::fmt;

use serde::{Deserialize, Serialize};

/// Store-wide unique identifier of a menu item
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct MenuItemId(u64);

impl MenuItemId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for MenuItemId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}
