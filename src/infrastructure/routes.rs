//! Route Table
//!
//! A static name → address table implementing the RouteResolver port.
//! Populated from the `[routes]` section of the configuration file.

use std::collections::BTreeMap;

use crate::domain::ports::{RouteNotFound, RouteResolver};

/// Named routes known to the host site
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    routes: BTreeMap<String, String>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` as an alias for `address`, replacing any earlier entry
    pub fn insert(&mut self, name: impl Into<String>, address: impl Into<String>) {
        self.routes.insert(name.into(), address.into());
    }

    pub fn with_route(mut self, name: impl Into<String>, address: impl Into<String>) -> Self {
        self.insert(name, address);
        self
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Routes sorted by name
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.routes
            .iter()
            .map(|(name, address)| (name.as_str(), address.as_str()))
    }
}

impl From<BTreeMap<String, String>> for RouteTable {
    fn from(routes: BTreeMap<String, String>) -> Self {
        Self { routes }
    }
}

impl<N: Into<String>, A: Into<String>> FromIterator<(N, A)> for RouteTable {
    fn from_iter<I: IntoIterator<Item = (N, A)>>(iter: I) -> Self {
        Self {
            routes: iter
                .into_iter()
                .map(|(name, address)| (name.into(), address.into()))
                .collect(),
        }
    }
}

impl RouteResolver for RouteTable {
    fn reverse(&self, name: &str) -> Result<String, RouteNotFound> {
        self.routes
            .get(name)
            .cloned()
            .ok_or_else(|| RouteNotFound::new(name))
    }
}
