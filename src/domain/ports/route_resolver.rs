//! RouteResolver port - turns symbolic route names into addresses
//!
//! The routing layer owns the route table; the menu core only asks it to
//! reverse a name. An unknown name is the only failure it can report.

use thiserror::Error;

/// The routing collaborator has no route registered under `name`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no route named '{name}'")]
pub struct RouteNotFound {
    pub name: String,
}

impl RouteNotFound {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Resolves named routes to literal addresses
pub trait RouteResolver: Send + Sync {
    /// Reverse a route name into its address
    fn reverse(&self, name: &str) -> Result<String, RouteNotFound>;
}

impl<R: RouteResolver + ?Sized> RouteResolver for &R {
    fn reverse(&self, name: &str) -> Result<String, RouteNotFound> {
        (**self).reverse(name)
    }
}

/// Resolver with no routes; every name fails to resolve
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRoutes;

impl RouteResolver for NoRoutes {
    fn reverse(&self, name: &str) -> Result<String, RouteNotFound> {
        Err(RouteNotFound::new(name))
    }
}
