//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod menu_repository;
pub mod route_resolver;

pub use menu_repository::MenuRepository;
pub use route_resolver::{NoRoutes, RouteNotFound, RouteResolver};
