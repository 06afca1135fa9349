//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `repositories/` - Menu stores (TOML file, in-memory)
//! - `routes` - Named route table

pub mod repositories;
pub mod routes;

// Re-export for convenience
pub use repositories::{InMemoryMenuRepository, TomlMenuRepository};
pub use routes::RouteTable;
