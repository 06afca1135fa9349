//! Repository Implementations
//!
//! Concrete implementations of the MenuRepository port.

mod memory;
mod toml_store;

pub use memory::InMemoryMenuRepository;
pub use toml_store::TomlMenuRepository;
