//! Domain Entities
//!
//! Core domain entities that have identity.
//! - `MenuItem` - A stored entry of a named menu

mod menu_item;

pub use menu_item::MenuItem;
