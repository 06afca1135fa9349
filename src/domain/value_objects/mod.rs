//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod link_target;
mod menu_item_id;

pub use link_target::{LinkTarget, NO_DESTINATION_HREF};
pub use menu_item_id::MenuItemId;
