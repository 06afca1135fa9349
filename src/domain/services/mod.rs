//! Domain Services
//!
//! Pure menu logic: tree assembly, active-path resolution, rendering and
//! read-only projections. Nothing here performs I/O.

mod active_path;
mod listing;
mod renderer;
mod tree_builder;

pub use active_path::ActivePath;
pub use listing::{MenuItemNode, MenuListing};
pub use renderer::{escape_text, ItemState, MenuRenderer, RenderOptions, DEFAULT_ROOT_CLASS};
pub use tree_builder::MenuTree;
