//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating the menu service with infrastructure dependencies
//! - Template tag expansion for host pages
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates services with proper dependencies (dependency injection)
//! - `template` - `{% draw_menu %}` and the tag registry
//! - `output` - Output rendering helpers

pub mod cli;
pub mod factory;
pub mod output;
pub mod template;

pub use factory::{create_menu_service, create_tag_registry, ConcreteMenuService};
pub use template::{DrawMenuTag, TagContext, TagRegistry, TemplateTag};
